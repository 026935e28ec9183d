//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the demo works out of the box.

use serde::{Deserialize, Serialize};
use swifty_carousel::{CarouselStyle, CellMetrics};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub carousel: CarouselStyle,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default = "default_cards")]
    pub cards: Vec<CardConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselStyle::default(),
            display: DisplayConfig::default(),
            behavior: BehaviorConfig::default(),
            logging: LoggingConfig::default(),
            cards: default_cards(),
        }
    }
}

fn default_cards() -> Vec<CardConfig> {
    vec![
        CardConfig {
            title: "Welcome".into(),
            body: "Drag a card left or right with the mouse, or use the arrow keys.".into(),
        },
        CardConfig {
            title: "Peeking".into(),
            body: "The previous and next cards stay partly visible on either side.".into(),
        },
        CardConfig {
            title: "Threshold".into(),
            body: "Short drags snap back; drags past the threshold switch cards.".into(),
        },
        CardConfig {
            title: "Indicator".into(),
            body: "The dots underneath show which card is active.".into(),
        },
        CardConfig {
            title: "Config".into(),
            body: "Sizes, colors and cards come from config.toml.".into(),
        },
    ]
}

/// One demo card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardConfig {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// Terminal rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Pixel width of one terminal column.
    #[serde(default = "default_column_px")]
    pub column_px: f32,
    /// Pixel height of one terminal row.
    #[serde(default = "default_row_px")]
    pub row_px: f32,
    #[serde(default = "default_frame_interval")]
    pub frame_interval_ms: u64,
    #[serde(default = "default_true")]
    pub animations: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            column_px: default_column_px(),
            row_px: default_row_px(),
            frame_interval_ms: default_frame_interval(),
            animations: true,
        }
    }
}

impl DisplayConfig {
    pub fn metrics(&self) -> CellMetrics {
        CellMetrics {
            column_px: self.column_px,
            row_px: self.row_px,
        }
    }
}

/// Interaction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub initial_card_index: usize,
    #[serde(default)]
    pub bell_on_swipe: bool,
    #[serde(default = "default_true")]
    pub keyboard_navigation: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            initial_card_index: 0,
            bell_on_swipe: false,
            keyboard_navigation: true,
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_column_px() -> f32 {
    8.0
}
fn default_row_px() -> f32 {
    16.0
}
fn default_frame_interval() -> u64 {
    16
}
fn default_log_dir() -> String {
    "~/.local/share/swifty-carousel/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
