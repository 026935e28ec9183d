//! Carousel configuration and its resolution against a screen width.

use crate::carousel::constants::Constants;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Host overrides for the carousel's look. Unset dimensions fall back to
/// [`Constants`] once the screen width is known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselStyle {
    pub card_width: Option<f32>,
    pub card_height: Option<f32>,
    pub spacing: f32,
    pub inactive_card_width: Option<f32>,
    /// Height of non-active cards; `None` keeps them at `card_height`.
    pub inactive_card_height: Option<f32>,
    pub card_corner_radius: f32,
    pub show_paging_indicator: bool,
    pub paging_indicator_active_color: Color,
    pub paging_indicator_inactive_color: Color,
}

impl Default for CarouselStyle {
    fn default() -> Self {
        Self {
            card_width: None,
            card_height: None,
            spacing: Constants::SPACING,
            inactive_card_width: None,
            inactive_card_height: None,
            card_corner_radius: Constants::CARD_RADIUS,
            show_paging_indicator: true,
            paging_indicator_active_color: Color::Blue,
            paging_indicator_inactive_color: Color::Gray,
        }
    }
}

/// Concrete pixel sizes for one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub card_width: f32,
    pub card_height: f32,
    pub spacing: f32,
    pub inactive_card_width: f32,
    pub inactive_card_height: Option<f32>,
    pub card_corner_radius: f32,
}

impl CarouselStyle {
    pub fn resolve(&self, screen_width: f32) -> Dimensions {
        let card_width = self
            .card_width
            .unwrap_or_else(|| Constants::card_width(screen_width));
        Dimensions {
            card_width,
            card_height: self
                .card_height
                .unwrap_or_else(|| Constants::card_height(card_width)),
            spacing: self.spacing,
            inactive_card_width: self
                .inactive_card_width
                .unwrap_or_else(|| Constants::inactive_card_width(card_width)),
            inactive_card_height: self.inactive_card_height,
            card_corner_radius: self.card_corner_radius,
        }
    }
}

impl Dimensions {
    pub fn card_height_for(&self, active: bool) -> f32 {
        if active {
            self.card_height
        } else {
            self.inactive_card_height.unwrap_or(self.card_height)
        }
    }

    /// Height of the strip row: the tallest a card can be.
    pub fn strip_height(&self) -> f32 {
        self.card_height
            .max(self.inactive_card_height.unwrap_or(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_screen_width() {
        let dims = CarouselStyle::default().resolve(640.0);
        assert!((dims.card_width - 448.0).abs() < 1e-3);
        assert!((dims.card_height - 295.68).abs() < 1e-3);
        assert!((dims.inactive_card_width - 67.2).abs() < 1e-3);
        assert_eq!(dims.spacing, 16.0);
        assert_eq!(dims.card_corner_radius, 12.0);
    }

    #[test]
    fn test_overrides_win() {
        let style = CarouselStyle {
            card_width: Some(200.0),
            inactive_card_height: Some(80.0),
            ..CarouselStyle::default()
        };
        let dims = style.resolve(1000.0);
        assert_eq!(dims.card_width, 200.0);
        assert!((dims.card_height - 132.0).abs() < 1e-3);
        assert_eq!(dims.card_height_for(true), dims.card_height);
        assert_eq!(dims.card_height_for(false), 80.0);
    }

    #[test]
    fn test_inactive_height_defaults_to_card_height() {
        let dims = CarouselStyle::default().resolve(400.0);
        assert_eq!(dims.card_height_for(false), dims.card_height);
    }

    #[test]
    fn test_colors_parse_from_toml() {
        let style: CarouselStyle = toml::from_str(
            r#"
            spacing = 8.0
            paging_indicator_active_color = "red"
            "#,
        )
        .unwrap();
        assert_eq!(style.spacing, 8.0);
        assert_eq!(style.paging_indicator_active_color, Color::Red);
        assert_eq!(style.paging_indicator_inactive_color, Color::Gray);
    }
}
