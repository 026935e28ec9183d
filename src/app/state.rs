use crate::app::card::Card;
use crate::config::AppConfig;
use ratatui::layout::Rect;
use std::time::Instant;
use swifty_carousel::{
    CarouselMotion, CarouselState, DragGesture, HapticFeedback, ImpactStyle, StateChange,
};

/// Swipe feedback for a terminal: a pending bell the main loop rings.
#[derive(Debug, Default)]
pub struct TerminalBell {
    pub enabled: bool,
    pending: bool,
}

impl TerminalBell {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            pending: false,
        }
    }

    /// Returns whether a bell is owed, clearing it.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

impl HapticFeedback for TerminalBell {
    fn impact(&mut self, _style: ImpactStyle) {
        if self.enabled {
            self.pending = true;
        }
    }
}

/// Pointer drag in progress: the column the button went down on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerDrag {
    pub origin_column: u16,
}

pub struct AppState {
    pub config: AppConfig,
    pub cards: Vec<Card>,
    pub carousel: CarouselState,
    pub motion: CarouselMotion,
    pub gesture: DragGesture,
    pub pointer: Option<PointerDrag>,
    pub bell: TerminalBell,
    pub viewport: Rect,
    pub last_tick: Instant,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, viewport: Rect) -> Self {
        let cards: Vec<Card> = config.cards.iter().map(Card::from).collect();
        let mut carousel = CarouselState::new(config.behavior.initial_card_index, 0.0);
        carousel.clamp_active_card_index(cards.len());
        let motion = CarouselMotion::new(config.display.animations);
        let bell = TerminalBell::new(config.behavior.bell_on_swipe);
        Self {
            config,
            cards,
            carousel,
            motion,
            gesture: DragGesture::new(),
            pointer: None,
            bell,
            viewport,
            last_tick: Instant::now(),
            should_quit: false,
            dirty: true,
        }
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Record a change forwarded by the carousel subscription.
    pub fn on_carousel_change(&mut self, change: StateChange) {
        if let StateChange::ActiveCardIndex { old, new } = change {
            tracing::debug!(old, new, "active card changed");
        }
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if self.cards.is_empty() {
            return "No cards configured".to_string();
        }
        let mut s = format!(
            "Card {}/{}",
            self.carousel.active_card_index() + 1,
            self.cards.len()
        );
        if self.gesture.is_dragging() {
            s.push_str(&format!(" | dragging {:+.0}px", self.carousel.screen_drag()));
        }
        s
    }
}
