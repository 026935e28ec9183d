//! Default measurements, in logical pixels.

/// Stock measurements used when a [`CarouselStyle`](crate::CarouselStyle)
/// leaves a dimension unset.
pub struct Constants;

impl Constants {
    pub const SPACING: f32 = 16.0;
    pub const CARD_WIDTH_RATIO: f32 = 0.7;
    pub const CARD_HEIGHT_RATIO: f32 = 0.66;
    pub const INACTIVE_CARD_WIDTH_RATIO: f32 = 0.15;
    pub const CARD_RADIUS: f32 = 12.0;
    pub const CARD_SHADOW_RADIUS: f32 = 6.0;

    pub const INDICATOR_DOT_SIZE: f32 = 8.0;
    pub const INDICATOR_SPACING: f32 = 8.0;
    /// Vertical gap between the strip and the paging indicator.
    pub const STACK_SPACING: f32 = 16.0;
    pub const PADDING: f32 = 16.0;

    pub const SPRING_RESPONSE: f32 = 0.4;
    pub const SPRING_DAMPING_FRACTION: f32 = 0.9;

    pub fn card_width(screen_width: f32) -> f32 {
        screen_width * Self::CARD_WIDTH_RATIO
    }

    pub fn card_height(card_width: f32) -> f32 {
        card_width * Self::CARD_HEIGHT_RATIO
    }

    pub fn inactive_card_width(card_width: f32) -> f32 {
        card_width * Self::INACTIVE_CARD_WIDTH_RATIO
    }
}
