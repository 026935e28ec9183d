//! Horizontal strip arithmetic.
//!
//! The strip is all cards laid side by side with `spacing` between them,
//! centered on the screen and then shifted by an offset so the active card
//! sits `inactive_card_width + spacing` from the left edge, leaving room
//! for the previous card to peek in.

/// Inputs of the offset computation, all in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripGeometry {
    pub number_of_items: usize,
    pub card_width: f32,
    pub spacing: f32,
    pub inactive_card_width: f32,
    pub screen_width: f32,
}

impl StripGeometry {
    pub fn total_canvas_width(&self) -> f32 {
        if self.number_of_items == 0 {
            return 0.0;
        }
        let n = self.number_of_items as f32;
        self.card_width * n + (n - 1.0) * self.spacing
    }

    /// Shift that re-centers the full strip on the screen.
    pub fn x_offset_to_shift(&self) -> f32 {
        (self.total_canvas_width() - self.screen_width) / 2.0
    }

    /// Room reserved on the left for the peeking previous card.
    pub fn left_padding(&self) -> f32 {
        self.inactive_card_width + self.spacing
    }

    /// Distance the strip moves to advance by one card.
    pub fn total_movement(&self) -> f32 {
        self.card_width + self.spacing
    }

    pub fn base_offset(&self, active_card_index: usize) -> f32 {
        self.x_offset_to_shift() + self.left_padding()
            - self.total_movement() * active_card_index as f32
    }

    /// Offset to render with. `screen_drag` is only added while a drag
    /// is in progress.
    pub fn offset(&self, active_card_index: usize, screen_drag: f32, dragging: bool) -> f32 {
        let base = self.base_offset(active_card_index);
        if dragging {
            base + screen_drag
        } else {
            base
        }
    }

    /// Left edge of the strip on screen once `offset` is applied.
    pub fn strip_left(&self, offset: f32) -> f32 {
        (self.screen_width - self.total_canvas_width()) / 2.0 + offset
    }

    /// Left edge of card `index` on screen once `offset` is applied.
    pub fn card_left(&self, index: usize, offset: f32) -> f32 {
        self.strip_left(offset) + self.total_movement() * index as f32
    }
}
