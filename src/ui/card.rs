//! One card in the strip.

use crate::carousel::constants::Constants;
use crate::carousel::state::CarouselState;
use crate::ui::style::Dimensions;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Anything a card can show. Implemented for every type whose reference
/// is a ratatui [`Widget`], so `Paragraph`, `Text` and friends work as is.
pub trait CardContent {
    fn render_content(&self, area: Rect, buf: &mut Buffer);
}

impl<T: ?Sized> CardContent for T
where
    for<'a> &'a T: Widget,
{
    fn render_content(&self, area: Rect, buf: &mut Buffer) {
        Widget::render(self, area, buf);
    }
}

/// Card chrome around an item: border, rounded corners, drop shadow.
///
/// The area passed to `render` is the card itself; the shadow is drawn one
/// cell to the right and below it when the buffer has room.
pub struct CarouselCard<'a, C: CardContent + ?Sized> {
    index: usize,
    active: bool,
    content: &'a C,
    corner_radius: f32,
    shadow: bool,
}

impl<'a, C: CardContent + ?Sized> CarouselCard<'a, C> {
    pub fn new(index: usize, content: &'a C, state: &CarouselState, dimensions: &Dimensions) -> Self {
        Self::with_active(index, content, state.active_card_index() == index, dimensions)
    }

    /// Build a card whose active flag was already decided, e.g. against a
    /// clamped index.
    pub fn with_active(index: usize, content: &'a C, active: bool, dimensions: &Dimensions) -> Self {
        Self {
            index,
            active,
            content,
            corner_radius: dimensions.card_corner_radius,
            shadow: Constants::CARD_SHADOW_RADIUS > 0.0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Target height in pixels for this card.
    pub fn height(&self, dimensions: &Dimensions) -> f32 {
        dimensions.card_height_for(self.active)
    }

    pub fn shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }
}

impl<C: CardContent + ?Sized> Widget for CarouselCard<'_, C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        if self.shadow {
            render_shadow(area, buf);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(Theme::card_border_type(self.corner_radius))
            .border_style(Theme::card_border(self.active))
            .style(Theme::card(self.active));
        let inner = block.inner(area);
        block.render(area, buf);
        self.content.render_content(inner, buf);
    }
}

fn render_shadow(card: Rect, buf: &mut Buffer) {
    let style = Theme::shadow();
    let right = card.right();
    let bottom = card.bottom();
    for y in card.top() + 1..=bottom {
        if let Some(cell) = buf.cell_mut((right, y)) {
            cell.set_symbol(" ").set_style(style);
        }
    }
    for x in card.left() + 1..right {
        if let Some(cell) = buf.cell_mut((x, bottom)) {
            cell.set_symbol(" ").set_style(style);
        }
    }
}
