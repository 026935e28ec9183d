//! The horizontal strip of cards.
//!
//! Each card is drawn into its own scratch buffer and then copied onto the
//! strip, so cards that hang off either edge are clipped cell by cell
//! rather than squeezed into the visible area.

use crate::carousel::geometry::StripGeometry;
use crate::carousel::state::CarouselState;
use crate::ui::card::{CardContent, CarouselCard};
use crate::ui::metrics::CellMetrics;
use crate::ui::motion::CarouselMotion;
use crate::ui::style::Dimensions;
use crate::ui::theme::Theme;
use ratatui::buffer::Cell;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub struct Carousel<'a, C: CardContent> {
    items: &'a [C],
    state: &'a CarouselState,
    dimensions: Dimensions,
    metrics: CellMetrics,
}

impl<'a, C: CardContent> Carousel<'a, C> {
    pub fn new(
        items: &'a [C],
        state: &'a CarouselState,
        dimensions: Dimensions,
        metrics: CellMetrics,
    ) -> Self {
        Self {
            items,
            state,
            dimensions,
            metrics,
        }
    }

    pub fn geometry(&self, area: Rect) -> StripGeometry {
        StripGeometry {
            number_of_items: self.items.len(),
            card_width: self.dimensions.card_width,
            spacing: self.dimensions.spacing,
            inactive_card_width: self.dimensions.inactive_card_width,
            screen_width: self.metrics.width_px(area.width),
        }
    }

    /// Rows the strip needs to show its tallest card.
    pub fn height(&self) -> u16 {
        self.metrics.rows(self.dimensions.strip_height())
    }
}

impl<C: CardContent> StatefulWidget for Carousel<'_, C> {
    type State = CarouselMotion;

    fn render(self, area: Rect, buf: &mut Buffer, motion: &mut CarouselMotion) {
        if area.is_empty() {
            return;
        }
        let Some(last) = self.items.len().checked_sub(1) else {
            Paragraph::new("No items")
                .style(Theme::placeholder())
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        };

        let active = self.state.active_card_index().min(last);
        let geometry = self.geometry(area);
        motion.sync(&geometry, &self.dimensions, active, self.state.screen_drag());
        let offset = motion
            .offset()
            .unwrap_or_else(|| geometry.base_offset(active));

        let width = self.metrics.columns(self.dimensions.card_width);
        for (index, item) in self.items.iter().enumerate() {
            let left_px = geometry.card_left(index, offset);
            let x = area.x as i32 + self.metrics.column_at(left_px);
            if x >= area.right() as i32 || x + width as i32 + 1 <= area.left() as i32 {
                continue;
            }

            let height_px = motion
                .card_height(index)
                .unwrap_or_else(|| self.dimensions.card_height_for(index == active));
            let height = self.metrics.rows(height_px).min(area.height);
            let y = area.y + (area.height - height) / 2;

            let mut scratch = Buffer::empty(Rect::new(0, 0, width + 1, height + 1));
            CarouselCard::with_active(index, item, index == active, &self.dimensions)
                .render(Rect::new(0, 0, width, height), &mut scratch);
            blit(&scratch, buf, x, y as i32, area);
        }
    }
}

/// Copy the drawn cells of `src` onto `dst` at `(x, y)`, skipping cells
/// outside `clip` and cells `src` never touched.
fn blit(src: &Buffer, dst: &mut Buffer, x: i32, y: i32, clip: Rect) {
    let blank = Cell::default();
    for row in 0..src.area.height {
        for col in 0..src.area.width {
            let Some(cell) = src.cell((col, row)) else {
                continue;
            };
            if *cell == blank {
                continue;
            }
            let tx = x + col as i32;
            let ty = y + row as i32;
            if tx < clip.left() as i32
                || tx >= clip.right() as i32
                || ty < clip.top() as i32
                || ty >= clip.bottom() as i32
            {
                continue;
            }
            if let Some(target) = dst.cell_mut((tx as u16, ty as u16)) {
                *target = cell.clone();
            }
        }
    }
}
