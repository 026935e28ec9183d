use crate::carousel::constants::Constants;
use crate::carousel::state::CarouselState;
use crate::ui::metrics::CellMetrics;
use ratatui::prelude::*;

const DOT: &str = "●";

/// One dot per item, centered, with the active item's dot highlighted.
pub struct PagingIndicator {
    count: usize,
    active: usize,
    active_color: Color,
    inactive_color: Color,
    metrics: CellMetrics,
}

impl PagingIndicator {
    pub fn new(count: usize, state: &CarouselState) -> Self {
        Self {
            count,
            active: state.active_card_index(),
            active_color: Color::Blue,
            inactive_color: Color::Gray,
            metrics: CellMetrics::default(),
        }
    }

    pub fn colors(mut self, active: Color, inactive: Color) -> Self {
        self.active_color = active;
        self.inactive_color = inactive;
        self
    }

    pub fn metrics(mut self, metrics: CellMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    fn dot_columns(&self) -> u16 {
        self.metrics.columns(Constants::INDICATOR_DOT_SIZE)
    }

    fn gap_columns(&self) -> u16 {
        self.metrics.gap_columns(Constants::INDICATOR_SPACING)
    }

    /// Columns the whole row of dots takes up.
    /// Saturates at `u16::MAX` for very long lists.
    pub fn width(&self) -> u16 {
        if self.count == 0 {
            return 0;
        }
        let n = u32::try_from(self.count).unwrap_or(u32::MAX);
        let dots = n.saturating_mul(u32::from(self.dot_columns()));
        let gaps = (n - 1).saturating_mul(u32::from(self.gap_columns()));
        u16::try_from(dots.saturating_add(gaps)).unwrap_or(u16::MAX)
    }
}

impl Widget for PagingIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || self.count == 0 {
            return;
        }
        let step = u32::from(self.dot_columns()) + u32::from(self.gap_columns());
        let start = u32::from(area.x + area.width.saturating_sub(self.width()) / 2);
        let active = self.active.min(self.count - 1);
        for index in 0..self.count {
            let offset = u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(step));
            let x = start.saturating_add(offset);
            if x >= u32::from(area.right()) {
                break;
            }
            let x = x as u16;
            let color = if index == active {
                self.active_color
            } else {
                self.inactive_color
            };
            buf.set_string(x, area.y, DOT, Style::default().fg(color));
        }
    }
}
