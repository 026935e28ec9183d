//! The composed carousel: strip on top, paging dots underneath.

use crate::carousel::constants::Constants;
use crate::carousel::state::CarouselState;
use crate::ui::card::CardContent;
use crate::ui::metrics::CellMetrics;
use crate::ui::motion::CarouselMotion;
use crate::ui::paging_indicator::PagingIndicator;
use crate::ui::strip::Carousel;
use crate::ui::style::CarouselStyle;
use ratatui::layout::Flex;
use ratatui::prelude::*;

/// Where each part of a [`SwiftyCarousel`] lands inside its area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselLayout {
    pub strip: Rect,
    pub indicator: Option<Rect>,
}

/// Public entry point. Build one per frame from the host's items, style
/// and [`CarouselState`]; pass a long-lived [`CarouselMotion`] as the
/// widget state.
///
/// ```no_run
/// # use ratatui::{prelude::*, widgets::Paragraph};
/// # use swifty_carousel::{CarouselMotion, CarouselState, SwiftyCarousel};
/// # fn draw(frame: &mut Frame, state: &CarouselState, motion: &mut CarouselMotion) {
/// let items = vec![Paragraph::new("one"), Paragraph::new("two")];
/// frame.render_stateful_widget(SwiftyCarousel::new(&items, state), frame.area(), motion);
/// # }
/// ```
pub struct SwiftyCarousel<'a, C: CardContent> {
    items: &'a [C],
    state: &'a CarouselState,
    style: CarouselStyle,
    metrics: CellMetrics,
}

impl<'a, C: CardContent> SwiftyCarousel<'a, C> {
    pub fn new(items: &'a [C], state: &'a CarouselState) -> Self {
        Self {
            items,
            state,
            style: CarouselStyle::default(),
            metrics: CellMetrics::default(),
        }
    }

    pub fn style(mut self, style: CarouselStyle) -> Self {
        self.style = style;
        self
    }

    pub fn metrics(mut self, metrics: CellMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    fn strip(&self, area: Rect) -> Carousel<'a, C> {
        let dimensions = self.style.resolve(self.metrics.width_px(area.width));
        Carousel::new(self.items, self.state, dimensions, self.metrics)
    }

    /// Split `area` the same way `render` will. Hosts use this to hit-test
    /// pointer events against the strip.
    pub fn layout(&self, area: Rect) -> CarouselLayout {
        let padding = self.metrics.gap_rows(Constants::PADDING);
        let inner = area.inner(Margin::new(0, padding));
        let strip_height = if self.items.is_empty() {
            1
        } else {
            self.strip(area).height()
        };
        let show_indicator = self.style.show_paging_indicator && !self.items.is_empty();
        if !show_indicator {
            let [strip] = Layout::vertical([Constraint::Length(strip_height)])
                .flex(Flex::Start)
                .areas(inner);
            return CarouselLayout {
                strip,
                indicator: None,
            };
        }
        let gap = self.metrics.gap_rows(Constants::STACK_SPACING);
        let [strip, _, indicator] = Layout::vertical([
            Constraint::Length(strip_height),
            Constraint::Length(gap),
            Constraint::Length(1),
        ])
        .flex(Flex::Start)
        .areas(inner);
        CarouselLayout {
            strip,
            indicator: Some(indicator),
        }
    }
}

impl<C: CardContent> StatefulWidget for SwiftyCarousel<'_, C> {
    type State = CarouselMotion;

    fn render(self, area: Rect, buf: &mut Buffer, motion: &mut CarouselMotion) {
        let layout = self.layout(area);
        self.strip(area).render(layout.strip, buf, motion);
        if let Some(indicator) = layout.indicator {
            PagingIndicator::new(self.items.len(), self.state)
                .colors(
                    self.style.paging_indicator_active_color,
                    self.style.paging_indicator_inactive_color,
                )
                .metrics(self.metrics)
                .render(indicator, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    fn style() -> CarouselStyle {
        CarouselStyle {
            card_width: Some(160.0),
            card_height: Some(64.0),
            inactive_card_width: Some(32.0),
            ..CarouselStyle::default()
        }
    }

    fn items() -> Vec<Paragraph<'static>> {
        ["A", "B", "C"].into_iter().map(Paragraph::new).collect()
    }

    #[test]
    fn test_layout_stacks_strip_gap_and_indicator() {
        let items = items();
        let state = CarouselState::default();
        let widget = SwiftyCarousel::new(&items, &state).style(style());
        let layout = widget.layout(Rect::new(0, 0, 40, 12));
        assert_eq!(layout.strip, Rect::new(0, 1, 40, 4));
        assert_eq!(layout.indicator, Some(Rect::new(0, 6, 40, 1)));
    }

    #[test]
    fn test_indicator_can_be_hidden() {
        let items = items();
        let state = CarouselState::default();
        let widget = SwiftyCarousel::new(&items, &state).style(CarouselStyle {
            show_paging_indicator: false,
            ..style()
        });
        assert_eq!(widget.layout(Rect::new(0, 0, 40, 12)).indicator, None);
    }

    #[test]
    fn test_renders_cards_and_dots() {
        let items = items();
        let state = CarouselState::new(2, 0.0);
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        SwiftyCarousel::new(&items, &state)
            .style(CarouselStyle {
                paging_indicator_active_color: Color::Yellow,
                ..style()
            })
            .render(area, &mut buf, &mut CarouselMotion::new(false));

        assert_eq!(buf[(7, 2)].symbol(), "C");
        let dots: Vec<Color> = (0..40)
            .filter(|&x| buf[(x, 6)].symbol() == "●")
            .map(|x| buf[(x, 6)].fg)
            .collect();
        assert_eq!(dots, vec![Color::Gray, Color::Gray, Color::Yellow]);
    }

    #[test]
    fn test_empty_items_have_no_indicator() {
        let items: Vec<Paragraph<'static>> = Vec::new();
        let state = CarouselState::default();
        let widget = SwiftyCarousel::new(&items, &state);
        assert_eq!(widget.layout(Rect::new(0, 0, 40, 12)).indicator, None);
    }
}
