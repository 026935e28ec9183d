use crate::app::card::Card;
use crate::app::state::AppState;
use crate::config::AppConfig;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use swifty_carousel::{CarouselState, SwiftyCarousel};

pub struct AppLayout {
    pub title_bar: Rect,
    pub carousel: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let [title_bar, carousel, status_bar] = Layout::vertical([
        Constraint::Length(1), // Title
        Constraint::Min(3),    // Carousel
        Constraint::Length(1), // Status bar
    ])
    .areas(area);

    AppLayout {
        title_bar,
        carousel,
        status_bar,
    }
}

fn carousel_widget<'a>(
    cards: &'a [Card],
    carousel: &'a CarouselState,
    config: &AppConfig,
) -> SwiftyCarousel<'a, Card> {
    SwiftyCarousel::new(cards, carousel)
        .style(config.carousel.clone())
        .metrics(config.display.metrics())
}

/// Screen rectangle of the card strip, for hit-testing pointer events.
pub fn strip_area(state: &AppState) -> Rect {
    let area = compute_layout(state.viewport).carousel;
    carousel_widget(&state.cards, &state.carousel, &state.config)
        .layout(area)
        .strip
}

pub fn render(frame: &mut Frame, state: &mut AppState) {
    let layout = compute_layout(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::styled(
            " swifty-carousel ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )])),
        layout.title_bar,
    );

    let widget = carousel_widget(&state.cards, &state.carousel, &state.config);
    frame.render_stateful_widget(widget, layout.carousel, &mut state.motion);

    render_status_bar(frame, layout.status_bar, state);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let bar = Style::default().fg(Color::White).bg(Color::DarkGray);
    let hint = if state.config.behavior.keyboard_navigation {
        " drag or ←/→ to switch | q to quit "
    } else {
        " drag to switch | q to quit "
    };
    let status = format!(" {} ", state.status_line());
    let used = status.chars().count() + hint.chars().count();
    let remaining = (area.width as usize).saturating_sub(used);
    let line = Line::from(vec![
        Span::styled(status, bar),
        Span::styled(" ".repeat(remaining), bar),
        Span::styled(hint, Style::default().fg(Color::Cyan).bg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_layout() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.title_bar, Rect::new(0, 0, 80, 1));
        assert_eq!(layout.carousel, Rect::new(0, 1, 80, 22));
        assert_eq!(layout.status_bar, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_draws_active_card_and_status() {
        let area = Rect::new(0, 0, 80, 24);
        let mut state = AppState::new(AppConfig::default(), area);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, &mut state)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = (0..24)
            .flat_map(|y| (0..80).map(move |x| (x, y)))
            .map(|(x, y)| buffer[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains("Welcome"));
        assert!(text.contains("Card 1/5"));
    }

    #[test]
    fn test_strip_area_inside_carousel_area() {
        let state = AppState::new(AppConfig::default(), Rect::new(0, 0, 80, 24));
        let strip = strip_area(&state);
        let carousel = compute_layout(state.viewport).carousel;
        assert!(carousel.contains(strip.as_position()));
        assert_eq!(strip.width, 80);
    }
}
