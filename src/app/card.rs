//! The demo's card content: a title line over wrapped body text.

use crate::config::model::CardConfig;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub body: String,
}

impl From<&CardConfig> for Card {
    fn from(config: &CardConfig) -> Self {
        Self {
            title: config.title.clone(),
            body: config.body.clone(),
        }
    }
}

impl Widget for &Card {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let title = truncate_to_width(&self.title, area.width as usize);
        let mut lines = vec![
            Line::from(Span::styled(title, Style::default().add_modifier(Modifier::BOLD)))
                .alignment(Alignment::Center),
        ];
        if area.height > 2 {
            lines.push(Line::default());
            lines.push(Line::from(self.body.as_str()));
        }
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

/// Cut `text` to at most `max` display columns, ending in `…` when cut.
fn truncate_to_width(text: &str, max: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    if max > 0 {
        out.push('…');
    }
    out
}
