use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const CARD_BG: Color = Color::Rgb(28, 30, 38);
    pub const SHADOW: Color = Color::Rgb(10, 10, 14);
    pub const BORDER_DIM: Color = Color::Rgb(70, 74, 90);
    pub const TEXT_MUTED: Color = Color::Rgb(110, 114, 130);

    pub fn card(active: bool) -> Style {
        let style = Style::default().bg(Self::CARD_BG);
        if active {
            style.fg(Color::White)
        } else {
            style.fg(Self::TEXT_MUTED)
        }
    }

    pub fn card_border(active: bool) -> Style {
        if active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Self::BORDER_DIM)
        }
    }

    pub fn card_border_type(corner_radius: f32) -> BorderType {
        if corner_radius > 0.0 {
            BorderType::Rounded
        } else {
            BorderType::Plain
        }
    }

    pub fn shadow() -> Style {
        Style::default().bg(Self::SHADOW)
    }

    pub fn placeholder() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::ITALIC)
    }
}
