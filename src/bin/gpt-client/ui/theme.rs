use ratatui::style::{Color, Modifier, Style};

/// Unicode indicators for status and UI elements
pub mod indicators {
    pub const PROMPT: &str = "❯";
    pub const BULLET: &str = "●";
    pub const CROSS: &str = "✗";
    pub const ACTIVE: &str = "▸";
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub user: Style,
    pub assistant: Style,
    pub system: Style,
    pub error: Style,
    pub status: Style,
    pub status_error: Style,
    pub status_indicator: Style,
    pub accent: Style,
    pub muted: Style,
    pub border: Style,
    pub border_focused: Style,
    pub prompt: Style,
    pub selected: Style,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "mono" => Self::mono(),
            _ => Self::warm(),
        }
    }

    pub fn warm() -> Self {
        let orange = Color::Rgb(217, 119, 87);
        let sand = Color::Rgb(200, 190, 175);
        Self {
            user: Style::default().fg(orange).add_modifier(Modifier::BOLD),
            assistant: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            system: Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            error: Style::default().fg(Color::Red),
            status: Style::default().fg(sand),
            status_error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            status_indicator: Style::default().fg(orange),
            accent: Style::default().fg(orange),
            muted: Style::default().fg(Color::DarkGray),
            border: Style::default().fg(Color::DarkGray),
            border_focused: Style::default().fg(orange),
            prompt: Style::default().fg(orange).add_modifier(Modifier::BOLD),
            selected: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    pub fn mono() -> Self {
        let plain = Style::default();
        let bold = Style::default().add_modifier(Modifier::BOLD);
        Self {
            user: bold,
            assistant: bold,
            system: Style::default().add_modifier(Modifier::DIM),
            error: bold,
            status: plain,
            status_error: bold,
            status_indicator: bold,
            accent: bold,
            muted: Style::default().add_modifier(Modifier::DIM),
            border: plain,
            border_focused: bold,
            prompt: bold,
            selected: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}
