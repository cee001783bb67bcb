use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::super::theme::Theme;

/// Modal error notice. Dismissed with Esc or Enter.
pub fn render_popup(frame: &mut Frame<'_>, area: Rect, message: &str, theme: &Theme) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.error)
        .title(Span::styled(" Error ", theme.status_error));
    let mut lines: Vec<Line<'static>> = message
        .lines()
        .map(|line| Line::from(Span::styled(line.to_string(), theme.error)))
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Press Enter or Esc to dismiss",
        theme.muted,
    )));
    let text = Text::from(lines);
    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
