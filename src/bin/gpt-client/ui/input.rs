use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::input::InputBuffer;

use super::theme::{indicators, Theme};

const INPUT_BORDER_OFFSET: u16 = 1;
const PROMPT_WIDTH: u16 = 2;
const INPUT_PADDING: u16 = 2;

pub struct InputProps<'a> {
    pub area: Rect,
    pub buffer: &'a InputBuffer,
    pub theme: &'a Theme,
    pub placeholder: &'a str,
    pub focused: bool,
    pub disabled: bool,
}

pub fn render_input(frame: &mut Frame<'_>, props: InputProps<'_>) {
    let inner_width = props.area.width.saturating_sub(INPUT_PADDING + PROMPT_WIDTH);
    let (visible, column) = props.buffer.visible(inner_width);
    let prompt_style = if props.focused && !props.disabled {
        props.theme.prompt
    } else {
        props.theme.muted
    };
    let content = if props.buffer.is_empty() {
        Span::styled(props.placeholder.to_string(), props.theme.muted)
    } else if props.disabled {
        Span::styled(visible.to_string(), props.theme.muted)
    } else {
        Span::raw(visible.to_string())
    };
    let line = Line::from(vec![
        Span::styled(format!("{} ", indicators::PROMPT), prompt_style),
        content,
    ]);
    let border_style = if props.focused {
        props.theme.border_focused
    } else {
        props.theme.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(line).block(block), props.area);

    if props.focused && !props.disabled {
        frame.set_cursor_position(Position::new(
            props.area.x + INPUT_BORDER_OFFSET + PROMPT_WIDTH + column,
            props.area.y + INPUT_BORDER_OFFSET,
        ));
    }
}
