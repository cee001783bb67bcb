use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use textwrap::{Options, WordSplitter};
use unicode_width::UnicodeWidthStr;

use gpt_client::{Message, Role};

use crate::runtime::ScrollState;

use super::theme::Theme;

const ERROR_PREFIX: &str = "Error: ";

pub struct TranscriptProps<'a> {
    pub area: Rect,
    pub messages: &'a [Message],
    pub title: &'a str,
    pub theme: &'a Theme,
    pub scroll: ScrollState,
    pub show_system: bool,
    pub waiting: bool,
}

pub fn render_transcript(frame: &mut Frame<'_>, props: TranscriptProps<'_>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(props.theme.border)
        .title(format!(" {} ", props.title));
    let inner = block.inner(props.area);
    frame.render_widget(block, props.area);

    let mut lines = transcript_lines(
        props.messages,
        props.show_system,
        inner.width as usize,
        props.theme,
    );
    if props.waiting {
        lines.push(Line::from(Span::styled("GPT: ...", props.theme.muted)));
    }
    let top = scroll_top(lines.len(), inner.height, props.scroll.offset());
    frame.render_widget(Paragraph::new(Text::from(lines)).scroll((top, 0)), inner);
}

fn prefix(role: Role) -> &'static str {
    match role {
        Role::System => "System: ",
        Role::User => "You: ",
        Role::Assistant => "GPT: ",
    }
}

fn role_style(role: Role, theme: &Theme) -> Style {
    match role {
        Role::System => theme.system,
        Role::User => theme.user,
        Role::Assistant => theme.assistant,
    }
}

pub(super) fn transcript_lines(
    messages: &[Message],
    show_system: bool,
    width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for message in messages {
        if message.role == Role::System && !show_system {
            continue;
        }
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        let label = prefix(message.role);
        let body_style = if message.role == Role::Assistant && message.content.starts_with(ERROR_PREFIX)
        {
            theme.error
        } else if message.role == Role::System {
            theme.system
        } else {
            Style::default()
        };
        // Body lines hang under the label so it never wraps on its own.
        let indent = label.width();
        let (body_width, hang) = if width > indent {
            (width - indent, " ".repeat(indent))
        } else {
            (width, String::new())
        };
        for (row, text) in wrap_text(&message.content, body_width).into_iter().enumerate() {
            let lead = if row == 0 {
                Span::styled(label.to_string(), role_style(message.role, theme))
            } else {
                Span::raw(hang.clone())
            };
            lines.push(Line::from(vec![lead, Span::styled(text, body_style)]));
        }
    }
    lines
}

/// First visible row so that `offset` rows from the bottom are hidden.
fn scroll_top(total: usize, height: u16, offset: u16) -> u16 {
    let total = total.min(u16::MAX as usize) as u16;
    let max_offset = total.saturating_sub(height);
    total
        .saturating_sub(height)
        .saturating_sub(offset.min(max_offset))
}

/// Word wrap by display width; words wider than a line are split.
pub(super) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let options = Options::new(width.max(1)).word_splitter(WordSplitter::NoHyphenation);
    textwrap::wrap(text, &options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn wraps_on_words() {
        assert_eq!(wrap_text("hello world", 5), vec!["hello", "world"]);
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn splits_long_words() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn keeps_explicit_newlines() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn label_stays_with_long_unbroken_words() {
        let messages = vec![Message::assistant("https://example.com/very/long/url")];
        let theme = Theme::warm();
        let lines = transcript_lines(&messages, false, 12, &theme);

        let first = &lines[0];
        assert_eq!(first.spans[0].content, "GPT: ");
        assert_eq!(first.spans[0].style, theme.assistant);
        assert!(!first.spans[1].content.is_empty());

        let rendered = plain(&lines);
        assert!(rendered.iter().all(|line| line.width() <= 12));
        assert!(rendered[1..].iter().all(|line| line.starts_with("     ")));
        let joined: String = rendered.iter().map(|line| line.trim_start()).collect();
        assert_eq!(joined, "GPT: https://example.com/very/long/url");
    }

    #[test]
    fn continuation_lines_are_indented_under_the_label() {
        let messages = vec![Message::user("one two three four")];
        let rendered = plain(&transcript_lines(&messages, false, 14, &Theme::mono()));
        assert_eq!(rendered, vec!["You: one two", "     three", "     four"]);
    }

    #[test]
    fn system_message_hidden_unless_asked() {
        let messages = vec![
            Message::system("You are a helpful assistant."),
            Message::user("hi"),
            Message::assistant("hello"),
        ];
        let theme = Theme::mono();
        let hidden = plain(&transcript_lines(&messages, false, 80, &theme));
        assert_eq!(hidden, vec!["You: hi", "", "GPT: hello"]);
        let shown = transcript_lines(&messages, true, 80, &theme);
        assert_eq!(shown.len(), 5);
    }

    #[test]
    fn scroll_is_clamped() {
        assert_eq!(scroll_top(50, 10, 0), 40);
        assert_eq!(scroll_top(50, 10, 15), 25);
        assert_eq!(scroll_top(50, 10, 500), 0);
        assert_eq!(scroll_top(3, 10, 2), 0);
    }
}
