use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::runtime::{AppState, AppStatus};

use super::theme::{indicators, Theme};

const HINTS_MIN_WIDTH: u16 = 100;
const HINTS: &str = "Enter send · Ctrl-N new · Tab list · Ctrl-P model · Esc cancel · Ctrl-C quit";

pub struct StatusLine {
    pub left: Vec<Span<'static>>,
    pub right: Vec<Span<'static>>,
}

pub fn render_status(frame: &mut Frame<'_>, area: Rect, line: StatusLine, theme: &Theme) {
    let left_width = spans_width(&line.left);
    let right_width = spans_width(&line.right);
    let filler_width = area.width.saturating_sub(left_width + right_width);
    let filler = Span::styled(" ".repeat(filler_width as usize), theme.status);
    let mut spans = Vec::with_capacity(line.left.len() + line.right.len() + 1);
    spans.extend(line.left);
    spans.push(filler);
    spans.extend(line.right);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn spans_width(spans: &[Span<'static>]) -> u16 {
    spans.iter().map(|span| span.content.width() as u16).sum()
}

pub fn build_status_line(state: &AppState, model: &str, theme: &Theme) -> StatusLine {
    let left = vec![
        Span::styled("model ", theme.muted),
        Span::styled(model.to_string(), theme.accent),
    ];
    let mut right = build_status_spans(state, theme);
    if state.terminal_size.0 >= HINTS_MIN_WIDTH && matches!(state.status, AppStatus::Idle) {
        right = vec![Span::styled(HINTS.to_string(), theme.muted)];
    }
    StatusLine { left, right }
}

fn build_status_spans(state: &AppState, theme: &Theme) -> Vec<Span<'static>> {
    match &state.status {
        AppStatus::Idle => vec![
            Span::styled(format!("{} ", indicators::BULLET), theme.status),
            Span::styled("idle".to_string(), theme.status),
        ],
        AppStatus::Waiting => waiting_spans(state, theme),
        AppStatus::Notice(text) => vec![Span::styled(text.clone(), theme.status)],
        AppStatus::Error(err) => vec![
            Span::styled(format!("{} ", indicators::CROSS), theme.status_error),
            Span::styled(format!("error: {err}"), theme.error),
        ],
    }
}

fn waiting_spans(state: &AppState, theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = vec![
        Span::styled(format!("{} ", spinner_frame(state.tick)), theme.status_indicator),
        Span::styled("Waiting for reply".to_string(), theme.status),
    ];
    if let Some(ms) = state.status_metrics.elapsed_ms() {
        spans.push(Span::styled(format!(" · {}", format_elapsed(ms)), theme.status));
    }
    spans
}

fn format_elapsed(ms: u128) -> String {
    let secs = ms as f32 / 1000.0;
    format!("{secs:.1}s")
}

fn spinner_frame(frame: u64) -> &'static str {
    const FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];
    let idx = ((frame / 4) % FRAMES.len() as u64) as usize;
    FRAMES[idx]
}
