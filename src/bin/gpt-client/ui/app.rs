use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Text;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::runtime::{AppState, AppStatus, Focus, TuiView};

use super::input::{render_input, InputProps};
use super::overlay::{render_overlay, render_popup};
use super::sidebar::{render_sidebar, SidebarProps};
use super::status::{build_status_line, render_status};
use super::theme::Theme;
use super::transcript::{render_transcript, TranscriptProps};

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 10;
const INPUT_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;
const MIN_TRANSCRIPT_WIDTH: u16 = 30;
const OVERLAY_WIDTH_PCT: u16 = 60;
const OVERLAY_HEIGHT_PCT: u16 = 60;
const POPUP_WIDTH_PCT: u16 = 60;
const POPUP_HEIGHT_PCT: u16 = 30;

pub fn render_app(
    frame: &mut Frame<'_>,
    state: &AppState,
    view: &TuiView,
    active: Option<usize>,
    model: &str,
) {
    let theme = Theme::from_name(&state.ui.theme);
    let size = frame.area();
    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        render_too_small(frame, size, &theme);
        return;
    }

    let (sidebar, main) = split_columns(size, state.ui.sidebar_width);
    render_sidebar(
        frame,
        SidebarProps {
            area: sidebar,
            titles: view.titles(),
            active,
            cursor: state.sidebar_cursor,
            focused: state.focus == Focus::Sidebar,
            theme: &theme,
        },
    );

    let rows = split_rows(main);
    let title = active
        .and_then(|index| view.titles().get(index))
        .map(String::as_str)
        .unwrap_or("No conversation");
    render_transcript(
        frame,
        TranscriptProps {
            area: rows.transcript,
            messages: view.transcript(),
            title,
            theme: &theme,
            scroll: state.scroll,
            show_system: state.ui.show_system,
            waiting: matches!(state.status, AppStatus::Waiting),
        },
    );
    render_status(
        frame,
        rows.status,
        build_status_line(state, model, &theme),
        &theme,
    );
    let busy = matches!(state.status, AppStatus::Waiting);
    render_input(
        frame,
        InputProps {
            area: rows.input,
            buffer: &state.input,
            theme: &theme,
            placeholder: if busy { "Waiting for reply..." } else { "Type a message..." },
            focused: state.focus == Focus::Input,
            disabled: busy,
        },
    );

    render_overlay(
        frame,
        centered_rect(OVERLAY_WIDTH_PCT, OVERLAY_HEIGHT_PCT, size),
        &state.overlay,
        &theme,
    );
    if let Some(message) = view.popup() {
        render_popup(
            frame,
            centered_rect(POPUP_WIDTH_PCT, POPUP_HEIGHT_PCT, size),
            message,
            &theme,
        );
    }
}

struct MainAreas {
    transcript: Rect,
    status: Rect,
    input: Rect,
}

fn split_columns(area: Rect, sidebar_width: u16) -> (Rect, Rect) {
    let width = sidebar_width.min(area.width.saturating_sub(MIN_TRANSCRIPT_WIDTH));
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(width), Constraint::Min(MIN_TRANSCRIPT_WIDTH)])
        .split(area);
    (cols[0], cols[1])
}

fn split_rows(area: Rect) -> MainAreas {
    let main_h = area.height.saturating_sub(INPUT_HEIGHT + STATUS_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(main_h),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
        ])
        .split(area);
    MainAreas {
        transcript: rows[0],
        status: rows[1],
        input: rows[2],
    }
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let message = format!(
        "Terminal too small (min {}x{}). Resize to continue.",
        MIN_WIDTH, MIN_HEIGHT
    );
    let paragraph = Paragraph::new(Text::from(message))
        .block(Block::default().borders(Borders::ALL).title("gpt-client"))
        .style(theme.error);
    frame.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const FULL_PERCENT: u16 = 100;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((FULL_PERCENT - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((FULL_PERCENT - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((FULL_PERCENT - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((FULL_PERCENT - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
