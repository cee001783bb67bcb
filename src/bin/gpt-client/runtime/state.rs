use crate::config::UiConfig;
use crate::input::InputBuffer;

use super::overlay::OverlayState;
use super::scroll::ScrollState;
use super::status::{AppStatus, StatusMetrics};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Focus {
    Input,
    Sidebar,
}

/// Terminal-side state that the conversation controller does not own.
pub struct AppState {
    pub ui: UiConfig,
    pub models: Vec<String>,
    pub input: InputBuffer,
    pub status: AppStatus,
    pub status_metrics: StatusMetrics,
    pub overlay: OverlayState,
    pub scroll: ScrollState,
    pub focus: Focus,
    pub sidebar_cursor: usize,
    pub terminal_size: (u16, u16),
    pub tick: u64,
    pub quit_after_turn: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(ui: UiConfig, models: Vec<String>) -> Self {
        Self {
            ui,
            models,
            input: InputBuffer::default(),
            status: AppStatus::Idle,
            status_metrics: StatusMetrics::default(),
            overlay: OverlayState::None,
            scroll: ScrollState::default(),
            focus: Focus::Input,
            sidebar_cursor: 0,
            terminal_size: (0, 0),
            tick: 0,
            quit_after_turn: false,
            should_quit: false,
        }
    }
}
