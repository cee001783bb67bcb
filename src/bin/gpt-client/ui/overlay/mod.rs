mod picker;
mod popup;

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::runtime::OverlayState;

use super::theme::Theme;

pub use popup::render_popup;

pub fn render_overlay(frame: &mut Frame<'_>, area: Rect, overlay: &OverlayState, theme: &Theme) {
    match overlay {
        OverlayState::None => {}
        OverlayState::ModelPicker(state) => picker::render_picker(frame, area, state, theme),
    }
}
