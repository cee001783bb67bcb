use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::runtime::{AppStatus, Focus, InputEvent, OverlayState, PickerState};

use super::AppController;

const PAGE_LINES: u16 = 10;

pub(super) fn handle_input(controller: &mut AppController, input: InputEvent) -> bool {
    match input {
        InputEvent::Key(key) => handle_key(controller, key),
        InputEvent::Paste(text) => handle_paste(controller, &text),
        InputEvent::Resize(w, h) => {
            controller.state.terminal_size = (w, h);
            true
        }
    }
}

fn handle_key(controller: &mut AppController, key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    if is_ctrl(&key, 'c') {
        request_quit(controller);
        return true;
    }
    if controller.conversations.view().popup().is_some() {
        return handle_popup_key(controller, key);
    }
    if matches!(controller.state.overlay, OverlayState::ModelPicker(_)) {
        return handle_picker_key(controller, key);
    }
    if let Some(handled) = handle_global_key(controller, key) {
        return handled;
    }
    match controller.state.focus {
        Focus::Sidebar => handle_sidebar_key(controller, key),
        Focus::Input => handle_input_key(controller, key),
    }
}

fn request_quit(controller: &mut AppController) {
    if controller.conversations.is_busy() {
        controller.state.quit_after_turn = true;
        controller.cancel_turn();
    } else {
        controller.state.should_quit = true;
    }
}

fn handle_popup_key(controller: &mut AppController, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => {
            controller.conversations.view_mut().dismiss_popup()
        }
        _ => false,
    }
}

fn handle_picker_key(controller: &mut AppController, key: KeyEvent) -> bool {
    let OverlayState::ModelPicker(picker) = &mut controller.state.overlay else {
        return false;
    };
    match key.code {
        KeyCode::Esc => {
            controller.state.overlay = OverlayState::None;
        }
        KeyCode::Enter => {
            let chosen = picker.selected_item().map(|item| item.id.clone());
            controller.state.overlay = OverlayState::None;
            if let Some(model) = chosen {
                controller.conversations.model_selected(model.as_str());
                controller.set_status(AppStatus::Notice(format!("model: {model}")));
            }
        }
        KeyCode::Up => picker.prev(),
        KeyCode::Down | KeyCode::Tab => picker.next(),
        KeyCode::Backspace => picker.pop_query(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            picker.push_query(ch)
        }
        _ => return false,
    }
    true
}

/// Keys that work regardless of focus. `None` means not handled here.
fn handle_global_key(controller: &mut AppController, key: KeyEvent) -> Option<bool> {
    if is_ctrl(&key, 'n') {
        if let Err(err) = controller.conversations.new_conversation() {
            controller.report(&err);
        } else {
            controller.set_status(AppStatus::Idle);
        }
        controller.sync_sidebar();
        controller.state.focus = Focus::Input;
        controller.state.scroll.reset();
        return Some(true);
    }
    if is_ctrl(&key, 'p') {
        let picker = PickerState::models(&controller.state.models, controller.conversations.model());
        controller.state.overlay = OverlayState::ModelPicker(picker);
        return Some(true);
    }
    match key.code {
        KeyCode::Esc => {
            if controller.cancel_turn() {
                return Some(true);
            }
            controller.state.focus = Focus::Input;
            Some(true)
        }
        KeyCode::Tab | KeyCode::BackTab => {
            controller.state.focus = match controller.state.focus {
                Focus::Input => Focus::Sidebar,
                Focus::Sidebar => Focus::Input,
            };
            controller.sync_sidebar();
            Some(true)
        }
        KeyCode::PageUp => {
            controller.state.scroll.scroll_up(PAGE_LINES);
            Some(true)
        }
        KeyCode::PageDown => {
            controller.state.scroll.scroll_down(PAGE_LINES);
            Some(true)
        }
        _ => None,
    }
}

fn handle_sidebar_key(controller: &mut AppController, key: KeyEvent) -> bool {
    let len = controller.conversations.store().len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            controller.state.sidebar_cursor = controller.state.sidebar_cursor.saturating_sub(1);
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if controller.state.sidebar_cursor + 1 < len {
                controller.state.sidebar_cursor += 1;
            }
            true
        }
        KeyCode::Enter => {
            if len == 0 {
                return false;
            }
            let index = controller.state.sidebar_cursor;
            match controller.conversations.pick_conversation(index) {
                Ok(()) => {
                    controller.state.focus = Focus::Input;
                    controller.state.scroll.reset();
                    controller.set_status(AppStatus::Idle);
                }
                Err(err) => controller.report(&err),
            }
            true
        }
        _ => false,
    }
}

fn handle_input_key(controller: &mut AppController, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => {
            controller.submit_input();
            return true;
        }
        KeyCode::Up => {
            controller.state.scroll.scroll_up(1);
            return true;
        }
        KeyCode::Down => {
            controller.state.scroll.scroll_down(1);
            return true;
        }
        _ => {}
    }
    if controller.conversations.is_busy() {
        return false;
    }
    let input = &mut controller.state.input;
    match key.code {
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert_char(ch),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ if is_ctrl(&key, 'u') => input.clear(),
        _ => return false,
    }
    true
}

fn handle_paste(controller: &mut AppController, text: &str) -> bool {
    if controller.state.focus != Focus::Input || controller.conversations.is_busy() {
        return false;
    }
    controller.state.input.insert_str(text);
    true
}

fn is_ctrl(key: &KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}
