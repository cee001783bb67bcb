use crate::runtime::{AppStatus, TurnEvent};

use super::AppController;

pub(super) fn handle_turn(controller: &mut AppController, event: TurnEvent) -> bool {
    controller.turns.finished();
    let TurnEvent { request, result } = event;
    match controller.conversations.finish_turn(&request, result) {
        Ok(_) => controller.set_status(AppStatus::Idle),
        Err(err) => controller.report(&err),
    }
    controller.state.scroll.reset();
    if controller.state.quit_after_turn {
        controller.state.should_quit = true;
    }
    true
}

impl AppController {
    /// Starts a turn with the input line's text.
    pub fn submit_input(&mut self) {
        if self.conversations.is_busy() {
            self.report(&gpt_client::ClientError::Busy);
            return;
        }
        let text = self.state.input.take_text();
        match self.conversations.begin_turn(&text) {
            Ok(Some(request)) => {
                self.sync_sidebar();
                self.state.scroll.reset();
                self.set_status(AppStatus::Waiting);
                self.turns.start(request);
            }
            Ok(None) => {}
            Err(err) => self.report(&err),
        }
    }

    pub fn cancel_turn(&mut self) -> bool {
        if self.turns.cancel() {
            log::info!("turn cancelled by user");
            self.set_status(AppStatus::Notice("cancelling...".into()));
            true
        } else {
            false
        }
    }
}
