mod input;
mod status;
mod turn;

use gpt_client::ConversationController;

use crate::runtime::{AppEvent, AppState, TuiView, TurnManager};

pub struct AppController {
    pub state: AppState,
    pub conversations: ConversationController<TuiView>,
    pub turns: TurnManager,
}

impl AppController {
    pub fn new(
        state: AppState,
        conversations: ConversationController<TuiView>,
        turns: TurnManager,
    ) -> Self {
        let mut controller = Self {
            state,
            conversations,
            turns,
        };
        controller.conversations.refresh();
        controller.sync_sidebar();
        controller
    }

    /// Returns true when the screen needs a redraw.
    pub async fn handle_event(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::Input(input) => input::handle_input(self, input),
            AppEvent::Turn(event) => turn::handle_turn(self, event),
            AppEvent::Tick => self.handle_tick(),
        }
    }

    fn handle_tick(&mut self) -> bool {
        self.state.tick = self.state.tick.wrapping_add(1);
        self.state.status.is_busy() && (self.state.tick % 4 == 0 || self.state.status_metrics.should_redraw())
    }

    /// Moves the sidebar cursor onto the selected conversation.
    pub fn sync_sidebar(&mut self) {
        if let Some(index) = self.conversations.store().selected_index() {
            self.state.sidebar_cursor = index;
        } else {
            let len = self.conversations.store().len();
            self.state.sidebar_cursor = self.state.sidebar_cursor.min(len.saturating_sub(1));
        }
    }
}
