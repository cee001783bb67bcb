use gpt_client::{Conversation, ConversationController, ConversationFile, ConversationStore};

use crate::config::AppConfig;
use crate::runtime::controller::AppController;
use crate::runtime::{init_terminal, restore_terminal, run_app, AppState, TuiView, TurnManager};

use super::session::Session;

const EVENT_CHANNEL_SIZE: usize = 128;

pub async fn run_tui(
    config: AppConfig,
    session: Session,
    file: ConversationFile,
    conversations: Vec<Conversation>,
) -> anyhow::Result<()> {
    let (tx, rx) = tokio::sync::mpsc::channel(EVENT_CHANNEL_SIZE);
    let store = ConversationStore::from_conversations(conversations);
    let conversations = ConversationController::new(
        store,
        file,
        session.provider,
        session.model,
        TuiView::default(),
    );
    let state = AppState::new(config.ui, config.models);
    let controller = AppController::new(state, conversations, TurnManager::new(tx.clone()));

    let mut terminal = init_terminal()?;
    let result = run_app(controller, &mut terminal, rx, tx).await;
    restore_terminal()?;
    log::info!("session ended");
    result
}
