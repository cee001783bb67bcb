use std::time::Instant;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use gpt_client::{LLMError, TurnRequest};

use super::events::{AppEvent, TurnEvent};

/// Runs remote calls off the event loop, one at a time.
pub struct TurnManager {
    sender: mpsc::Sender<AppEvent>,
    active: Option<CancellationToken>,
}

impl TurnManager {
    pub fn new(sender: mpsc::Sender<AppEvent>) -> Self {
        Self {
            sender,
            active: None,
        }
    }

    pub fn start(&mut self, request: TurnRequest) {
        let token = CancellationToken::new();
        self.active = Some(token.clone());
        let sender = self.sender.clone();
        tokio::spawn(run_turn(request, sender, token));
    }

    /// Asks the running task to stop. It still reports back, with
    /// [`LLMError::Cancelled`].
    pub fn cancel(&mut self) -> bool {
        match self.active.take() {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    pub fn finished(&mut self) {
        self.active = None;
    }
}

async fn run_turn(request: TurnRequest, sender: mpsc::Sender<AppEvent>, cancel: CancellationToken) {
    let started = Instant::now();
    let result = tokio::select! {
        _ = cancel.cancelled() => Err(LLMError::Cancelled),
        result = request.run() => result,
    };
    log::debug!(
        "turn on conversation {} finished in {:?} (ok: {})",
        request.index(),
        started.elapsed(),
        result.is_ok()
    );
    let _ = sender
        .send(AppEvent::Turn(TurnEvent { request, result }))
        .await;
}
