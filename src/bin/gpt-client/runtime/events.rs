use crossterm::event::KeyEvent;

use gpt_client::{LLMError, TurnRequest};

#[derive(Debug)]
pub enum InputEvent {
    Key(KeyEvent),
    Paste(String),
    Resize(u16, u16),
}

#[derive(Debug)]
pub enum AppEvent {
    Input(InputEvent),
    Tick,
    Turn(TurnEvent),
}

/// Outcome of a turn task, delivered back to the event loop.
#[derive(Debug)]
pub struct TurnEvent {
    pub request: TurnRequest,
    pub result: Result<String, LLMError>,
}
