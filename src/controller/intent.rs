/// Outbound user intents a view may raise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    NewConversation,
    PickConversation(usize),
    SubmitMessage(String),
    ModelSelected(String),
}
