use super::error::StoreError;
use super::message::{Message, Role};
use super::state::Conversation;

/// Ordered, append-only collection of conversations plus the current selection.
#[derive(Debug, Default, Clone)]
pub struct ConversationStore {
    conversations: Vec<Conversation>,
    selected: Option<usize>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps loaded conversations. Nothing is selected until asked.
    pub fn from_conversations(conversations: Vec<Conversation>) -> Self {
        Self {
            conversations,
            selected: None,
        }
    }

    pub fn create_conversation(&mut self) -> usize {
        let index = self.conversations.len();
        self.conversations
            .push(Conversation::new_numbered(index + 1));
        self.selected = Some(index);
        log::debug!("created conversation {index}");
        index
    }

    pub fn select(&mut self, index: usize) -> Result<&Conversation, StoreError> {
        self.check(index)?;
        self.selected = Some(index);
        Ok(&self.conversations[index])
    }

    pub fn append_message(
        &mut self,
        index: usize,
        role: Role,
        content: impl Into<String>,
    ) -> Result<(), StoreError> {
        self.check(index)?;
        self.conversations[index].push_message(Message::new(role, content));
        Ok(())
    }

    pub fn snapshot(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Conversation> {
        self.selected.and_then(|index| self.conversations.get(index))
    }

    pub fn get(&self, index: usize) -> Result<&Conversation, StoreError> {
        self.check(index)?;
        Ok(&self.conversations[index])
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    pub fn titles(&self) -> Vec<String> {
        self.conversations
            .iter()
            .map(|conversation| conversation.title.clone())
            .collect()
    }

    fn check(&self, index: usize) -> Result<(), StoreError> {
        if index < self.conversations.len() {
            Ok(())
        } else {
            Err(StoreError::OutOfRange {
                index,
                len: self.conversations.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::SYSTEM_PROMPT;

    #[test]
    fn create_selects_newest() {
        let mut store = ConversationStore::new();
        for expected in 0..4 {
            assert_eq!(store.create_conversation(), expected);
            assert_eq!(store.selected_index(), Some(expected));
        }
        assert_eq!(store.len(), 4);
        assert_eq!(
            store.titles(),
            vec![
                "Conversation 1",
                "Conversation 2",
                "Conversation 3",
                "Conversation 4"
            ]
        );
    }

    #[test]
    fn numbering_continues_after_load() {
        let loaded = vec![
            Conversation::new_numbered(1),
            Conversation::new_numbered(2),
        ];
        let mut store = ConversationStore::from_conversations(loaded);
        assert_eq!(store.selected_index(), None);
        let index = store.create_conversation();
        assert_eq!(index, 2);
        assert_eq!(store.get(index).unwrap().title, "Conversation 3");
    }

    #[test]
    fn select_out_of_range_keeps_selection() {
        let mut store = ConversationStore::new();
        store.create_conversation();
        let err = store.select(5).unwrap_err();
        assert_eq!(err, StoreError::OutOfRange { index: 5, len: 1 });
        assert_eq!(store.selected_index(), Some(0));
    }

    #[test]
    fn select_on_empty_store_fails() {
        let mut store = ConversationStore::new();
        assert!(matches!(
            store.select(0),
            Err(StoreError::OutOfRange { index: 0, len: 0 })
        ));
        assert_eq!(store.selected_index(), None);
    }

    #[test]
    fn append_goes_last_and_leaves_others_alone() {
        let mut store = ConversationStore::new();
        store.create_conversation();
        store.create_conversation();
        store.append_message(0, Role::User, "hi").unwrap();

        let first = &store.snapshot()[0];
        assert_eq!(first.messages.len(), 2);
        assert_eq!(first.messages[0], Message::system(SYSTEM_PROMPT));
        assert_eq!(first.last(), Some(&Message::user("hi")));
        assert_eq!(store.snapshot()[1].messages.len(), 1);
    }

    #[test]
    fn append_out_of_range_fails() {
        let mut store = ConversationStore::new();
        let err = store
            .append_message(0, Role::User, "lost")
            .unwrap_err();
        assert_eq!(err, StoreError::OutOfRange { index: 0, len: 0 });
    }
}
