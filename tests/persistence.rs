use std::fs;

use gpt_client::persistence::PersistenceError;
use gpt_client::{Conversation, ConversationFile, Message, Role};
use proptest::prelude::*;
use tempfile::TempDir;

fn role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::User), Just(Role::Assistant)]
}

fn conversation() -> impl Strategy<Value = Conversation> {
    (
        1usize..50,
        prop::collection::vec((role(), "\\PC{0,30}"), 0..6),
    )
        .prop_map(|(n, extra)| {
            let mut conversation = Conversation::new_numbered(n);
            for (role, content) in extra {
                conversation.push_message(Message::new(role, content));
            }
            conversation
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn save_then_load_returns_the_same_conversations(
        conversations in prop::collection::vec(conversation(), 0..5)
    ) {
        let dir = TempDir::new().unwrap();
        let file = ConversationFile::new(dir.path().join("conversations.json"));
        file.save(&conversations).unwrap();
        prop_assert_eq!(file.load().unwrap(), conversations);
    }
}

#[test]
fn corrupt_file_is_reported_and_left_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("conversations.json");
    let garbage = b"[{\"title\": \"Conversation 1\", \"messages\": [";
    fs::write(&path, garbage).unwrap();

    let file = ConversationFile::new(&path);
    let err = file.load().unwrap_err();
    assert!(matches!(err, PersistenceError::CorruptState { .. }));
    assert_eq!(fs::read(&path).unwrap(), garbage);
}

#[test]
fn empty_file_is_corrupt() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("conversations.json");
    fs::write(&path, b"").unwrap();
    let err = ConversationFile::new(&path).load().unwrap_err();
    assert!(matches!(err, PersistenceError::CorruptState { .. }));
}

#[test]
fn unknown_role_is_corrupt() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("conversations.json");
    fs::write(
        &path,
        r#"[{"title":"Conversation 1","messages":[{"role":"tool","content":"x"}]}]"#,
    )
    .unwrap();
    let err = ConversationFile::new(&path).load().unwrap_err();
    assert!(matches!(err, PersistenceError::CorruptState { .. }));
}

#[test]
fn save_replaces_previous_contents_without_leftovers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("conversations.json");
    let file = ConversationFile::new(&path);

    file.save(&[Conversation::new_numbered(1), Conversation::new_numbered(2)])
        .unwrap();
    file.save(&[Conversation::new_numbered(1)]).unwrap();

    assert_eq!(file.load().unwrap().len(), 1);
    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("conversations.json")]);
}
