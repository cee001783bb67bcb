use gpt_client::ConversationFile;

use crate::config::AppConfig;

pub fn list_models(config: &AppConfig) {
    let default = config.initial_model(None);
    for model in &config.models {
        if default.as_deref() == Some(model.as_str()) {
            println!("{model} (default)");
        } else {
            println!("{model}");
        }
    }
}

pub fn list_conversations(file: &ConversationFile) -> anyhow::Result<()> {
    let conversations = file.load()?;
    if conversations.is_empty() {
        println!("No conversations in {}", file.path().display());
        return Ok(());
    }
    for (index, conversation) in conversations.iter().enumerate() {
        let turns = conversation.visible_messages().count();
        println!("{index}: {} ({turns} messages)", conversation.title);
    }
    Ok(())
}
