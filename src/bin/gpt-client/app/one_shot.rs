use std::io::{self, IsTerminal, Read, Write};

use gpt_client::{
    ClientError, Conversation, ConversationController, ConversationFile, ConversationStore,
    Message, View,
};

use crate::args::CliArgs;

use super::session::Session;

/// View for non-interactive runs. Errors come back as `Err` values, so
/// nothing is drawn.
struct QuietView;

impl View for QuietView {
    fn render_conversation_list(&mut self, _titles: &[String]) {}
    fn render_transcript(&mut self, _messages: &[Message]) {}
    fn clear_transcript(&mut self) {}
    fn notify_error(&mut self, description: &str) {
        log::debug!("one-shot error: {description}");
    }
}

pub async fn run_one_shot(
    args: &CliArgs,
    session: Session,
    file: ConversationFile,
    conversations: Vec<Conversation>,
) -> anyhow::Result<()> {
    let prompt = resolve_prompt(args)?;
    let store = ConversationStore::from_conversations(conversations);
    let mut controller =
        ConversationController::new(store, file, session.provider, session.model, QuietView);
    select_target(&mut controller, args)?;

    match controller.submit_message(&prompt).await {
        Ok(Some(reply)) => {
            let mut stdout = io::stdout();
            writeln!(stdout, "{}", reply.content)?;
            stdout.flush()?;
            Ok(())
        }
        Ok(None) => Err(anyhow::anyhow!("prompt is empty")),
        Err(ClientError::Provider(err)) => Err(anyhow::anyhow!("Error: {err}")),
        Err(err) => Err(err.into()),
    }
}

/// `--new`, then `--conversation`, then the last conversation, creating one
/// when the file holds none.
fn select_target(
    controller: &mut ConversationController<QuietView>,
    args: &CliArgs,
) -> Result<(), ClientError> {
    if args.new {
        controller.new_conversation()?;
        return Ok(());
    }
    if let Some(index) = args.conversation {
        return controller.pick_conversation(index);
    }
    match controller.store().len() {
        0 => controller.new_conversation().map(|_| ()),
        len => controller.pick_conversation(len - 1),
    }
}

/// `--prompt -` reads the message from stdin.
fn resolve_prompt(args: &CliArgs) -> anyhow::Result<String> {
    match args.prompt.as_deref() {
        Some("-") => read_stdin(),
        Some(prompt) => Ok(prompt.to_string()),
        None => Err(anyhow::anyhow!("no prompt provided; use --prompt")),
    }
}

fn read_stdin() -> anyhow::Result<String> {
    if io::stdin().is_terminal() {
        return Err(anyhow::anyhow!("--prompt - expects input on stdin"));
    }
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input)
}
