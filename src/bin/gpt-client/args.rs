use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    name = "gpt-client",
    about = "Chat with OpenAI-compatible models from the terminal, keeping every conversation on disk",
    version
)]
pub struct CliArgs {
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
    /// Conversations file to read and write
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,
    #[arg(long, short = 'm')]
    pub model: Option<String>,
    #[arg(long)]
    pub api_key: Option<String>,
    #[arg(long)]
    pub base_url: Option<String>,
    /// Send one message without opening the TUI and print the reply
    #[arg(long, short = 'p')]
    pub prompt: Option<String>,
    /// Conversation index used by --prompt (0-based)
    #[arg(long, conflicts_with = "new")]
    pub conversation: Option<usize>,
    /// Start a fresh conversation for --prompt
    #[arg(long)]
    pub new: bool,
    #[arg(long)]
    pub list_conversations: bool,
    #[arg(long)]
    pub list_models: bool,
}

impl CliArgs {
    pub fn has_non_interactive_prompt(&self) -> bool {
        self.prompt.is_some()
    }
}
