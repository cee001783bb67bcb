mod commands;
mod credentials;
mod one_shot;
mod session;
mod tui;

use anyhow::Context;
use clap::Parser;

use gpt_client::ConversationFile;

use crate::args::CliArgs;
use crate::config::load_config;
use crate::logging::init_logging;

pub async fn run() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let dotenv = dotenvy::dotenv();
    let loaded = load_config(args.config.clone())?;
    let _logger = init_logging(&loaded.config.logging, &loaded.paths)?;
    log::info!(
        "starting gpt-client {} (config {}, exists: {})",
        env!("CARGO_PKG_VERSION"),
        loaded.paths.config_file.display(),
        loaded.config_exists
    );
    match dotenv {
        Ok(path) => log::debug!("loaded environment from {}", path.display()),
        Err(err) if err.not_found() => {}
        Err(err) => log::warn!("ignoring .env: {err}"),
    }

    let file = ConversationFile::new(
        loaded
            .paths
            .conversations_file(&loaded.config.storage, args.file.as_deref()),
    );

    if args.list_models {
        commands::list_models(&loaded.config);
        return Ok(());
    }
    if args.list_conversations {
        commands::list_conversations(&file)?;
        return Ok(());
    }

    let session = session::Session::resolve(&args, &loaded.config)?;
    let conversations = file
        .load()
        .with_context(|| format!("cannot start with {}", file.path().display()))?;

    if args.has_non_interactive_prompt() {
        return one_shot::run_one_shot(&args, session, file, conversations).await;
    }
    tui::run_tui(loaded.config, session, file, conversations).await
}
