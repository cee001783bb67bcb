#[path = "gpt-client/app/mod.rs"]
mod app;
#[path = "gpt-client/args.rs"]
mod args;
#[path = "gpt-client/config/mod.rs"]
mod config;
#[path = "gpt-client/input/mod.rs"]
mod input;
#[path = "gpt-client/logging.rs"]
mod logging;
#[path = "gpt-client/runtime/mod.rs"]
mod runtime;
#[path = "gpt-client/ui/mod.rs"]
mod ui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
