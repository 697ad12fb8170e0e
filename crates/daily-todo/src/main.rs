mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::TaskStore;
use daily_core::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("DAILY_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "todo", &mut std::io::stdout());
        return Ok(());
    }

    let config = AppConfig::load();
    let file_path = cli
        .file
        .or_else(|| {
            config
                .effective_data_file()
                .map(|p| p.to_string_lossy().into_owned())
        })
        .ok_or_else(|| {
            anyhow::anyhow!("a data file is required: pass FILE or set DAILY_TODO_FILE")
        })?;

    let mut ctx = match TaskStore::load(&file_path).await {
        Ok(ctx) => ctx,
        Err(e) => output::output_error(&format!("Failed to load {}: {}", file_path, e)),
    };

    if let Err(e) = handlers::task::handle(&mut ctx, cli.command).await {
        output::output_error(&e.to_string());
    }

    Ok(())
}
