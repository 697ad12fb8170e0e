mod client;

use clap::Parser;
use client::QuoteClient;
use daily_core::AppConfig;

#[derive(Parser)]
#[command(name = "quote")]
#[command(about = "Print a random quote of the day", long_about = None)]
#[command(version)]
struct Cli {
    /// Quote service endpoint (or set quote_url in the config file)
    #[arg(long, env = "DAILY_QUOTE_URL")]
    url: Option<String>,

    /// Emit the quote as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
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
    let config = AppConfig::load();
    let url = cli
        .url
        .unwrap_or_else(|| config.effective_quote_url().to_string());

    let client = QuoteClient::new(url);
    match client.fetch_random() {
        Ok(quote) => {
            if cli.json {
                println!("{}", serde_json::to_string(&quote)?);
            } else {
                println!("{}", quote.text);
                println!("— {}", quote.author);
            }
            Ok(())
        }
        Err(e) => {
            // Matches the source app: log the failure and stop, leaving
            // whatever the user last saw in place. No retry here; the
            // user re-runs the command.
            tracing::error!("Fetch failed: {}", e);
            std::process::exit(1);
        }
    }
}
