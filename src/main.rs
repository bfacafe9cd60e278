//! boardsync - CLI entry point.
//!
//! Fetches recent emails and board cards, reconciles them, and prints one
//! line per discrepancy. Exits 0 when the board and inbox agree, 1 when
//! drift was found, and 2 on a fatal error (bad config, unreachable
//! service).

use anyhow::{Context, Result};

use boardsync::config::Settings;
use boardsync::providers::{BoardSource, GmailClient, MailSource, TrelloClient};
use boardsync::{reconcile, DiscrepancyReport};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    match run().await {
        Ok(report) if report.is_clean() => {
            tracing::info!("board and inbox are in sync");
        }
        Ok(report) => {
            for line in report.lines() {
                println!("{line}");
            }
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("boardsync failed: {e:#}");
            std::process::exit(2);
        }
    }
}

async fn run() -> Result<DiscrepancyReport> {
    let settings = Settings::from_env().context("loading configuration")?;

    let mail = GmailClient::new(settings.mail_access_token.clone());
    let board = TrelloClient::new(
        settings.board_api_key.clone(),
        settings.board_api_token.clone(),
    );

    let emails = mail
        .list_recent(settings.max_emails)
        .await
        .context("fetching recent emails")?;
    let cards = board
        .list_cards(&settings.board_name)
        .await
        .context("fetching board cards")?;

    tracing::info!(
        emails = emails.len(),
        cards = cards.len(),
        board = %settings.board_name,
        "reconciling inbox against board"
    );
    Ok(reconcile(&emails, &cards))
}
