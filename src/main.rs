//! Contact assistant - Main entry point
//!
//! Interactive assistant bot that keeps contacts, phone numbers and birthdays
//! in memory for the lifetime of the process.

use anyhow::Result;
use contact_assistant::{Assistant, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only, stdout is the conversation)
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut assistant = Assistant::from_config(&config);
    info!(
        today = %assistant.today(),
        window_days = config.birthday_window_days,
        "Starting contact assistant"
    );

    contact_assistant::session::run_stdio(&mut assistant).await?;

    info!(
        contacts = assistant.directory().len(),
        "Contact assistant shutdown complete"
    );
    Ok(())
}
