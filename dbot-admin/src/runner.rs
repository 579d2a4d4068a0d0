//! Runs the bot in the foreground: start, wait for Ctrl-C, stop.

use anyhow::Result;
use tracing::{info, warn};

use crate::components::{build_bot_components, telegram_transport_factory};
use crate::config::BotConfig;
use crate::lifecycle::{BotController, StopOutcome};

pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    let components = build_bot_components(&config).await?;
    let factory = telegram_transport_factory(config.telegram_api_url(), config.polling.timeout)?;
    let controller = BotController::new(components, factory);

    let token = config.bot_token().map(str::to_string);
    let outcome = controller.start(token).await?;
    info!(outcome = ?outcome, status = ?controller.status(), "Bot start requested");

    tokio::signal::ctrl_c().await?;
    info!("Ctrl-C received, stopping bot");

    match controller.stop().await {
        StopOutcome::StopRequested => {
            warn!("Polling loop still finishing its last fetch at exit")
        }
        outcome => info!(outcome = ?outcome, "Bot shut down"),
    }
    Ok(())
}
