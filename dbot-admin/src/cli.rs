//! CLI parser and the non-running subcommands (token setting, log and user listings).

use anyhow::Result;
use clap::{Parser, Subcommand};
use storage::{BotStore, TELEGRAM_TOKEN_KEY};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "dbot")]
#[command(about = "Admin-managed Telegram bot: run, set token, inspect logs and users", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot until Ctrl-C (config from env; token overrides BOT_TOKEN and the stored setting).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Store the bot token used when `run` is given no token.
    SetToken { token: String },
    /// Operational log, newest first.
    Logs {
        #[arg(short, long, default_value = "1")]
        page: u32,
        #[arg(long, default_value = "20")]
        per_page: u32,
    },
    /// Most recent users with their latest messages.
    Users {
        #[arg(short, long, default_value = "20")]
        limit: i64,
    },
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

pub async fn set_token(store: &BotStore, token: &str) -> Result<()> {
    if token.trim().is_empty() {
        anyhow::bail!("token must not be empty");
    }
    store.settings().set(TELEGRAM_TOKEN_KEY, token.trim()).await?;
    store.event_log().info("Bot token updated").await;
    Ok(())
}

pub async fn print_logs(store: &BotStore, page: u32, per_page: u32) -> Result<()> {
    let page = store.logs().page(page, per_page).await?;
    for entry in &page.items {
        println!(
            "{}  {:<7}  {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.level,
            entry.message
        );
    }
    println!(
        "-- page {}/{} ({} entries)",
        page.page,
        page.total_pages(),
        page.total
    );
    Ok(())
}

pub async fn print_users(store: &BotStore, limit: i64) -> Result<()> {
    for user in store.users().list_recent(limit).await? {
        println!(
            "{}  @{}  {} {}  joined {}{}",
            user.telegram_id,
            user.username.as_deref().unwrap_or("-"),
            user.first_name.as_deref().unwrap_or(""),
            user.last_name.as_deref().unwrap_or(""),
            user.joined_at.format("%Y-%m-%d %H:%M"),
            if user.is_active { "" } else { "  (inactive)" }
        );
        for message in store.messages().list_for_user(user.telegram_id, 3).await? {
            let arrow = if message.is_from_user { "<-" } else { "->" };
            println!(
                "    {} {}",
                arrow,
                message.message_text.as_deref().unwrap_or("").replace('\n', " ")
            );
        }
    }
    Ok(())
}
