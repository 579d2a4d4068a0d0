//! `dbot` binary: run the bot or inspect its store.

use anyhow::Result;
use clap::Parser;
use dbot_admin::{cli, load_config, run_bot, Cli, Commands};
use dbot_core::init_tracing;
use storage::BotStore;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            init_tracing(config.log_file())?;
            run_bot(config).await
        }
        Commands::SetToken { token } => {
            let config = load_config(None)?;
            let store = BotStore::connect(config.database_url()).await?;
            cli::set_token(&store, &token).await?;
            println!("Token saved.");
            Ok(())
        }
        Commands::Logs { page, per_page } => {
            let config = load_config(None)?;
            let store = BotStore::connect(config.database_url()).await?;
            cli::print_logs(&store, page, per_page).await
        }
        Commands::Users { limit } => {
            let config = load_config(None)?;
            let store = BotStore::connect(config.database_url()).await?;
            cli::print_users(&store, limit).await
        }
    }
}
