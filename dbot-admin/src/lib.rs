//! # dbot-admin
//!
//! The managed bot application: configuration, the update router, the long-poll loop and its
//! start/stop controller, demo seeding, and the `dbot` CLI. Telegram access comes from
//! dbot-telegram, persistence from storage, reply logic from handlers.

pub mod cli;
pub mod components;
pub mod config;
pub mod cursor;
pub mod lifecycle;
pub mod polling;
pub mod router;
pub mod runner;
pub mod seed;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_bot_components, telegram_transport_factory, BotComponents};
pub use config::{BaseConfig, BotConfig, MiniAppConfig, PollingConfig};
pub use cursor::PollCursor;
pub use lifecycle::{
    BotController, BotState, BotStatus, LifecycleState, StartOutcome, StopOutcome,
    TransportFactory,
};
pub use polling::PollingLoop;
pub use router::UpdateRouter;
pub use runner::run_bot;
pub use seed::seed_demo_data;
