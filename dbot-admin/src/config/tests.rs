//! Config tests. Env-mutating, so every test is serialized.

use crate::config::BotConfig;
use serial_test::serial;
use std::env;
use std::time::Duration;

const VARS: &[&str] = &[
    "BOT_TOKEN",
    "TELEGRAM_TOKEN",
    "TELEGRAM_API_URL",
    "TELOXIDE_API_URL",
    "DATABASE_URL",
    "LOG_FILE",
    "POLL_INTERVAL_MS",
    "POLL_ERROR_BACKOFF_MS",
    "POLL_TIMEOUT_SECS",
    "STOP_JOIN_TIMEOUT_MS",
    "MINIAPP_PRIMARY_URL",
    "MINIAPP_FALLBACK_HOST",
    "REPLIT_DOMAINS",
    "ECHO_TEMPLATE",
    "SEED_DEMO_DATA",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    clear_env();

    let config = BotConfig::load(None).unwrap();

    assert!(config.bot_token().is_none());
    assert!(config.telegram_api_url().is_none());
    assert_eq!(config.database_url(), "sqlite:./bot.db");
    assert_eq!(config.log_file(), "logs/dbot.log");
    assert_eq!(config.polling.interval, Duration::from_millis(2000));
    assert_eq!(config.polling.error_backoff, Duration::from_millis(5000));
    assert_eq!(config.polling.timeout, Duration::from_secs(30));
    assert_eq!(config.polling.stop_join_timeout, Duration::from_millis(2000));
    assert_eq!(config.echo_template, "شما گفتید: {text}");
    assert!(!config.seed_demo_data);
    assert!(config.miniapp.primary_url.is_none());
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    clear_env();
    env::set_var("TELEGRAM_TOKEN", "env_token");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("POLL_INTERVAL_MS", "100");
    env::set_var("POLL_ERROR_BACKOFF_MS", "300");
    env::set_var("POLL_TIMEOUT_SECS", "5");
    env::set_var("REPLIT_DOMAINS", "a.replit.dev,b.replit.dev");
    env::set_var("ECHO_TEMPLATE", "You said: {text}");
    env::set_var("SEED_DEMO_DATA", "true");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), Some("env_token"));
    assert_eq!(config.database_url(), "sqlite::memory:");
    assert_eq!(config.polling.interval, Duration::from_millis(100));
    assert_eq!(config.polling.error_backoff, Duration::from_millis(300));
    assert_eq!(config.polling.timeout, Duration::from_secs(5));
    assert_eq!(
        config.miniapp.fallback_host.as_deref(),
        Some("a.replit.dev,b.replit.dev")
    );
    assert_eq!(config.echo_template, "You said: {text}");
    assert!(config.seed_demo_data);
    assert!(config.validate().is_ok());
    clear_env();
}

#[test]
#[serial]
fn test_token_argument_overrides_env() {
    clear_env();
    env::set_var("BOT_TOKEN", "env_token");

    let config = BotConfig::load(Some("cli_token".to_string())).unwrap();

    assert_eq!(config.bot_token(), Some("cli_token"));
    clear_env();
}

#[test]
#[serial]
fn test_echo_template_without_placeholder_falls_back() {
    clear_env();
    env::set_var("ECHO_TEMPLATE", "no placeholder");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.echo_template, "شما گفتید: {text}");
    clear_env();
}

#[test]
#[serial]
fn test_validate_rejects_backoff_not_above_interval() {
    clear_env();
    env::set_var("POLL_INTERVAL_MS", "5000");
    env::set_var("POLL_ERROR_BACKOFF_MS", "5000");

    let config = BotConfig::load(None).unwrap();

    assert!(config.validate().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_validate_rejects_invalid_urls() {
    clear_env();
    env::set_var("TELEGRAM_API_URL", "not a url");
    assert!(BotConfig::load(None).unwrap().validate().is_err());

    clear_env();
    env::set_var("MINIAPP_PRIMARY_URL", "https://");
    assert!(BotConfig::load(None).unwrap().validate().is_err());
    clear_env();
}
