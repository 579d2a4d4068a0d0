//! Operational event log: every entry goes to tracing and is appended to `bot_logs`.
//!
//! Writing the row is best effort: a storage failure is traced and swallowed so that logging never
//! changes the outcome of the operation being logged.

use tracing::{error, info, warn};

use crate::log_repo::LogRepository;
use crate::models::LogLevel;

#[derive(Clone)]
pub struct EventLog {
    repo: LogRepository,
}

impl EventLog {
    pub fn new(repo: LogRepository) -> Self {
        Self { repo }
    }

    pub async fn info(&self, message: impl AsRef<str>) {
        self.record(LogLevel::Info, message.as_ref()).await;
    }

    pub async fn warning(&self, message: impl AsRef<str>) {
        self.record(LogLevel::Warning, message.as_ref()).await;
    }

    pub async fn error(&self, message: impl AsRef<str>) {
        self.record(LogLevel::Error, message.as_ref()).await;
    }

    pub async fn record(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => info!(target: "dbot::events", "{}", message),
            LogLevel::Warning => warn!(target: "dbot::events", "{}", message),
            LogLevel::Error => error!(target: "dbot::events", "{}", message),
        }

        if let Err(e) = self.repo.append(level, message).await {
            error!(error = %e, level = %level, "Failed to persist operational log entry");
        }
    }
}
