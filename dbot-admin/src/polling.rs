//! Long-poll loop: fetch → route each update → advance cursor → sleep, until asked to stop.

use std::sync::Arc;
use std::time::Duration;

use dbot_core::{Transport, Update};
use storage::{BotStore, EventLog};
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use crate::config::PollingConfig;
use crate::cursor::PollCursor;
use crate::lifecycle::{BotState, LifecycleState};
use crate::router::UpdateRouter;
use crate::seed::seed_demo_data;

/// One run of the polling loop. Created in `Starting`; moves the shared state to `Polling` once
/// startup is done and back to `Stopped` when it exits.
///
/// The stop signal is checked between iterations and during sleeps. An in-flight fetch is never
/// interrupted, so reacting to stop can take up to one long-poll timeout.
pub struct PollingLoop {
    transport: Arc<dyn Transport>,
    router: UpdateRouter,
    events: EventLog,
    config: PollingConfig,
    state: Arc<LifecycleState>,
    stop: watch::Receiver<bool>,
    seed_store: Option<BotStore>,
    cursor: PollCursor,
}

impl PollingLoop {
    pub fn new(
        transport: Arc<dyn Transport>,
        router: UpdateRouter,
        events: EventLog,
        config: PollingConfig,
        state: Arc<LifecycleState>,
        stop: watch::Receiver<bool>,
    ) -> Self {
        Self {
            transport,
            router,
            events,
            config,
            state,
            stop,
            seed_store: None,
            cursor: PollCursor::new(),
        }
    }

    /// Seed demo rows into `store` at startup if it has no users yet.
    pub fn with_demo_seed(mut self, store: BotStore) -> Self {
        self.seed_store = Some(store);
        self
    }

    /// Runs until stopped and returns the final cursor.
    #[instrument(skip(self))]
    pub async fn run(mut self) -> PollCursor {
        self.confirm_identity().await;

        if let Some(store) = &self.seed_store {
            if let Err(e) = seed_demo_data(store, &self.events).await {
                self.events
                    .error(format!("Failed to add demo data: {}", e))
                    .await;
            }
        }

        if self.state.transition(BotState::Starting, BotState::Polling) {
            info!("step: polling loop entered Polling");
            while !self.stop_requested() {
                let pause = self.poll_once().await;
                if !self.sleep_or_stop(pause).await {
                    break;
                }
            }
        } else {
            debug!(state = %self.state.get(), "Stop requested during startup");
        }

        self.state.set(BotState::Stopped);
        info!(offset = ?self.cursor.offset(), "step: polling loop exited");
        self.cursor
    }

    /// One fetch/route/advance step. Returns how long to pause before the next one.
    pub async fn poll_once(&mut self) -> Duration {
        match self
            .transport
            .fetch_updates(self.cursor.offset(), self.config.timeout)
            .await
        {
            Ok(updates) => {
                self.process_batch(&updates).await;
                self.config.interval
            }
            Err(e) => {
                self.events
                    .error(format!("Error getting updates: {}", e))
                    .await;
                self.config.error_backoff
            }
        }
    }

    pub fn cursor(&self) -> PollCursor {
        self.cursor
    }

    async fn process_batch(&mut self, updates: &[Update]) {
        if updates.is_empty() {
            return;
        }
        debug!(count = updates.len(), offset = ?self.cursor.offset(), "Routing batch");
        for update in updates {
            if self.cursor.is_seen(update.id) {
                warn!(update_id = update.id, "Update below cursor skipped");
                continue;
            }
            self.router.route(update).await;
        }
        self.cursor.advance(updates.iter().map(|u| u.id));
    }

    async fn confirm_identity(&self) {
        match self.transport.get_me().await {
            Ok(me) => {
                let handle = me.username.unwrap_or_else(|| me.id.to_string());
                self.events
                    .info(format!("Connected to bot: @{}", handle))
                    .await;
            }
            Err(e) => {
                self.events
                    .warning(format!(
                        "Could not connect to Telegram API, polling in unconfirmed mode: {}",
                        e
                    ))
                    .await;
            }
        }
    }

    fn stop_requested(&self) -> bool {
        *self.stop.borrow()
    }

    /// Sleeps for `pause` unless stop is signalled first. Returns false when the loop should exit.
    async fn sleep_or_stop(&mut self, pause: Duration) -> bool {
        if self.stop_requested() {
            return false;
        }
        tokio::select! {
            _ = tokio::time::sleep(pause) => {}
            changed = self.stop.changed() => {
                if changed.is_err() {
                    return false;
                }
            }
        }
        !self.stop_requested()
    }
}
