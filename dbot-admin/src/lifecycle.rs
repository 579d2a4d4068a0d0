//! Bot lifecycle: the shared state cell and the controller behind start / stop / status.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use dbot_core::{mask_token, DbotError, Result, Transport};
use storage::TELEGRAM_TOKEN_KEY;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

use crate::components::BotComponents;
use crate::cursor::PollCursor;
use crate::polling::PollingLoop;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BotState {
    Stopped = 0,
    Starting = 1,
    Polling = 2,
    Stopping = 3,
}

impl BotState {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => BotState::Starting,
            2 => BotState::Polling,
            3 => BotState::Stopping,
            _ => BotState::Stopped,
        }
    }

    /// Starting or Polling.
    pub fn is_running(self) -> bool {
        matches!(self, BotState::Starting | BotState::Polling)
    }
}

impl fmt::Display for BotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BotState::Stopped => "stopped",
            BotState::Starting => "starting",
            BotState::Polling => "polling",
            BotState::Stopping => "stopping",
        };
        f.write_str(name)
    }
}

/// Process-wide lifecycle state, shared between the controller and the running loop.
#[derive(Debug)]
pub struct LifecycleState(AtomicU8);

impl Default for LifecycleState {
    fn default() -> Self {
        Self(AtomicU8::new(BotState::Stopped as u8))
    }
}

impl LifecycleState {
    pub fn get(&self) -> BotState {
        BotState::from_u8(self.0.load(Ordering::SeqCst))
    }

    /// Moves `from` → `to` only if the current state is `from`.
    pub fn transition(&self, from: BotState, to: BotState) -> bool {
        self.0
            .compare_exchange(from as u8, to as u8, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    pub(crate) fn set(&self, to: BotState) {
        self.0.store(to as u8, Ordering::SeqCst);
    }
}

/// Snapshot for status queries. `running` is true for Starting and Polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotStatus {
    pub running: bool,
    pub state: BotState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    /// A loop is live (or still winding down); nothing was spawned.
    AlreadyRunning,
}

impl StartOutcome {
    pub fn is_started(self) -> bool {
        matches!(self, StartOutcome::Started)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    /// The loop exited within the join timeout.
    Stopped,
    /// Stop was signalled but the loop had not exited when the join timed out. The state stays
    /// `Stopping` until it does.
    StopRequested,
    NotRunning,
}

impl StopOutcome {
    /// True for `Stopped` and `StopRequested`; the join is best effort.
    pub fn is_stopped(self) -> bool {
        matches!(self, StopOutcome::Stopped | StopOutcome::StopRequested)
    }
}

/// Builds a transport bound to a token.
pub type TransportFactory = Arc<dyn Fn(&str) -> Result<Arc<dyn Transport>> + Send + Sync>;

struct RunningLoop {
    stop: watch::Sender<bool>,
    handle: JoinHandle<PollCursor>,
}

/// Owns the single polling loop of the process.
pub struct BotController {
    components: BotComponents,
    factory: TransportFactory,
    state: Arc<LifecycleState>,
    running: Mutex<Option<RunningLoop>>,
}

impl BotController {
    pub fn new(components: BotComponents, factory: TransportFactory) -> Self {
        Self {
            components,
            factory,
            state: Arc::new(LifecycleState::default()),
            running: Mutex::new(None),
        }
    }

    /// Spawns the polling loop unless one is live. Without an explicit token the stored
    /// `telegram_token` setting is used. Returns once the loop is spawned, not once it polls.
    #[instrument(skip(self, token))]
    pub async fn start(&self, token: Option<String>) -> Result<StartOutcome> {
        let mut running = self.running.lock().await;
        if !self.state.transition(BotState::Stopped, BotState::Starting) {
            info!(state = %self.state.get(), "Bot is already running");
            return Ok(StartOutcome::AlreadyRunning);
        }

        match self.spawn_loop(token).await {
            Ok(spawned) => {
                *running = Some(spawned);
                self.components
                    .events()
                    .info("Bot started successfully")
                    .await;
                Ok(StartOutcome::Started)
            }
            Err(e) => {
                self.state.set(BotState::Stopped);
                self.components
                    .events()
                    .error(format!("Failed to start bot: {}", e))
                    .await;
                Err(e)
            }
        }
    }

    /// Signals the loop to stop and waits up to the join timeout for it to exit.
    #[instrument(skip(self))]
    pub async fn stop(&self) -> StopOutcome {
        let mut running = self.running.lock().await;
        let Some(RunningLoop { stop, mut handle }) = running.take() else {
            info!("Bot is not running");
            return StopOutcome::NotRunning;
        };

        if !self.state.transition(BotState::Polling, BotState::Stopping) {
            self.state.transition(BotState::Starting, BotState::Stopping);
        }
        if stop.send(true).is_err() {
            debug!("Polling loop already gone");
        }

        let events = self.components.events();
        match tokio::time::timeout(self.components.polling.stop_join_timeout, &mut handle).await {
            Ok(Ok(cursor)) => {
                debug!(offset = ?cursor.offset(), "Polling loop joined");
                events.info("Bot stopped").await;
                StopOutcome::Stopped
            }
            Ok(Err(e)) => {
                error!(error = %e, "Polling loop task failed");
                self.state.set(BotState::Stopped);
                events.error(format!("Error stopping bot: {}", e)).await;
                StopOutcome::Stopped
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.components.polling.stop_join_timeout.as_millis() as u64,
                    "Polling loop did not exit in time"
                );
                events
                    .warning("Stop requested; polling loop will exit after its current fetch")
                    .await;
                StopOutcome::StopRequested
            }
        }
    }

    /// Non-blocking snapshot of the lifecycle state.
    pub fn status(&self) -> BotStatus {
        let state = self.state.get();
        BotStatus {
            running: state.is_running(),
            state,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status().running
    }

    async fn resolve_token(&self, token: Option<String>) -> Result<String> {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            return Ok(token);
        }
        let stored = self
            .components
            .store
            .settings()
            .get(TELEGRAM_TOKEN_KEY)
            .await
            .map_err(|e| DbotError::Database(e.to_string()))?;
        stored.filter(|t| !t.trim().is_empty()).ok_or_else(|| {
            DbotError::Config(format!(
                "no bot token given and no '{}' setting stored",
                TELEGRAM_TOKEN_KEY
            ))
        })
    }

    async fn spawn_loop(&self, token: Option<String>) -> Result<RunningLoop> {
        let token = self.resolve_token(token).await?;
        let transport = (self.factory)(&token)?;
        let events = self.components.events();
        events
            .info(format!("Starting bot with token: {}", mask_token(&token)))
            .await;

        let (stop_tx, stop_rx) = watch::channel(false);
        let mut polling = PollingLoop::new(
            transport.clone(),
            self.components.router(transport),
            events,
            self.components.polling.clone(),
            self.state.clone(),
            stop_rx,
        );
        if self.components.seed_demo_data {
            polling = polling.with_demo_seed(self.components.store.clone());
        }

        Ok(RunningLoop {
            stop: stop_tx,
            handle: tokio::spawn(polling.run()),
        })
    }
}
