//! Shared test helpers: a scripted transport double, update builders, fast loop timings.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use dbot_admin::{BotComponents, BotController, BotState, PollingConfig, TransportFactory};
use dbot_core::{
    BotIdentity, Chat, DbotError, Message, MessageDirection, OutgoingMessage, Result, Transport,
    Update, UpdatePayload, User,
};
use storage::BotStore;

/// One scripted reply to `fetch_updates`.
pub enum Step {
    Batch(Vec<Update>),
    Fail(&'static str),
}

/// Transport double: replays scripted fetch results (empty batches once exhausted), records
/// offsets and sent messages.
pub struct ScriptedTransport {
    steps: Mutex<VecDeque<Step>>,
    pub offsets: Mutex<Vec<Option<i64>>>,
    pub sent: Mutex<Vec<OutgoingMessage>>,
    identity: Option<BotIdentity>,
    fail_sends: bool,
    fetch_delay: Duration,
}

impl ScriptedTransport {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps: Mutex::new(steps.into()),
            offsets: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
            identity: Some(BotIdentity {
                id: 1,
                username: Some("test_bot".to_string()),
            }),
            fail_sends: false,
            fetch_delay: Duration::ZERO,
        }
    }

    pub fn idle() -> Self {
        Self::new(Vec::new())
    }

    pub fn without_identity(mut self) -> Self {
        self.identity = None;
        self
    }

    pub fn failing_sends(mut self) -> Self {
        self.fail_sends = true;
        self
    }

    /// Every fetch takes at least `delay`, like a long poll with no traffic.
    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    pub fn offsets(&self) -> Vec<Option<i64>> {
        self.offsets.lock().unwrap().clone()
    }

    pub fn sent(&self) -> Vec<OutgoingMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send_message(&self, message: &OutgoingMessage) -> Result<()> {
        self.sent.lock().unwrap().push(message.clone());
        if self.fail_sends {
            return Err(DbotError::Transport("send failed".to_string()));
        }
        Ok(())
    }

    async fn fetch_updates(&self, offset: Option<i64>, _timeout: Duration) -> Result<Vec<Update>> {
        self.offsets.lock().unwrap().push(offset);
        if !self.fetch_delay.is_zero() {
            tokio::time::sleep(self.fetch_delay).await;
        }
        let step = self.steps.lock().unwrap().pop_front();
        match step {
            Some(Step::Batch(updates)) => Ok(updates),
            Some(Step::Fail(reason)) => Err(DbotError::Transport(reason.to_string())),
            None => Ok(Vec::new()),
        }
    }

    async fn get_me(&self) -> Result<BotIdentity> {
        self.identity
            .clone()
            .ok_or_else(|| DbotError::Transport("Unauthorized".to_string()))
    }
}

/// Text update from user `user_id` (username `user<id>`, first name `User`) in chat `chat_id`.
pub fn text_update(id: i64, user_id: i64, chat_id: i64, text: &str) -> Update {
    Update::message(
        id,
        Message {
            id: format!("m{}", id),
            user: User {
                id: user_id,
                username: Some(format!("user{}", user_id)),
                first_name: Some("User".to_string()),
                last_name: None,
            },
            chat: Chat {
                id: chat_id,
                chat_type: "private".to_string(),
            },
            content: text.to_string(),
            direction: MessageDirection::Incoming,
            created_at: Utc::now(),
        },
    )
}

pub fn non_text_update(id: i64) -> Update {
    Update {
        id,
        payload: UpdatePayload::NonText,
    }
}

pub fn malformed_update(id: i64) -> Update {
    Update {
        id,
        payload: UpdatePayload::Malformed("message has no sender".to_string()),
    }
}

/// Millisecond-scale timings; backoff stays above the interval.
pub fn fast_polling() -> PollingConfig {
    PollingConfig {
        interval: Duration::from_millis(10),
        error_backoff: Duration::from_millis(30),
        timeout: Duration::from_secs(1),
        stop_join_timeout: Duration::from_millis(1000),
    }
}

pub async fn memory_store() -> BotStore {
    BotStore::connect("sqlite::memory:")
        .await
        .expect("in-memory store")
}

/// Factory handing out the same transport for every start and counting calls.
pub fn shared_factory(
    transport: Arc<ScriptedTransport>,
    calls: Arc<AtomicUsize>,
    tokens: Arc<Mutex<Vec<String>>>,
) -> TransportFactory {
    Arc::new(move |token: &str| {
        calls.fetch_add(1, Ordering::SeqCst);
        tokens.lock().unwrap().push(token.to_string());
        let transport: Arc<dyn Transport> = transport.clone();
        Ok(transport)
    })
}

pub fn controller_with(
    components: BotComponents,
    transport: Arc<ScriptedTransport>,
) -> (BotController, Arc<AtomicUsize>, Arc<Mutex<Vec<String>>>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let tokens = Arc::new(Mutex::new(Vec::new()));
    let factory = shared_factory(transport, calls.clone(), tokens.clone());
    (BotController::new(components, factory), calls, tokens)
}

/// Waits up to two seconds for the controller to reach `state`.
pub async fn wait_for_state(controller: &BotController, state: BotState) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while controller.status().state != state {
        assert!(
            tokio::time::Instant::now() < deadline,
            "timed out waiting for {:?}, still {:?}",
            state,
            controller.status().state
        );
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}
