//! Integration tests for [`handler_chain::HandlerChain`].
//!
//! Covers: phase ordering across handlers, a before() veto, Reply ending the handle phase and being
//! visible to after(), Ignore falling through, and an error aborting the remaining handlers.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use dbot_core::{
    Chat, DbotError, Handler, HandlerResponse, Message, MessageDirection, Result, User,
};
use handler_chain::HandlerChain;

fn text_message(content: &str) -> Message {
    Message {
        id: "10".to_string(),
        content: content.to_string(),
        user: User {
            id: 42,
            username: Some("alice".to_string()),
            first_name: Some("Alice".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 5,
            chat_type: "private".to_string(),
        },
        direction: MessageDirection::Incoming,
        created_at: Utc::now(),
    }
}

type Journal = Arc<Mutex<Vec<String>>>;

/// Records every phase it passes through; `handle` returns the configured response.
struct Recorder {
    name: &'static str,
    journal: Journal,
    allow: bool,
    response: HandlerResponse,
}

impl Recorder {
    fn new(name: &'static str, journal: &Journal) -> Self {
        Self {
            name,
            journal: journal.clone(),
            allow: true,
            response: HandlerResponse::Continue,
        }
    }

    fn responding(mut self, response: HandlerResponse) -> Self {
        self.response = response;
        self
    }

    fn vetoing(mut self) -> Self {
        self.allow = false;
        self
    }

    fn push(&self, entry: String) {
        self.journal.lock().unwrap().push(entry);
    }
}

#[async_trait]
impl Handler for Recorder {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn before(&self, _message: &Message) -> Result<bool> {
        self.push(format!("before_{}", self.name));
        Ok(self.allow)
    }

    async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
        self.push(format!("handle_{}", self.name));
        Ok(self.response.clone())
    }

    async fn after(&self, _message: &Message, response: &HandlerResponse) -> Result<()> {
        let tag = match response {
            HandlerResponse::Reply(text) => format!("reply:{}", text),
            other => format!("{:?}", other),
        };
        self.push(format!("after_{}_{}", self.name, tag));
        Ok(())
    }
}

struct Failing;

#[async_trait]
impl Handler for Failing {
    async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
        Err(DbotError::Database("disk full".to_string()))
    }
}

fn entries(journal: &Journal) -> Vec<String> {
    journal.lock().unwrap().clone()
}

/// **Test: Reply ends the handle phase; after() runs in reverse and sees the reply text.**
#[tokio::test]
async fn test_reply_stops_handle_phase_and_reaches_after() {
    let journal: Journal = Arc::default();
    let chain = HandlerChain::new()
        .add_handler(Arc::new(Recorder::new("persist", &journal)))
        .add_handler(Arc::new(
            Recorder::new("command", &journal).responding(HandlerResponse::Reply("pong".into())),
        ))
        .add_handler(Arc::new(Recorder::new("unreached", &journal)));

    let result = chain.handle(&text_message("ping")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply("pong".to_string()));
    assert_eq!(
        entries(&journal),
        vec![
            "before_persist",
            "before_command",
            "before_unreached",
            "handle_persist",
            "handle_command",
            "after_unreached_reply:pong",
            "after_command_reply:pong",
            "after_persist_reply:pong",
        ]
    );
}

/// **Test: A before() veto returns Stop without running any handle() or after().**
#[tokio::test]
async fn test_before_veto_stops_chain() {
    let journal: Journal = Arc::default();
    let chain = HandlerChain::new()
        .add_handler(Arc::new(Recorder::new("gate", &journal).vetoing()))
        .add_handler(Arc::new(Recorder::new("command", &journal)));

    let result = chain.handle(&text_message("hi")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(entries(&journal), vec!["before_gate"]);
}

/// **Test: Ignore and Continue fall through; with no Stop/Reply the final response is Continue.**
#[tokio::test]
async fn test_ignore_falls_through_to_continue() {
    let journal: Journal = Arc::default();
    let chain = HandlerChain::new()
        .add_handler(Arc::new(
            Recorder::new("first", &journal).responding(HandlerResponse::Ignore),
        ))
        .add_handler(Arc::new(Recorder::new("second", &journal)));

    let result = chain.handle(&text_message("hi")).await.unwrap();

    assert_eq!(result, HandlerResponse::Continue);
    let journal = entries(&journal);
    assert!(journal.contains(&"handle_second".to_string()));
    assert_eq!(journal.last().unwrap(), "after_first_Continue");
}

/// **Test: An error in handle() aborts the chain; later handlers and after() do not run.**
#[tokio::test]
async fn test_error_aborts_chain() {
    let journal: Journal = Arc::default();
    let chain = HandlerChain::new()
        .add_handler(Arc::new(Recorder::new("persist", &journal)))
        .add_handler(Arc::new(Failing))
        .add_handler(Arc::new(Recorder::new("unreached", &journal)));

    let result = chain.handle(&text_message("hi")).await;

    assert!(matches!(result, Err(DbotError::Database(_))));
    let journal = entries(&journal);
    assert!(!journal.contains(&"handle_unreached".to_string()));
    assert!(journal.iter().all(|e| !e.starts_with("after_")));
}

/// **Test: An empty chain continues.**
#[tokio::test]
async fn test_empty_chain_continues() {
    let chain = HandlerChain::new();
    assert!(chain.is_empty());
    let result = chain.handle(&text_message("hi")).await.unwrap();
    assert_eq!(result, HandlerResponse::Continue);
}

/// **Test: Handlers are named by their own type (or override) in chain order, not as the trait
/// object.**
#[test]
fn test_handler_names() {
    let journal: Journal = Arc::default();
    let chain = HandlerChain::new()
        .add_handler(Arc::new(Recorder::new("gate", &journal)))
        .add_handler(Arc::new(Failing));

    let names = chain.handler_names();

    assert_eq!(names.len(), 2);
    assert_eq!(names[0], "gate");
    assert!(names[1].ends_with("::Failing"), "got {}", names[1]);
    assert!(!names[1].contains("dyn"));
}
