//! # Handler chain
//!
//! Runs the router's handlers for one message in three phases: every `before` in order (a `false`
//! vetoes the message), then `handle` until one returns `Stop` or `Reply`, then every `after` in
//! reverse with that final response. The first error aborts the remaining phases.

use dbot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler; phases visit handlers in insertion order (`after` in reverse).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// [`Handler::name`] of each handler, in insertion order.
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Returns the first `Stop`/`Reply` from the handle phase, `Stop` on a veto, else `Continue`.
    #[instrument(skip(self, message), fields(user_id = message.user.id, message_id = %message.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if let Some(vetoed_by) = self.run_before(message).await? {
            info!(handler = vetoed_by, "Message vetoed in before phase");
            return Ok(HandlerResponse::Stop);
        }

        let response = self.run_handle(message).await?;

        for handler in self.handlers.iter().rev() {
            handler.after(message, &response).await?;
        }

        debug!(response = ?response, "Handler chain finished");
        Ok(response)
    }

    /// Name of the vetoing handler, if any.
    async fn run_before(&self, message: &Message) -> Result<Option<&'static str>> {
        for handler in &self.handlers {
            if !handler.before(message).await? {
                return Ok(Some(handler.name()));
            }
        }
        Ok(None)
    }

    async fn run_handle(&self, message: &Message) -> Result<HandlerResponse> {
        for handler in &self.handlers {
            match handler.handle(message).await? {
                HandlerResponse::Continue | HandlerResponse::Ignore => continue,
                terminal => {
                    debug!(
                        handler = handler.name(),
                        response = ?terminal,
                        "Handle phase ended"
                    );
                    return Ok(terminal);
                }
            }
        }
        Ok(HandlerResponse::Continue)
    }
}
