//! Update router: classifies one inbound update and runs text messages through the handler chain.

use std::sync::Arc;

use dbot_core::{Transport, Update, UpdatePayload};
use handler_chain::HandlerChain;
use handlers::{
    BotReplies, CommandHandler, LoggingHandler, MiniAppUrlResolver, PersistenceHandler,
    RegistrationHandler,
};
use storage::{BotStore, EventLog};
use tracing::{debug, instrument};

/// Routes updates; never fails. Errors for one update are written to the operational log and the
/// next update is unaffected.
#[derive(Clone)]
pub struct UpdateRouter {
    chain: HandlerChain,
    events: EventLog,
}

impl UpdateRouter {
    pub fn new(chain: HandlerChain, events: EventLog) -> Self {
        Self { chain, events }
    }

    /// Assembles the standard chain: logging, registration, persistence, command.
    pub fn build(
        store: &BotStore,
        transport: Arc<dyn Transport>,
        replies: BotReplies,
        resolver: Arc<dyn MiniAppUrlResolver>,
    ) -> Self {
        let events = store.event_log();
        let chain = HandlerChain::new()
            .add_handler(Arc::new(LoggingHandler))
            .add_handler(Arc::new(RegistrationHandler::new(
                store.users().clone(),
                events.clone(),
            )))
            .add_handler(Arc::new(PersistenceHandler::new(store.messages().clone())))
            .add_handler(Arc::new(CommandHandler::new(transport, replies, resolver)));
        debug!(handlers = ?chain.handler_names(), "Update router built");
        Self::new(chain, events)
    }

    #[instrument(skip(self, update), fields(update_id = update.id))]
    pub async fn route(&self, update: &Update) {
        match &update.payload {
            UpdatePayload::NonText => {
                debug!("Non-text update dropped");
            }
            UpdatePayload::Malformed(reason) => {
                self.events
                    .warning(format!("Dropped malformed update {}: {}", update.id, reason))
                    .await;
            }
            UpdatePayload::Message(message) => {
                if let Err(e) = self.chain.handle(message).await {
                    self.events
                        .error(format!("Error handling update: {}", e))
                        .await;
                }
            }
        }
    }
}
