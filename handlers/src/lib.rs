//! # Handlers for the dbot update router
//!
//! Chain members run for every inbound text message, in this order: logging, registration
//! (first-contact BotUser), persistence (inbound and outbound BotMessage), command (reply and send).
//! Also holds the reply texts and the mini-app URL resolver used by `/start`.

mod command_handler;
mod logging_handler;
mod miniapp;
mod persistence_handler;
mod registration_handler;
mod replies;

#[cfg(test)]
mod test;

pub use command_handler::{Command, CommandHandler};
pub use logging_handler::LoggingHandler;
pub use miniapp::{CandidateUrlResolver, MiniAppCandidate, MiniAppLayout, MiniAppUrlResolver};
pub use persistence_handler::PersistenceHandler;
pub use registration_handler::RegistrationHandler;
pub use replies::{escape_html, BotReplies, DEFAULT_ECHO_TEMPLATE, MINIAPP_BUTTON_MARKER};
