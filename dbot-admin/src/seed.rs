//! Demo rows for an empty store, so a fresh dashboard has something to show.

use storage::{BotStore, EventLog, NewBotMessage, NewBotUser, StorageError};
use tracing::debug;

const DEMO_USERS: [(i64, &str, &str, &str); 2] = [
    (123456789, "demo_user1", "Demo", "User1"),
    (987654321, "demo_user2", "Demo", "User2"),
];

const DEMO_WELCOME: &str = "Hello Demo User1! 👋\n\nWelcome to HosseinX-bot3. I'm here to assist you.\n\nUse /help to see available commands.";

/// Inserts two demo users and four demo messages when no BotUser exists. Returns whether rows were
/// added.
pub async fn seed_demo_data(store: &BotStore, events: &EventLog) -> Result<bool, StorageError> {
    if store.users().count().await? > 0 {
        debug!("Store not empty, demo seeding skipped");
        return Ok(false);
    }

    for (telegram_id, username, first_name, last_name) in DEMO_USERS {
        store
            .users()
            .insert_if_absent(&NewBotUser {
                telegram_id,
                username: Some(username.to_string()),
                first_name: Some(first_name.to_string()),
                last_name: Some(last_name.to_string()),
            })
            .await?;
    }

    let messages = [
        NewBotMessage::inbound(DEMO_USERS[0].0, "/start"),
        NewBotMessage::outbound(DEMO_USERS[0].0, DEMO_WELCOME),
        NewBotMessage::inbound(DEMO_USERS[1].0, "Hello bot!"),
        NewBotMessage::outbound(DEMO_USERS[1].0, "You said: Hello bot!"),
    ];
    for message in &messages {
        store.messages().append(message).await?;
    }

    events.info("Added demo users and messages").await;
    Ok(true)
}
