//! Integration tests for [`storage::UserRepository`] using an in-memory SQLite database.

use storage::{BotStore, NewBotUser};

fn alice() -> NewBotUser {
    NewBotUser {
        telegram_id: 42,
        username: Some("alice".to_string()),
        first_name: Some("Alice".to_string()),
        last_name: None,
    }
}

/// **Test: First insert creates the user with is_active=true.**
///
/// **Setup:** Empty in-memory DB.
/// **Action:** `insert_if_absent(alice)`.
/// **Expected:** Returns true; lookup by telegram_id finds the row with the captured profile.
#[tokio::test]
async fn test_insert_if_absent_creates_user() {
    let store = BotStore::connect("sqlite::memory:")
        .await
        .expect("Failed to create store");

    let created = store
        .users()
        .insert_if_absent(&alice())
        .await
        .expect("Failed to insert user");
    assert!(created);

    let user = store
        .users()
        .find_by_telegram_id(42)
        .await
        .expect("Failed to query user")
        .expect("user should exist");
    assert_eq!(user.username.as_deref(), Some("alice"));
    assert_eq!(user.first_name.as_deref(), Some("Alice"));
    assert!(user.last_name.is_none());
    assert!(user.is_active);
}

/// **Test: Second insert for the same telegram_id is ignored and keeps the original profile.**
///
/// **Setup:** alice already registered.
/// **Action:** `insert_if_absent` with same id and a different username.
/// **Expected:** Returns false; count stays 1; username is still "alice".
#[tokio::test]
async fn test_insert_if_absent_keeps_existing_profile() {
    let store = BotStore::connect("sqlite::memory:")
        .await
        .expect("Failed to create store");
    store.users().insert_if_absent(&alice()).await.unwrap();

    let mut renamed = alice();
    renamed.username = Some("alice_new".to_string());
    let created = store.users().insert_if_absent(&renamed).await.unwrap();

    assert!(!created);
    assert_eq!(store.users().count().await.unwrap(), 1);
    let user = store.users().find_by_telegram_id(42).await.unwrap().unwrap();
    assert_eq!(user.username.as_deref(), Some("alice"));
}

/// **Test: Unknown telegram_id returns None.**
#[tokio::test]
async fn test_find_by_telegram_id_not_found() {
    let store = BotStore::connect("sqlite::memory:")
        .await
        .expect("Failed to create store");

    let user = store.users().find_by_telegram_id(999).await.unwrap();
    assert!(user.is_none());
}

/// **Test: list_recent is limited and newest first.**
#[tokio::test]
async fn test_list_recent_users() {
    let store = BotStore::connect("sqlite::memory:")
        .await
        .expect("Failed to create store");

    for id in 1..=3 {
        store
            .users()
            .insert_if_absent(&NewBotUser {
                telegram_id: id,
                username: Some(format!("user{}", id)),
                first_name: None,
                last_name: None,
            })
            .await
            .unwrap();
    }

    let users = store.users().list_recent(2).await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].telegram_id, 3);
    assert_eq!(users[1].telegram_id, 2);
}
