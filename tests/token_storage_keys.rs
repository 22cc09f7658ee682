use std::sync::Arc;

use chrono::{TimeZone, Utc};
use credkeep::store::MemoryStore;
use credkeep::{OAuthToken, SecretStore, TokenStore};

fn sample_token(access: &str) -> OAuthToken {
    OAuthToken {
        access_token: access.to_string(),
        refresh_token: format!("{access}-refresh"),
        expires_at: Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap(),
        refresh_expires_at: Utc.with_ymd_and_hms(2020, 3, 2, 3, 4, 5).unwrap(),
    }
}

/// Tokens for different keys live side by side under one store; deleting
/// one leaves the other intact.
#[test]
fn tokens_are_keyed_independently() {
    let store = TokenStore::new().with_store(MemoryStore::new());

    store.set("account-1", &sample_token("first")).unwrap();
    store
        .set("account-1:device-2", &sample_token("second"))
        .unwrap();

    store.delete("account-1").unwrap();

    assert_eq!(store.get("account-1").unwrap(), OAuthToken::default());
    assert_eq!(
        store.get("account-1:device-2").unwrap(),
        sample_token("second")
    );
}

/// The stored payload is the documented flat JSON object with
/// whole-second RFC 3339 timestamps.
#[test]
fn stored_payload_matches_the_wire_format() {
    let memory = Arc::new(MemoryStore::new());
    let store = TokenStore::new().with_store(memory.clone());

    store.set("account-1", &sample_token("access")).unwrap();

    let raw = memory.get("account-1").unwrap().unwrap();
    assert_eq!(
        raw,
        r#"{"access_token":"access","refresh_token":"access-refresh","expires_at":"2020-01-02T03:04:05Z","refresh_expires_at":"2020-03-02T03:04:05Z"}"#
    );
}

/// A token written by one store instance reads back from another; the
/// token store keeps no state of its own.
#[test]
fn token_store_is_stateless() {
    let memory = Arc::new(MemoryStore::new());
    let writer = TokenStore::new().with_store(memory.clone());
    let reader = TokenStore::new().with_store(memory);

    writer.set("account-1", &sample_token("access")).unwrap();

    assert_eq!(reader.get("account-1").unwrap(), sample_token("access"));
}
