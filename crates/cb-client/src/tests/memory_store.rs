use crate::{MemoryTokenStore, StorageKey, TokenStore};

use cb_core::Identity;

fn identity() -> Identity {
    Identity {
        id: String::from("u-1"),
        name: String::from("Ada"),
        email: Some(String::from("ada@example.test")),
        role: String::from("admin"),
    }
}

#[test]
fn given_tokens_when_set_tokens_then_both_readable() {
    let store = MemoryTokenStore::new();

    store.set_tokens("access-1", Some("refresh-1")).unwrap();

    assert_eq!(store.access_token().as_deref(), Some("access-1"));
    assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));
}

#[test]
fn given_no_new_refresh_token_when_set_tokens_then_old_refresh_token_kept() {
    let store = MemoryTokenStore::new();
    store.set_tokens("access-1", Some("refresh-1")).unwrap();

    store.set_tokens("access-2", None).unwrap();

    assert_eq!(store.access_token().as_deref(), Some("access-2"));
    assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));
}

#[test]
fn given_full_session_when_clear_then_everything_gone() {
    let store = MemoryTokenStore::new();
    store.set_tokens("access-1", Some("refresh-1")).unwrap();
    store.cache_user(&identity()).unwrap();

    store.clear().unwrap();

    for key in StorageKey::ALL {
        assert!(store.get(key).is_none(), "{key} survived clear");
    }
}

#[test]
fn given_cached_user_when_read_back_then_same_identity() {
    let store = MemoryTokenStore::new();

    store.cache_user(&identity()).unwrap();

    assert_eq!(store.cached_user(), Some(identity()));
}

#[test]
fn given_garbage_user_blob_when_cached_user_then_absent() {
    let store = MemoryTokenStore::new();
    store.put(StorageKey::User, "{not json").unwrap();

    assert!(store.cached_user().is_none());
}
