//! Account Tests
//!
//! Tests for:
//! - create_account
//! - account (by id)
//! - account_with_email (case-insensitive)

use crate::*;
use proptest::prelude::*;
use std::collections::HashSet;

/// Test created account round-trips through account(id)
#[test]
fn test_create_and_get_account() {
    let store = create_store();

    let created = store.create_account(account_data("ann@example.com")).unwrap();
    let fetched = store.account(created.id()).unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.email(), "ann@example.com");
    assert_eq!(fetched.password(), "correct horse battery staple");
}

/// Test the id is generated, never taken from the caller
#[test]
fn test_account_id_is_generated() {
    let store = create_store();

    let account = store
        .create_account(account_data("ann@example.com").with(attr::ID, "chosen"))
        .unwrap();

    assert_ne!(account.id(), "chosen");
    assert!(!account.id().is_empty());
    assert!(store.account("chosen").unwrap_err().is_not_found());
}

/// Test undeclared attributes are dropped by hydration
#[test]
fn test_account_ignores_extra_attributes() {
    let store = create_store();

    let account = store
        .create_account(account_data("ann@example.com").with("role", "admin"))
        .unwrap();

    let json = serde_json::to_value(&account).unwrap();
    assert!(json.get("role").is_none());
    assert_eq!(json["email"], "ann@example.com");
}

/// Test unknown id
#[test]
fn test_account_not_found() {
    let store = create_store();
    let err = store.account("no-such-id").unwrap_err();
    assert!(err.is_not_found());
    assert!(!err.is_serious());
}

/// Test email lookup folds case but keeps the stored value
#[test]
fn test_account_with_email_case_insensitive() {
    let store = create_store();
    let created = store.create_account(account_data("A@b.com")).unwrap();

    let found = store.account_with_email("a@B.COM").unwrap().unwrap();
    assert_eq!(found.id(), created.id());
    assert_eq!(found.email(), "A@b.com");
}

/// Test absent email returns None rather than an error
#[test]
fn test_account_with_email_absent() {
    let store = create_store();
    store.create_account(account_data("ann@example.com")).unwrap();
    assert!(store.account_with_email("bob@example.com").unwrap().is_none());
}

/// Test duplicate emails are reported, not silently resolved
#[test]
fn test_account_with_email_duplicate_is_ambiguous() {
    let store = create_store();
    store.create_account(account_data("ann@example.com")).unwrap();
    store.create_account(account_data("ANN@example.com")).unwrap();

    let err = store.account_with_email("ann@example.com").unwrap_err();
    assert!(err.is_ambiguous());
    assert!(err.to_string().contains("2 accounts"));
}

/// Test many accounts get distinct ids
#[test]
fn test_account_ids_unique() {
    let store = create_store();
    let ids: HashSet<String> = (0..200)
        .map(|i| {
            store
                .create_account(account_data(&format!("user{}@example.com", i)))
                .unwrap()
                .id()
                .to_string()
        })
        .collect();
    assert_eq!(ids.len(), 200);
    assert_eq!(store.metrics().accounts, 200);
}

proptest! {
    /// Every field except id survives create -> account(id)
    #[test]
    fn prop_account_round_trip(email in "[a-zA-Z0-9.]{1,16}@[a-z]{1,8}\\.com", password in ".{0,24}") {
        let store = DataStore::new();
        let created = store
            .create_account(Tuple::new().with(attr::EMAIL, email.clone()).with(attr::PASSWORD, password.clone()))
            .unwrap();
        let fetched = store.account(created.id()).unwrap();
        prop_assert_eq!(fetched.email(), email.as_str());
        prop_assert_eq!(fetched.password(), password.as_str());

        let by_email = store.account_with_email(&email.to_uppercase()).unwrap();
        prop_assert_eq!(by_email.map(|a| a.id().to_string()), Some(created.id().to_string()));
    }
}
