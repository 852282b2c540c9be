// Copyright (c) 2025 FinSmart contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use finsmart::categories::Category;
use finsmart::models::{Profile, Transaction, TxKind};
use finsmart::store::{self, ProfileStore, Profiles};
use rusqlite::params;
use rust_decimal::Decimal;

fn sample_tx(id: &str, user: &str) -> Transaction {
    Transaction::new(
        id,
        TxKind::Expense,
        Decimal::from(15),
        Category::Food,
        "groceries",
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap(),
        user,
    )
}

#[test]
fn load_without_prior_data_is_empty() {
    let store = ProfileStore::new(store::open_in_memory().unwrap());
    assert!(store.load().is_empty());
    assert!(store.current_user().is_none());
}

#[test]
fn load_corrupt_blob_falls_back_to_empty() {
    let conn = store::open_in_memory().unwrap();
    conn.execute(
        "INSERT INTO store(key, value) VALUES('userProfiles', ?1)",
        params!["{not json"],
    )
    .unwrap();
    let store = ProfileStore::new(conn);
    assert!(store.load().is_empty());

    // A corrupt blob is not fatal for writes either.
    store.ensure_profile("alice").unwrap();
    assert_eq!(store.load().len(), 1);
}

#[test]
fn save_load_round_trip() {
    let store = ProfileStore::new(store::open_in_memory().unwrap());
    let mut profile = Profile::new("alice");
    profile.transactions.push(sample_tx("1", "alice"));
    let mut profiles = Profiles::new();
    profiles.insert("alice".to_string(), profile);

    store.save(&profiles).unwrap();
    assert_eq!(store.load(), profiles);
}

#[test]
fn ensure_profile_creates_once() {
    let store = ProfileStore::new(store::open_in_memory().unwrap());
    let created = store.ensure_profile("alice").unwrap();
    assert!(created.transactions.is_empty());

    store
        .set_transactions("alice", &[sample_tx("1", "alice")])
        .unwrap();
    let existing = store.ensure_profile("alice").unwrap();
    assert_eq!(existing.transactions.len(), 1);
}

#[test]
fn legacy_blob_seeds_only_the_first_profile() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.sqlite");

    {
        let conn = store::open_at(&path).unwrap();
        // Legacy single-profile shape: camelCase fields, numeric amount, no owner.
        let legacy = r#"[{"id":"1700000000000","amount":42.5,"type":"income","category":"salary","description":"pay","date":"2024-11-14T22:13:20Z"}]"#;
        conn.execute(
            "INSERT INTO store(key, value) VALUES('transactions', ?1)",
            params![legacy],
        )
        .unwrap();

        let store = ProfileStore::new(conn);
        let alice = store.ensure_profile("alice").unwrap();
        assert_eq!(alice.transactions.len(), 1);
        assert_eq!(alice.transactions[0].user_id, "alice");
        assert_eq!(alice.transactions[0].amount, "42.5".parse().unwrap());
        assert_eq!(alice.transactions[0].category, Category::Salary);

        let bob = store.ensure_profile("bob").unwrap();
        assert!(bob.transactions.is_empty());
    }

    // The legacy key is consumed on migration.
    let conn = store::open_at(&path).unwrap();
    let remaining: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM store WHERE key='transactions'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(remaining, 0);
}

#[test]
fn current_user_round_trip() {
    let store = ProfileStore::new(store::open_in_memory().unwrap());
    assert!(store.current_user().is_none());

    store.set_current_user("alice").unwrap();
    assert_eq!(store.current_user().as_deref(), Some("alice"));

    store.clear_current_user().unwrap();
    assert!(store.current_user().is_none());

    // An empty marker reads as logged out.
    store.set_current_user("").unwrap();
    assert!(store.current_user().is_none());
}

#[test]
fn set_transactions_replaces_one_profile() {
    let store = ProfileStore::new(store::open_in_memory().unwrap());
    store.ensure_profile("alice").unwrap();
    store.ensure_profile("bob").unwrap();

    store
        .set_transactions("alice", &[sample_tx("1", "alice")])
        .unwrap();

    let profiles = store.load();
    assert_eq!(profiles["alice"].transactions.len(), 1);
    assert!(profiles["bob"].transactions.is_empty());
}
