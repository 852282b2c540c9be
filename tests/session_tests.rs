// Copyright (c) 2025 FinSmart contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finsmart::categories::Category;
use finsmart::errors::Error;
use finsmart::models::TxKind;
use finsmart::session::Session;
use finsmart::store::{self, ProfileStore};
use rust_decimal::Decimal;

fn fresh_session() -> Session {
    Session::new(ProfileStore::new(store::open_in_memory().unwrap())).unwrap()
}

fn dec(v: i64) -> Decimal {
    Decimal::from(v)
}

#[test]
fn login_rejects_blank_username() {
    let mut s = fresh_session();
    assert!(matches!(s.login(""), Err(Error::EmptyUsername)));
    assert!(matches!(s.login("   "), Err(Error::EmptyUsername)));
    assert!(s.active_user().is_none());
}

#[test]
fn switching_users_requires_logout() {
    let mut s = fresh_session();
    s.login("alice").unwrap();
    assert!(matches!(s.login("bob"), Err(Error::AlreadyLoggedIn(_))));
    assert_eq!(s.active_user(), Some("alice"));
    s.logout().unwrap();
    s.login("bob").unwrap();
    assert_eq!(s.active_user(), Some("bob"));
}

#[test]
fn mutations_require_an_active_session() {
    let mut s = fresh_session();
    assert!(matches!(
        s.add_transaction(TxKind::Income, dec(1), Category::Other, ""),
        Err(Error::NotLoggedIn)
    ));
    assert!(matches!(s.delete_transaction("1"), Err(Error::NotLoggedIn)));
    assert!(matches!(s.undo(), Err(Error::NotLoggedIn)));
    assert!(matches!(s.redo(), Err(Error::NotLoggedIn)));
}

#[test]
fn amounts_are_signed_per_kind() {
    let mut s = fresh_session();
    s.login("alice").unwrap();
    let expense = s
        .add_transaction(TxKind::Expense, dec(20), Category::Food, "lunch")
        .unwrap();
    assert_eq!(expense.amount, dec(-20));
    expense.check_sign().unwrap();

    // Magnitude is taken as absolute regardless of the caller's sign.
    let income = s
        .add_transaction(TxKind::Income, dec(-100), Category::Salary, "pay")
        .unwrap();
    assert_eq!(income.amount, dec(100));
    income.check_sign().unwrap();
}

#[test]
fn reference_scenario_balance_undo_redo() {
    let mut s = fresh_session();
    s.login("alice").unwrap();
    s.add_transaction(TxKind::Income, dec(100), Category::Salary, "pay")
        .unwrap();
    s.add_transaction(TxKind::Expense, dec(20), Category::Food, "lunch")
        .unwrap();

    let totals = s.totals();
    assert_eq!(format!("{:.2}", totals.income), "100.00");
    assert_eq!(format!("{:.2}", totals.expenses), "-20.00");
    assert_eq!(format!("{:.2}", totals.balance), "80.00");
    assert!(s.can_undo());
    assert!(!s.can_redo());

    assert!(s.undo().unwrap());
    assert_eq!(s.transactions().len(), 1);
    assert_eq!(s.transactions()[0].category, Category::Salary);
    assert!(s.can_redo());

    assert!(s.redo().unwrap());
    assert_eq!(s.transactions().len(), 2);
    assert_eq!(s.transactions()[0].category, Category::Food);
    assert!(!s.can_redo());
    assert_eq!(format!("{:.2}", s.totals().balance), "80.00");
}

#[test]
fn update_enforces_sign_invariant() {
    let mut s = fresh_session();
    s.login("alice").unwrap();
    let tx = s
        .add_transaction(TxKind::Income, dec(100), Category::Salary, "pay")
        .unwrap();

    let mut bad = tx.clone();
    bad.amount = dec(-100);
    assert!(matches!(
        s.update_transaction(bad),
        Err(Error::SignMismatch { .. })
    ));
    // The rejected update must not have committed anything.
    assert_eq!(s.transactions()[0].amount, dec(100));

    let mut good = tx;
    good.description = "september pay".to_string();
    assert!(s.update_transaction(good).unwrap());
    assert_eq!(s.transactions()[0].description, "september pay");
    assert!(s.undo().unwrap());
    assert_eq!(s.transactions()[0].description, "pay");
}

#[test]
fn unknown_ids_do_not_touch_history() {
    let mut s = fresh_session();
    s.login("alice").unwrap();
    let tx = s
        .add_transaction(TxKind::Expense, dec(5), Category::Food, "")
        .unwrap();

    assert!(!s.delete_transaction("no-such-id").unwrap());
    let mut ghost = tx;
    ghost.id = "no-such-id".to_string();
    assert!(!s.update_transaction(ghost).unwrap());

    // Exactly one committed mutation (the add) remains undoable.
    assert!(s.undo().unwrap());
    assert!(!s.can_undo());
}

#[test]
fn delete_then_undo_restores_entry() {
    let mut s = fresh_session();
    s.login("alice").unwrap();
    let first = s
        .add_transaction(TxKind::Income, dec(100), Category::Salary, "")
        .unwrap();
    s.add_transaction(TxKind::Expense, dec(20), Category::Food, "")
        .unwrap();

    assert!(s.delete_transaction(&first.id).unwrap());
    assert_eq!(s.transactions().len(), 1);
    assert!(s.undo().unwrap());
    assert_eq!(s.transactions().len(), 2);
    assert!(s.find_transaction(&first.id).is_some());
}

#[test]
fn profiles_are_isolated_and_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.sqlite");

    {
        let conn = store::open_at(&path).unwrap();
        let mut s = Session::new(ProfileStore::new(conn)).unwrap();
        s.login("alice").unwrap();
        s.add_transaction(TxKind::Income, dec(100), Category::Salary, "pay")
            .unwrap();
        s.add_transaction(TxKind::Expense, dec(20), Category::Food, "lunch")
            .unwrap();
        s.logout().unwrap();
    }

    let conn = store::open_at(&path).unwrap();
    let mut s = Session::new(ProfileStore::new(conn)).unwrap();
    assert!(s.active_user().is_none());

    s.login("bob").unwrap();
    assert!(s.transactions().is_empty());
    s.logout().unwrap();

    s.login("alice").unwrap();
    assert_eq!(s.transactions().len(), 2);
    assert_eq!(format!("{:.2}", s.totals().balance), "80.00");
    // Fresh history: nothing from the previous session is undoable.
    assert!(!s.can_undo());
    assert!(!s.can_redo());
}

#[test]
fn session_resumes_persisted_active_user() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.sqlite");

    {
        let conn = store::open_at(&path).unwrap();
        let mut s = Session::new(ProfileStore::new(conn)).unwrap();
        s.login("alice").unwrap();
        s.add_transaction(TxKind::Expense, dec(9), Category::Transport, "bus")
            .unwrap();
        // Dropped without logout: the active-user marker stays persisted.
    }

    let conn = store::open_at(&path).unwrap();
    let s = Session::new(ProfileStore::new(conn)).unwrap();
    assert_eq!(s.active_user(), Some("alice"));
    assert_eq!(s.transactions().len(), 1);
    assert!(!s.can_undo());
}

#[test]
fn logout_keeps_profile_data() {
    let mut s = fresh_session();
    s.login("alice").unwrap();
    s.add_transaction(TxKind::Income, dec(50), Category::Investment, "")
        .unwrap();
    s.logout().unwrap();
    assert!(s.transactions().is_empty());

    s.login("alice").unwrap();
    assert_eq!(s.transactions().len(), 1);
}
