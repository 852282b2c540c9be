// Copyright (c) 2025 FinSmart contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::categories::Category;
use crate::errors::Error;
use crate::history::HistoryEngine;
use crate::models::{Totals, Transaction, TxKind};
use crate::store::ProfileStore;

/// The active user's session: owns the profile store and a history engine
/// bound to one profile's list. Every committed mutation is written back
/// through the store before the operation returns, so the persisted blob
/// always matches the displayed list.
pub struct Session {
    store: ProfileStore,
    engine: HistoryEngine,
    active: Option<String>,
}

impl Session {
    /// Opens a session over `store`, resuming the persisted active user if
    /// one is recorded.
    pub fn new(store: ProfileStore) -> Result<Self, Error> {
        let mut session = Session {
            store,
            engine: HistoryEngine::new(),
            active: None,
        };
        if let Some(user) = session.store.current_user() {
            let profile = session.store.ensure_profile(&user)?;
            session.engine.reset(profile.transactions);
            session.active = Some(user);
        }
        Ok(session)
    }

    pub fn active_user(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.engine.current()
    }

    pub fn find_transaction(&self, id: &str) -> Option<&Transaction> {
        self.engine.current().iter().find(|t| t.id == id)
    }

    pub fn can_undo(&self) -> bool {
        self.engine.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.engine.can_redo()
    }

    pub fn totals(&self) -> Totals {
        Totals::of(self.engine.current())
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    /// Binds the session to `username`'s profile with a fresh history stack.
    /// Switching users requires an explicit logout first.
    pub fn login(&mut self, username: &str) -> Result<(), Error> {
        if let Some(active) = &self.active {
            return Err(Error::AlreadyLoggedIn(active.clone()));
        }
        let username = username.trim();
        if username.is_empty() {
            return Err(Error::EmptyUsername);
        }
        let profile = self.store.ensure_profile(username)?;
        self.store.set_current_user(username)?;
        self.engine.reset(profile.transactions);
        self.active = Some(username.to_string());
        Ok(())
    }

    /// Clears the in-memory state and the persisted active-user marker.
    /// Profile data is untouched.
    pub fn logout(&mut self) -> Result<(), Error> {
        self.store.clear_current_user()?;
        self.engine.reset(Vec::new());
        self.active = None;
        Ok(())
    }

    /// Records a new transaction at the head of the list (newest first).
    pub fn add_transaction(
        &mut self,
        kind: TxKind,
        amount: Decimal,
        category: Category,
        description: &str,
    ) -> Result<Transaction, Error> {
        let user = self.require_user()?.to_string();
        let now = Utc::now();
        let id = self.next_id(now.timestamp_millis());
        let tx = Transaction::new(id, kind, amount, category, description, now, &user);
        let mut list = self.engine.current().to_vec();
        list.insert(0, tx.clone());
        self.commit_and_save(&user, list)?;
        Ok(tx)
    }

    /// Replaces the entry with `updated.id`. Returns false (without touching
    /// history) when no such entry exists.
    pub fn update_transaction(&mut self, updated: Transaction) -> Result<bool, Error> {
        let user = self.require_user()?.to_string();
        updated.check_sign()?;
        let mut list = self.engine.current().to_vec();
        let Some(slot) = list.iter_mut().find(|t| t.id == updated.id) else {
            return Ok(false);
        };
        *slot = updated;
        self.commit_and_save(&user, list)?;
        Ok(true)
    }

    /// Removes the entry with `id`. Returns false (without touching history)
    /// when no such entry exists.
    pub fn delete_transaction(&mut self, id: &str) -> Result<bool, Error> {
        let user = self.require_user()?.to_string();
        let mut list = self.engine.current().to_vec();
        let before = list.len();
        list.retain(|t| t.id != id);
        if list.len() == before {
            return Ok(false);
        }
        self.commit_and_save(&user, list)?;
        Ok(true)
    }

    /// Reverts the most recent committed mutation. Returns false at the
    /// history boundary.
    pub fn undo(&mut self) -> Result<bool, Error> {
        let user = self.require_user()?.to_string();
        if !self.engine.undo() {
            return Ok(false);
        }
        self.store.set_transactions(&user, self.engine.current())?;
        Ok(true)
    }

    /// Reapplies the most recently undone mutation. Returns false at the
    /// history boundary.
    pub fn redo(&mut self) -> Result<bool, Error> {
        let user = self.require_user()?.to_string();
        if !self.engine.redo() {
            return Ok(false);
        }
        self.store.set_transactions(&user, self.engine.current())?;
        Ok(true)
    }

    fn require_user(&self) -> Result<&str, Error> {
        self.active.as_deref().ok_or(Error::NotLoggedIn)
    }

    // Millisecond timestamps collide when entries arrive within the same
    // tick, so bump until the id is free in the current list.
    fn next_id(&self, millis: i64) -> String {
        let mut bump = millis;
        let mut id = bump.to_string();
        while self.engine.current().iter().any(|t| t.id == id) {
            bump += 1;
            id = bump.to_string();
        }
        id
    }

    fn commit_and_save(&mut self, user: &str, list: Vec<Transaction>) -> Result<(), Error> {
        self.engine.commit(list);
        self.store.set_transactions(user, self.engine.current())
    }
}
