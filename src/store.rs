// Copyright (c) 2025 FinSmart contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};

use crate::errors::Error;
use crate::models::{Profile, Transaction};

pub type Profiles = BTreeMap<String, Profile>;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.finsmart", "FinSmart", "finsmart"));

// Persisted keys. `transactions` is the legacy single-profile blob and is
// consumed once, when the first profile is created.
const PROFILES_KEY: &str = "userProfiles";
const CURRENT_USER_KEY: &str = "currentUser";
const LEGACY_TRANSACTIONS_KEY: &str = "transactions";

pub fn store_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("finsmart.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    open_at(&store_path()?)
}

pub fn open_at(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)
        .with_context(|| format!("Open store at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    init_schema(&conn)?;
    Ok(conn)
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS store(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
    "#,
    )?;
    Ok(())
}

/// Durable username → transaction-list mapping, stored as JSON blobs in the
/// kv table. The store is the single source of truth across sessions; the
/// history engine's current list is a transient view written back here after
/// every mutation.
///
/// Reads fail soft: a missing or unparseable blob loads as empty defaults.
pub struct ProfileStore {
    conn: Connection,
}

impl ProfileStore {
    pub fn new(conn: Connection) -> Self {
        ProfileStore { conn }
    }

    fn get_raw(&self, key: &str) -> Result<Option<String>, Error> {
        let v = self
            .conn
            .query_row("SELECT value FROM store WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()?;
        Ok(v)
    }

    fn put_raw(&self, key: &str, value: &str) -> Result<(), Error> {
        self.conn.execute(
            "INSERT INTO store(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn delete_raw(&self, key: &str) -> Result<(), Error> {
        self.conn
            .execute("DELETE FROM store WHERE key=?1", params![key])?;
        Ok(())
    }

    pub fn load(&self) -> Profiles {
        self.get_raw(PROFILES_KEY)
            .ok()
            .flatten()
            .and_then(|blob| serde_json::from_str(&blob).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, profiles: &Profiles) -> Result<(), Error> {
        self.put_raw(PROFILES_KEY, &serde_json::to_string(profiles)?)
    }

    /// Returns the profile for `username`, creating an empty one if absent.
    /// The very first profile created absorbs the legacy single-profile list,
    /// if one is still around.
    pub fn ensure_profile(&self, username: &str) -> Result<Profile, Error> {
        let mut profiles = self.load();
        if let Some(p) = profiles.get(username) {
            return Ok(p.clone());
        }
        let mut profile = Profile::new(username);
        if profiles.is_empty() {
            if let Some(mut seed) = self.take_legacy_transactions() {
                for tx in &mut seed {
                    tx.user_id = username.to_string();
                }
                profile.transactions = seed;
            }
        }
        profiles.insert(username.to_string(), profile.clone());
        self.save(&profiles)?;
        Ok(profile)
    }

    fn take_legacy_transactions(&self) -> Option<Vec<Transaction>> {
        let list = self
            .get_raw(LEGACY_TRANSACTIONS_KEY)
            .ok()
            .flatten()
            .and_then(|blob| serde_json::from_str::<Vec<Transaction>>(&blob).ok())?;
        let _ = self.delete_raw(LEGACY_TRANSACTIONS_KEY);
        Some(list)
    }

    /// Replaces one profile's list and persists the full mapping.
    pub fn set_transactions(&self, username: &str, list: &[Transaction]) -> Result<(), Error> {
        let mut profiles = self.load();
        let profile = profiles
            .entry(username.to_string())
            .or_insert_with(|| Profile::new(username));
        profile.transactions = list.to_vec();
        self.save(&profiles)
    }

    pub fn current_user(&self) -> Option<String> {
        self.get_raw(CURRENT_USER_KEY)
            .ok()
            .flatten()
            .filter(|s| !s.is_empty())
    }

    pub fn set_current_user(&self, username: &str) -> Result<(), Error> {
        self.put_raw(CURRENT_USER_KEY, username)
    }

    pub fn clear_current_user(&self) -> Result<(), Error> {
        self.delete_raw(CURRENT_USER_KEY)
    }
}
