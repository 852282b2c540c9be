// Copyright (c) 2025 FinSmart contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::TxKind;

/// Core error taxonomy. Validation variants are rejected before any state
/// mutation and surfaced to the caller; storage variants cover write paths
/// (reads fail soft to empty defaults and never raise).
#[derive(Debug, Error)]
pub enum Error {
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("already logged in as '{0}'; log out first")]
    AlreadyLoggedIn(String),
    #[error("no active session; log in first")]
    NotLoggedIn,
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("unknown transaction type '{0}', expected 'income' or 'expense'")]
    UnknownKind(String),
    #[error("{kind} transaction cannot carry amount {amount}")]
    SignMismatch { kind: TxKind, amount: Decimal },
    #[error(transparent)]
    Storage(#[from] rusqlite::Error),
    #[error("failed to serialize store blob: {0}")]
    Serialize(#[from] serde_json::Error),
}
