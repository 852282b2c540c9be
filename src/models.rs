// Copyright (c) 2025 FinSmart contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::Category;
use crate::errors::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }
}

impl std::fmt::Display for TxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TxKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "income" => Ok(TxKind::Income),
            "expense" => Ok(TxKind::Expense),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

/// A single ledger entry. `amount` is signed and must agree with `kind`:
/// income carries a non-negative amount, expense a non-positive one. Field
/// names serialize camelCase to stay compatible with the persisted blobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub user_id: String,
}

impl Transaction {
    /// Builds an entry with `magnitude` signed according to `kind`.
    pub fn new(
        id: impl Into<String>,
        kind: TxKind,
        magnitude: Decimal,
        category: Category,
        description: impl Into<String>,
        date: DateTime<Utc>,
        user_id: impl Into<String>,
    ) -> Self {
        Transaction {
            id: id.into(),
            amount: Self::signed_amount(kind, magnitude),
            kind,
            category,
            description: description.into(),
            date,
            user_id: user_id.into(),
        }
    }

    pub fn signed_amount(kind: TxKind, magnitude: Decimal) -> Decimal {
        match kind {
            TxKind::Income => magnitude.abs(),
            TxKind::Expense => -magnitude.abs(),
        }
    }

    /// The sign invariant, checked at every mutation site.
    pub fn check_sign(&self) -> Result<(), Error> {
        let ok = match self.kind {
            TxKind::Income => self.amount >= Decimal::ZERO,
            TxKind::Expense => self.amount <= Decimal::ZERO,
        };
        if ok {
            Ok(())
        } else {
            Err(Error::SignMismatch {
                kind: self.kind,
                amount: self.amount,
            })
        }
    }
}

/// One user's persisted data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub transactions: Vec<Transaction>,
}

impl Profile {
    pub fn new(username: impl Into<String>) -> Self {
        Profile {
            username: username.into(),
            transactions: Vec::new(),
        }
    }
}

/// Income/expense/balance aggregates over a transaction list. `expenses`
/// keeps its negative sign; `balance = income + expenses`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

impl Totals {
    pub fn of(transactions: &[Transaction]) -> Self {
        let mut income = Decimal::ZERO;
        let mut expenses = Decimal::ZERO;
        for t in transactions {
            if t.amount > Decimal::ZERO {
                income += t.amount;
            } else {
                expenses += t.amount;
            }
        }
        Totals {
            income,
            expenses,
            balance: income + expenses,
        }
    }
}
