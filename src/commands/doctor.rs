// Copyright (c) 2025 FinSmart contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::Session;
use crate::utils::pretty_table;

/// Integrity pass over the persisted blobs: sign-invariant violations,
/// transactions filed under the wrong profile, and a `currentUser` marker
/// naming a profile that does not exist.
pub fn handle(active: &Session) {
    let mut rows = Vec::new();
    let profiles = active.store().load();

    for (username, profile) in &profiles {
        for t in &profile.transactions {
            if t.check_sign().is_err() {
                rows.push(vec![
                    "sign_mismatch".into(),
                    format!("{}: {} is {} with amount {}", username, t.id, t.kind, t.amount),
                ]);
            }
            if t.user_id != *username {
                rows.push(vec![
                    "foreign_user_id".into(),
                    format!("{}: {} is tagged for '{}'", username, t.id, t.user_id),
                ]);
            }
        }
    }

    if let Some(user) = active.store().current_user() {
        if !profiles.contains_key(&user) {
            rows.push(vec!["dangling_current_user".into(), user]);
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
}
