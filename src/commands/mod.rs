// Copyright (c) 2025 FinSmart contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod categories;
pub mod doctor;
pub mod reports;
pub mod session;
pub mod shell;
pub mod transactions;

use anyhow::Result;

use crate::session::Session;

/// Routes a parsed command to its handler. Shared by the one-shot binary and
/// the interactive shell.
pub fn dispatch(active: &mut Session, matches: &clap::ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("login", sub)) => session::login(active, sub)?,
        Some(("logout", _)) => session::logout(active)?,
        Some(("whoami", _)) => session::whoami(active),
        Some(("tx", sub)) => transactions::handle(active, sub)?,
        Some(("undo", _)) => transactions::undo(active)?,
        Some(("redo", _)) => transactions::redo(active)?,
        Some(("report", sub)) => reports::handle(active, sub)?,
        Some(("category", sub)) => categories::handle(sub),
        Some(("doctor", _)) => doctor::handle(active),
        Some(("init", _)) => {
            println!("Store at {}", crate::store::store_path()?.display());
        }
        Some(("shell", _)) => println!("Already inside a session; type 'exit' to leave."),
        _ => {}
    }
    Ok(())
}
