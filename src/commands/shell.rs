// Copyright (c) 2025 FinSmart contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::cli;
use crate::session::Session;

/// Interactive loop over the same command tree as the one-shot binary. The
/// session (and with it the undo/redo history) lives for the duration of the
/// loop, so undo/redo span multiple commands here.
pub fn run(active: &mut Session) -> Result<()> {
    println!("FinSmart interactive session. Type 'help' for commands, 'exit' to leave.");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        match active.active_user() {
            Some(user) => print!("{}> ", user),
            None => print!("finsmart> "),
        }
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }
        if line == "help" {
            cli::build_cli().print_help()?;
            println!();
            continue;
        }

        let words = match shell_words::split(line) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("error: {}", e);
                continue;
            }
        };
        match cli::build_cli().no_binary_name(true).try_get_matches_from(&words) {
            Ok(matches) => {
                if let Err(e) = super::dispatch(active, &matches) {
                    eprintln!("error: {:#}", e);
                }
            }
            Err(e) => {
                let _ = e.print();
            }
        }
    }
    Ok(())
}
