// Copyright (c) 2025 FinSmart contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use finsmart::{cli, commands, session::Session, store};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();

    let conn = store::open_or_init()?;
    let mut session = Session::new(store::ProfileStore::new(conn))?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Store initialized at {}", store::store_path()?.display());
        }
        Some(("shell", _)) => commands::shell::run(&mut session)?,
        Some(_) => commands::dispatch(&mut session, &matches)?,
        None => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
