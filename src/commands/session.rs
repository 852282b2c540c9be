// Copyright (c) 2025 FinSmart contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::session::Session;

pub fn login(active: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let username = sub.get_one::<String>("username").unwrap();
    active.login(username)?;
    println!("Logged in as '{}'", username.trim());
    Ok(())
}

pub fn logout(active: &mut Session) -> Result<()> {
    match active.active_user() {
        Some(user) => {
            let user = user.to_string();
            active.logout()?;
            println!("Logged out '{}'", user);
        }
        None => println!("No active session."),
    }
    Ok(())
}

pub fn whoami(active: &Session) {
    match active.active_user() {
        Some(user) => println!("{}", user),
        None => println!("Not logged in."),
    }
}
