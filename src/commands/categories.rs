// Copyright (c) 2025 FinSmart contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::Category;
use crate::utils::pretty_table;

pub fn handle(m: &clap::ArgMatches) {
    if let Some(("list", _)) = m.subcommand() {
        let rows: Vec<Vec<String>> = Category::ALL
            .iter()
            .map(|c| {
                vec![
                    c.id().to_string(),
                    c.label().to_string(),
                    c.color().to_string(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Id", "Name", "Color"], rows));
    }
}
