// Copyright (c) 2025 FinSmart contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("finsmart")
        .version(env!("CARGO_PKG_VERSION"))
        .about("FinSmart: per-user personal finance tracking with undo/redo history")
        .subcommand(Command::new("init").about("Initialize the local store and print its location"))
        .subcommand(
            Command::new("login")
                .about("Start a session as the given user (created on first login)")
                .arg(Arg::new("username").required(true)),
        )
        .subcommand(Command::new("logout").about("End the active session; profile data is kept"))
        .subcommand(Command::new("whoami").about("Print the active user"))
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction for the active user")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense"])
                                .default_value("expense"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .default_value(""),
                        ),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Update fields of an existing transaction")
                        .arg(Arg::new("id").long("id").required(true))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense"]),
                        )
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").required(true)),
                )
                .subcommand(
                    Command::new("list")
                        .about("List the active user's transactions, newest first")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .arg(Arg::new("category").long("category"))
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                ),
        )
        .subcommand(Command::new("undo").about("Revert the most recent change"))
        .subcommand(Command::new("redo").about("Reapply the most recently undone change"))
        .subcommand(
            Command::new("report")
                .about("Aggregated views over the active user's transactions")
                .subcommand_required(true)
                .subcommand(
                    Command::new("summary")
                        .about("Income, expenses, and balance")
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("by-category")
                        .about("Expense totals per category")
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                )
                .subcommand(
                    Command::new("monthly")
                        .about("Income and expenses per calendar month")
                        .arg(json_flag())
                        .arg(jsonl_flag()),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Category registry")
                .subcommand_required(true)
                .subcommand(Command::new("list").about("List known categories")),
        )
        .subcommand(Command::new("doctor").about("Check the persisted blobs for inconsistencies"))
        .subcommand(
            Command::new("shell")
                .about("Interactive session; undo/redo history spans commands here"),
        )
}

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Emit JSON")
}

fn jsonl_flag() -> Arg {
    Arg::new("jsonl")
        .long("jsonl")
        .action(ArgAction::SetTrue)
        .help("Emit JSON lines")
}
