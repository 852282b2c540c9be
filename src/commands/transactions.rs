// Copyright (c) 2025 FinSmart contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::categories::Category;
use crate::models::{Transaction, TxKind};
use crate::session::Session;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(active: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(active, sub)?,
        Some(("edit", sub)) => edit(active, sub)?,
        Some(("rm", sub)) => rm(active, sub)?,
        Some(("list", sub)) => list(active, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(active: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let kind: TxKind = sub.get_one::<String>("type").unwrap().parse()?;
    let category: Category = sub.get_one::<String>("category").unwrap().parse()?;
    let description = sub.get_one::<String>("description").unwrap();

    let tx = active.add_transaction(kind, amount, category, description)?;
    println!(
        "Recorded {} of {} in {} (id: {})",
        tx.kind,
        fmt_money(&tx.amount.abs()),
        tx.category.label(),
        tx.id
    );
    Ok(())
}

fn edit(active: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let Some(mut updated) = active.find_transaction(id).cloned() else {
        println!("No transaction with id '{}'", id);
        return Ok(());
    };
    if let Some(kind) = sub.get_one::<String>("type") {
        updated.kind = kind.parse()?;
    }
    if let Some(category) = sub.get_one::<String>("category") {
        updated.category = category.parse()?;
    }
    if let Some(description) = sub.get_one::<String>("description") {
        updated.description = description.clone();
    }
    if let Some(amount) = sub.get_one::<String>("amount") {
        updated.amount = parse_decimal(amount)?;
    }
    // Changing kind or amount re-signs the amount, same as at creation.
    updated.amount = Transaction::signed_amount(updated.kind, updated.amount);

    if active.update_transaction(updated)? {
        println!("Updated transaction {}", id);
    } else {
        println!("No transaction with id '{}'", id);
    }
    Ok(())
}

fn rm(active: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    if active.delete_transaction(id)? {
        println!("Removed transaction {}", id);
    } else {
        println!("No transaction with id '{}'", id);
    }
    Ok(())
}

fn list(active: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = rows(active, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let table_rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.description.clone(),
                    r.category.clone(),
                    r.kind.clone(),
                    r.amount.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Description", "Category", "Type", "Amount"],
                table_rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: String,
}

pub fn rows(active: &Session, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let category = match sub.get_one::<String>("category") {
        Some(c) => Some(c.parse::<Category>()?),
        None => None,
    };
    let mut data: Vec<TransactionRow> = active
        .transactions()
        .iter()
        .filter(|t| category.is_none_or(|c| t.category == c))
        .map(|t| TransactionRow {
            id: t.id.clone(),
            date: t.date.format("%Y-%m-%d %H:%M").to_string(),
            description: t.description.clone(),
            category: t.category.label().to_string(),
            kind: t.kind.to_string(),
            amount: fmt_money(&t.amount.abs()),
        })
        .collect();
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    Ok(data)
}

pub fn undo(active: &mut Session) -> Result<()> {
    if active.undo()? {
        println!(
            "Undid last change ({} transactions now)",
            active.transactions().len()
        );
    } else {
        println!("Nothing to undo.");
    }
    Ok(())
}

pub fn redo(active: &mut Session) -> Result<()> {
    if active.redo()? {
        println!(
            "Redid last undone change ({} transactions now)",
            active.transactions().len()
        );
    } else {
        println!("Nothing to redo.");
    }
    Ok(())
}
