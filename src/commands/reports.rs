// Copyright (c) 2025 FinSmart contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use anyhow::Result;
use rust_decimal::Decimal;

use crate::categories::Category;
use crate::models::Transaction;
use crate::session::Session;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(active: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(active, sub)?,
        Some(("by-category", sub)) => by_category(active, sub)?,
        Some(("monthly", sub)) => monthly(active, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(active: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let totals = active.totals();
    if !maybe_print_json(json_flag, jsonl_flag, &totals)? {
        let row = vec![vec![
            fmt_money(&totals.income),
            fmt_money(&totals.expenses.abs()),
            fmt_money(&totals.balance),
        ]];
        println!("{}", pretty_table(&["Income", "Expenses", "Balance"], row));
    }
    Ok(())
}

fn by_category(active: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data: Vec<Vec<String>> = expenses_by_category(active.transactions())
        .into_iter()
        .map(|(category, spent)| vec![category.label().to_string(), fmt_money(&spent)])
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Category", "Spent"], data));
    }
    Ok(())
}

fn monthly(active: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data: Vec<Vec<String>> = monthly_flow(active.transactions())
        .into_iter()
        .map(|(month, income, expenses)| {
            vec![month, fmt_money(&income), fmt_money(&expenses)]
        })
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Month", "Income", "Expenses"], data));
    }
    Ok(())
}

/// Expense magnitude per category, largest first. Income entries are skipped.
pub fn expenses_by_category(transactions: &[Transaction]) -> Vec<(Category, Decimal)> {
    let mut agg: BTreeMap<Category, Decimal> = BTreeMap::new();
    for t in transactions.iter().filter(|t| t.amount < Decimal::ZERO) {
        *agg.entry(t.category).or_insert(Decimal::ZERO) += t.amount.abs();
    }
    let mut items: Vec<_> = agg.into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1));
    items
}

/// Income and expense magnitude per `YYYY-MM` month, in calendar order.
pub fn monthly_flow(transactions: &[Transaction]) -> Vec<(String, Decimal, Decimal)> {
    let mut agg: BTreeMap<String, (Decimal, Decimal)> = BTreeMap::new();
    for t in transactions {
        let month = t.date.format("%Y-%m").to_string();
        let entry = agg.entry(month).or_insert((Decimal::ZERO, Decimal::ZERO));
        if t.amount > Decimal::ZERO {
            entry.0 += t.amount;
        } else {
            entry.1 += t.amount.abs();
        }
    }
    agg.into_iter()
        .map(|(month, (income, expenses))| (month, income, expenses))
        .collect()
}
