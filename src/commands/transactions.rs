// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Transaction, TxType, parse_amount, parse_date, parse_description};
use crate::utils::{fmt_money, maybe_print_json, pretty_table, required};
use crate::window::{self, Window, day_string};
use crate::{ledger, store};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub, today)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("rm", sub)) => {
            let id = required(sub, "id")?;
            let mut categories = store::load_categories(conn)?;
            let removed = ledger::delete_transaction(&mut categories, id)?;
            store::save_categories(conn, &categories)?;
            println!("Removed {} '{}'", removed.r#type, removed.description);
        }
        Some(("list", sub)) => list(conn, sub, today)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    let category = required(sub, "category")?;
    let amount = required(sub, "amount")?;
    let description = required(sub, "description")?;
    let date = sub
        .get_one::<String>("date")
        .cloned()
        .unwrap_or_else(|| day_string(today));
    let r#type: TxType = required(sub, "type")?.parse()?;

    let tx = Transaction::new(amount, description, &date, r#type)?;
    let mut categories = store::load_categories(conn)?;
    ledger::add_transaction(&mut categories, category, tx.clone())?;
    store::save_categories(conn, &categories)?;
    println!(
        "Recorded {} {} '{}' on {} ({})",
        tx.r#type,
        fmt_money(&tx.amount),
        tx.description,
        tx.date,
        tx.id
    );
    Ok(())
}

fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = required(sub, "id")?;
    let mut categories = store::load_categories(conn)?;
    let (ci, ti) = ledger::locate_transaction(&categories, id)?;
    let mut tx = categories[ci].transactions[ti].clone();

    if let Some(a) = sub.get_one::<String>("amount") {
        tx.amount = parse_amount(a)?;
    }
    if let Some(d) = sub.get_one::<String>("description") {
        tx.description = parse_description(d)?;
    }
    if let Some(d) = sub.get_one::<String>("date") {
        tx.date = day_string(parse_date(d)?);
    }
    if let Some(t) = sub.get_one::<String>("type") {
        tx.r#type = t.parse()?;
    }

    ledger::update_transaction(&mut categories, tx.clone())?;
    store::save_categories(conn, &categories)?;
    println!(
        "Updated {}: {} {} '{}' on {}",
        tx.id,
        tx.r#type,
        fmt_money(&tx.amount),
        tx.description,
        tx.date
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub, today)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.category.clone(),
                    r.description.clone(),
                    r.r#type.clone(),
                    r.amount.clone(),
                    r.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Category", "Description", "Type", "Amount", "ID"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub category: String,
    pub description: String,
    pub r#type: String,
    pub amount: String,
}

/// Transactions in entry order, grouped by category, narrowed by the
/// `--category` and `--window` options.
pub fn query_rows(
    conn: &Connection,
    sub: &clap::ArgMatches,
    today: NaiveDate,
) -> Result<Vec<TransactionRow>> {
    let categories = store::load_categories(conn)?;
    let window: Window = match sub.get_one::<String>("window") {
        Some(w) => w.parse()?,
        None => Window::All,
    };
    let selected = match sub.get_one::<String>("category") {
        Some(key) => vec![ledger::find_category(&categories, key)?],
        None => categories.iter().collect(),
    };

    let mut data = Vec::new();
    for c in selected {
        for tx in window::filter(&c.transactions, window, today) {
            data.push(TransactionRow {
                id: tx.id,
                date: tx.date,
                category: c.name.clone(),
                description: tx.description,
                r#type: tx.r#type.to_string(),
                amount: fmt_money(&tx.amount),
            });
        }
    }
    Ok(data)
}
