// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::icons::{PICKER_ICONS, resolve_icon};
use crate::models::Category;
use crate::summary::{Totals, category_total, totals};
use crate::utils::{fmt_money, fmt_signed, pretty_table, required};
use crate::{ledger, store};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = required(sub, "name")?;
            let icon = sub.get_one::<String>("icon").map(|s| s.as_str());
            let mut categories = store::load_categories(conn)?;
            let added = ledger::add_category(&mut categories, name, icon)?;
            store::save_categories(conn, &categories)?;
            println!("Added category '{}' ({})", added.name, added.id);
        }
        Some(("list", _)) => {
            let categories = store::load_categories(conn)?;
            let data = list_rows(&categories)?;
            println!(
                "{}",
                pretty_table(&["", "Category", "Transactions", "Net", "ID"], data)
            );
        }
        Some(("show", sub)) => {
            let key = required(sub, "category")?;
            let categories = store::load_categories(conn)?;
            let category = ledger::find_category(&categories, key)?;
            let (totals, rows) = detail(category)?;
            println!(
                "{} {}",
                resolve_icon(&category.name, category.icon.as_deref()),
                category.name
            );
            println!(
                "{}",
                pretty_table(
                    &["Income", "Expenses", "Balance"],
                    vec![vec![
                        fmt_money(&totals.income),
                        fmt_money(&totals.expenses),
                        fmt_signed(&totals.balance),
                    ]],
                )
            );
            if rows.is_empty() {
                println!("No transactions yet");
            } else {
                println!(
                    "{}",
                    pretty_table(&["Date", "Description", "Type", "Amount", "ID"], rows)
                );
            }
        }
        Some(("rename", sub)) => {
            let key = required(sub, "category")?;
            let name = required(sub, "name")?;
            let mut categories = store::load_categories(conn)?;
            ledger::rename_category(&mut categories, key, name)?;
            store::save_categories(conn, &categories)?;
            println!("Renamed category '{}' to '{}'", key, name.trim());
        }
        Some(("icon", sub)) => {
            let key = required(sub, "category")?;
            let icon = required(sub, "icon")?;
            let mut categories = store::load_categories(conn)?;
            ledger::set_icon(&mut categories, key, icon)?;
            store::save_categories(conn, &categories)?;
            println!("Set icon of '{}' to {}", key, icon.trim());
        }
        Some(("rm", sub)) => {
            let key = required(sub, "category")?;
            let mut categories = store::load_categories(conn)?;
            let removed = ledger::delete_category(&mut categories, key)?;
            store::save_categories(conn, &categories)?;
            println!(
                "Removed category '{}' and {} transaction(s)",
                removed.name,
                removed.transactions.len()
            );
        }
        Some(("icons", _)) => {
            println!("{}", PICKER_ICONS.join(" "));
        }
        _ => {}
    }
    Ok(())
}

/// One row per category: icon, name, transaction count, signed net, id.
/// A zero net is left blank.
pub fn list_rows(categories: &[Category]) -> Result<Vec<Vec<String>>> {
    categories
        .iter()
        .map(|c| {
            let total = category_total(c)?;
            Ok(vec![
                resolve_icon(&c.name, c.icon.as_deref()),
                c.name.clone(),
                c.transactions.len().to_string(),
                if total.is_zero() {
                    String::new()
                } else {
                    fmt_signed(&total)
                },
                c.id.clone(),
            ])
        })
        .collect()
}

/// Income, expenses and balance over every transaction of the category,
/// with one row per transaction in entry order.
pub fn detail(category: &Category) -> Result<(Totals, Vec<Vec<String>>)> {
    let totals = totals(&category.transactions)?;
    let rows = category
        .transactions
        .iter()
        .map(|t| {
            vec![
                t.date.clone(),
                t.description.clone(),
                t.r#type.to_string(),
                fmt_money(&t.amount),
                t.id.clone(),
            ]
        })
        .collect();
    Ok((totals, rows))
}
