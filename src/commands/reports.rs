// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store;
use crate::summary::{CategorySpending, Totals, category_breakdown, window_totals};
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, pretty_table};
use crate::window::Window;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(conn, sub, today)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub window: String,
    pub today: NaiveDate,
    pub totals: Totals,
    pub categories: Vec<CategorySpending>,
}

pub fn summary_report(conn: &Connection, window: Window, today: NaiveDate) -> Result<SummaryReport> {
    let categories = store::load_categories(conn)?;
    Ok(SummaryReport {
        window: window.to_string(),
        today,
        totals: window_totals(&categories, window, today)?,
        categories: category_breakdown(&categories, window, today)?,
    })
}

fn summary(conn: &Connection, sub: &clap::ArgMatches, today: NaiveDate) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let window: Window = match sub.get_one::<String>("window") {
        Some(w) => w.parse()?,
        None => Window::default(),
    };
    let report = summary_report(conn, window, today)?;
    if maybe_print_json(json_flag, jsonl_flag, &report)? {
        return Ok(());
    }

    let t = &report.totals;
    println!(
        "{}",
        pretty_table(
            &["Window", "Income", "Expenses", "Balance"],
            vec![vec![
                format!("{} (to {})", report.window, report.today),
                fmt_money(&t.income),
                fmt_money(&t.expenses),
                fmt_money(&t.balance),
            ]],
        )
    );
    if report.categories.is_empty() {
        println!("No categories yet");
        return Ok(());
    }
    let rows = report
        .categories
        .iter()
        .map(|c| {
            vec![
                c.icon.clone(),
                c.name.clone(),
                fmt_money(&c.spending),
                fmt_percent(&c.percentage),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["", "Spending by category", "Spent", "Share"], rows)
    );
    Ok(())
}
