// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Goal;
use crate::onboarding::{self, PRESETS};
use crate::store;
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let goal = m
        .get_one::<String>("goal")
        .map(|g| g.parse::<Goal>())
        .transpose()?;
    // An explicit empty list (`--categories ""`) skips setup like the flag does.
    let selection: Option<Vec<String>> = if m.get_flag("skip_categories") {
        Some(Vec::new())
    } else {
        m.get_many::<String>("categories")
            .map(|vals| vals.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect())
    };

    let created = onboarding::complete(conn, goal, selection.as_deref())?;
    if let Some(g) = goal {
        println!("Goal: {} {}", g.icon(), g.title());
    }
    let rows = created
        .iter()
        .map(|c| vec![c.icon.clone().unwrap_or_default(), c.name.clone()])
        .collect();
    if created.is_empty() {
        println!("No categories created; add your own with `moneyjar category add`.");
    } else {
        println!("{}", pretty_table(&["", "Category"], rows));
    }
    println!("All set! Record your first transaction with `moneyjar tx add`.");
    Ok(())
}

pub fn status(conn: &Connection) -> Result<()> {
    let done = store::is_onboarding_complete(conn)?;
    let goal = store::load_goal(conn)?;
    let categories = store::load_categories(conn)?;
    let mut rows = vec![
        vec!["onboarding".to_string(), if done { "complete" } else { "pending" }.to_string()],
        vec!["categories".to_string(), categories.len().to_string()],
    ];
    if let Some(g) = goal {
        rows.push(vec!["goal".to_string(), format!("{} {}", g.icon(), g.title())]);
    }
    println!("{}", pretty_table(&["Key", "Value"], rows));
    if !done {
        let presets: Vec<String> = PRESETS
            .iter()
            .map(|p| {
                let mark = if p.default_selected { "*" } else { "" };
                format!("{}{} {} ({})", mark, p.icon, p.name, p.key)
            })
            .collect();
        println!("Presets (* = default): {}", presets.join(", "));
    }
    Ok(())
}

pub fn reset(conn: &Connection) -> Result<()> {
    store::reset(conn)?;
    println!("All data erased");
    Ok(())
}
