// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store;
use crate::utils::required;
use anyhow::{Result, bail};
use rusqlite::Connection;
use serde_json::json;
use tracing::info;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        _ => Ok(()),
    }
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = required(sub, "format")?.to_lowercase();
    let out = required(sub, "out")?;

    let categories = store::load_categories(conn)?;
    let rows = categories.iter().flat_map(|c| {
        c.transactions
            .iter()
            .map(move |t| (c.name.as_str(), t))
    });

    let mut count = 0usize;
    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "date", "category", "description", "type", "amount"])?;
            for (cat, t) in rows {
                wtr.write_record([
                    t.id.as_str(),
                    t.date.as_str(),
                    cat,
                    t.description.as_str(),
                    t.r#type.as_str(),
                    t.amount.to_string().as_str(),
                ])?;
                count += 1;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for (cat, t) in rows {
                items.push(json!({
                    "id": t.id, "date": t.date, "category": cat, "description": t.description,
                    "type": t.r#type, "amount": t.amount.to_string()
                }));
            }
            count = items.len();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    info!(count, format = %fmt, "exported transactions");
    println!("Exported {} transaction(s) to {}", count, out);
    Ok(())
}
