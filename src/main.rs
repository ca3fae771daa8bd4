// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use moneyjar::{cli, commands, db, onboarding, utils};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = db::open_or_init(matches.get_one::<String>("db").map(Path::new))?;
    let today = utils::resolve_today(matches.get_one::<String>("today"))?;

    match matches.subcommand() {
        Some(("onboard", sub)) => commands::onboard::handle(&conn, sub)?,
        Some(("status", _)) => commands::onboard::status(&conn)?,
        Some(("reset", _)) => commands::onboard::reset(&conn)?,
        Some((name, sub)) => {
            onboarding::require_onboarded(&conn)?;
            match name {
                "category" => commands::categories::handle(&conn, sub)?,
                "tx" => commands::transactions::handle(&conn, sub, today)?,
                "report" => commands::reports::handle(&conn, sub, today)?,
                "export" => commands::exporter::handle(&conn, sub)?,
                _ => {}
            }
        }
        None => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
