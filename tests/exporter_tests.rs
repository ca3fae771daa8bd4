// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use moneyjar::models::{Transaction, TxType};
use moneyjar::{cli, commands::exporter, db, ledger, store};
use rusqlite::Connection;
use serde_json::json;
use tempfile::tempdir;

fn base_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    let mut cats = Vec::new();
    ledger::add_category(&mut cats, "Groceries", None).unwrap();
    let mut tx = Transaction::new("12.34", "Corner Shop", "2025-01-02", TxType::Expense).unwrap();
    tx.id = "t1".to_string();
    ledger::add_transaction(&mut cats, "Groceries", tx).unwrap();
    store::save_categories(&conn, &cats).unwrap();
    conn
}

fn export(conn: &Connection, format: &str, out: &str) {
    let matches = cli::build_cli().get_matches_from([
        "moneyjar",
        "export",
        "transactions",
        "--format",
        format,
        "--out",
        out,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(conn, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_transactions_as_pretty_json() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    export(&conn, "json", &out_path.to_string_lossy());

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert!(contents.contains("\n  {"));
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([{
            "id": "t1",
            "date": "2025-01-02",
            "category": "Groceries",
            "description": "Corner Shop",
            "type": "expense",
            "amount": "12.34"
        }])
    );
}

#[test]
fn export_transactions_as_csv() {
    let conn = base_conn();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    export(&conn, "csv", &out_path.to_string_lossy());

    let mut rdr = csv::Reader::from_path(&out_path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        ["id", "date", "category", "description", "type", "amount"]
    );
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][2], "Groceries");
    assert_eq!(&rows[0][5], "12.34");
}
