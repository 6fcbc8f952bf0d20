// Copyright (c) Fintrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::models::Kind;
use fintrack::{cli, commands::exporter, db, store};
use rusqlite::Connection;
use serde_json::json;
use tempfile::tempdir;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn run_export(conn: &Connection, format: &str, out: &str) -> anyhow::Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "fintrack",
        "export",
        "transactions",
        "--format",
        format,
        "--out",
        out,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(conn, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn csv_export_writes_header_and_rows_in_list_order() {
    let conn = setup();
    store::insert(&conn, Kind::Expense, "Food", "50.00", "2024-01-01").unwrap();
    store::insert(&conn, Kind::Income, "Salary", "1000.00", "2024-01-02").unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("report.csv");
    let out_str = out_path.to_string_lossy().to_string();
    run_export(&conn, "csv", &out_str).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        [
            "id,kind,category,amount,date",
            "2,Income,Salary,1000.00,2024-01-02",
            "1,Expense,Food,50.00,2024-01-01",
        ]
    );
}

#[test]
fn json_export_round_trips() {
    let conn = setup();
    store::insert(&conn, Kind::Expense, "Food", "12.50", "2024-01-02").unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("report.json");
    let out_str = out_path.to_string_lossy().to_string();
    run_export(&conn, "json", &out_str).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "id": 1,
                "kind": "Expense",
                "category": "Food",
                "amount": 12.5,
                "date": "2024-01-02"
            }
        ])
    );
}

#[test]
fn unknown_format_is_rejected_without_writing() {
    let conn = setup();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("report.xml");
    let out_str = out_path.to_string_lossy().to_string();
    assert!(run_export(&conn, "xml", &out_str).is_err());
    assert!(!out_path.exists());
}
