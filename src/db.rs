// Copyright (c) Fintrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;

use crate::error::{Error, Result};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("dev.fintrack", "Fintrack", "fintrack"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2).ok_or_else(|| {
        Error::StorageUnavailable("could not determine platform-specific data dir".into())
    })?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).map_err(|e| {
        Error::StorageUnavailable(format!("failed to create {}: {}", data_dir.display(), e))
    })?;
    Ok(data_dir.join("fintrack.sqlite"))
}

/// Opens the ledger database, creating the schema on first use. One
/// connection serves the whole process; callers pass it by reference.
pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let conn = Connection::open(&path)
        .map_err(|e| Error::StorageUnavailable(format!("open DB at {}: {}", path.display(), e)))?;
    init_schema(&conn)?;
    Ok(conn)
}

/// Idempotent; safe to call on every startup.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS transactions(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        kind TEXT NOT NULL,
        category TEXT NOT NULL,
        amount REAL NOT NULL,
        date TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
    "#,
    )?;
    Ok(())
}
