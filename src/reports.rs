// Copyright (c) Fintrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Read-only summaries over the current ledger state. Each query
//! recomputes from the full table on every call; nothing is cached.

use std::collections::HashMap;

use rusqlite::Connection;

use crate::error::Result;
use crate::models::Kind;

/// Summed expense amounts per category. Categories with no expense rows
/// are absent. Entry order is unspecified.
pub fn expense_totals_by_category(conn: &Connection) -> Result<HashMap<String, f64>> {
    let mut stmt = conn.prepare(
        "SELECT category, SUM(amount) FROM transactions WHERE kind='Expense' GROUP BY category",
    )?;
    let rows = stmt.query_map([], |r| Ok((r.get::<_, String>(0)?, r.get::<_, f64>(1)?)))?;
    let mut totals = HashMap::new();
    for row in rows {
        let (category, total) = row?;
        totals.insert(category, total);
    }
    Ok(totals)
}

/// Summed amounts per kind; kinds with no transactions are omitted.
pub fn totals_by_kind(conn: &Connection) -> Result<HashMap<Kind, f64>> {
    let mut stmt = conn.prepare("SELECT kind, SUM(amount) FROM transactions GROUP BY kind")?;
    let rows = stmt.query_map([], |r| Ok((r.get::<_, Kind>(0)?, r.get::<_, f64>(1)?)))?;
    let mut totals = HashMap::new();
    for row in rows {
        let (kind, total) = row?;
        totals.insert(kind, total);
    }
    Ok(totals)
}

/// Sum of all expense amounts; zero when no expense rows exist.
pub fn total_expense(conn: &Connection) -> Result<f64> {
    let total = conn.query_row(
        "SELECT IFNULL(SUM(amount), 0) FROM transactions WHERE kind='Expense'",
        [],
        |r| r.get(0),
    )?;
    Ok(total)
}
