// Copyright (c) Fintrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Durable CRUD over the transaction ledger. Every mutating statement is
//! autocommitted by SQLite before the call returns.

use rusqlite::{Connection, params};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{Error, Result};
use crate::models::{Kind, Transaction};

/// Parses a raw amount string into a non-negative finite number.
///
/// Goes through `Decimal` so that `NaN`/`inf` spellings and other
/// non-numeric input are rejected up front; the value lands in the REAL
/// column as `f64`.
pub fn parse_amount(raw: &str) -> Result<f64> {
    let dec = raw
        .trim()
        .parse::<Decimal>()
        .map_err(|_| Error::InvalidInput(format!("amount '{}' is not a number", raw)))?;
    if dec.is_sign_negative() {
        return Err(Error::InvalidInput(format!(
            "amount '{}' must not be negative",
            raw
        )));
    }
    dec.to_f64()
        .ok_or_else(|| Error::InvalidInput(format!("amount '{}' is out of range", raw)))
}

/// Appends a new transaction and returns its assigned id.
///
/// Arguments are checked defensively even though the CLI validates first:
/// an empty category or date, or a malformed amount, is rejected before
/// any write occurs.
pub fn insert(
    conn: &Connection,
    kind: Kind,
    category: &str,
    amount: &str,
    date: &str,
) -> Result<i64> {
    if category.trim().is_empty() {
        return Err(Error::InvalidInput("category must not be empty".into()));
    }
    if date.trim().is_empty() {
        return Err(Error::InvalidInput("date must not be empty".into()));
    }
    let amount = parse_amount(amount)?;
    conn.execute(
        "INSERT INTO transactions(kind, category, amount, date) VALUES (?1, ?2, ?3, ?4)",
        params![kind, category, amount, date],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Every transaction, newest date first; rows sharing a date come back
/// newest insert first.
pub fn list_all(conn: &Connection) -> Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(
        "SELECT id, kind, category, amount, date FROM transactions ORDER BY date DESC, id DESC",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok(Transaction {
            id: r.get(0)?,
            kind: r.get(1)?,
            category: r.get(2)?,
            amount: r.get(3)?,
            date: r.get(4)?,
        })
    })?;
    let mut data = Vec::new();
    for row in rows {
        data.push(row?);
    }
    Ok(data)
}

/// Removes the transaction with the given id.
pub fn delete(conn: &Connection, id: i64) -> Result<()> {
    let affected = conn.execute("DELETE FROM transactions WHERE id=?1", params![id])?;
    if affected == 0 {
        return Err(Error::NotFound(id));
    }
    Ok(())
}
