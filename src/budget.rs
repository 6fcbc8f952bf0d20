// Copyright (c) Fintrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Spending-limit check against total expenses, plus the persisted
//! default limit.

use rusqlite::{Connection, OptionalExtension, params};

use crate::error::{Error, Result};
use crate::reports;

/// Outcome of a budget check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetStatus {
    WithinLimit,
    /// Carries the current total expense, which strictly exceeds the limit.
    Exceeded(f64),
}

/// Compares total expenses against `limit`. A total equal to the limit is
/// within budget; only strict excess warns. Stateless: every qualifying
/// call re-raises the signal, with no one-time suppression.
pub fn check(conn: &Connection, limit: f64) -> Result<BudgetStatus> {
    if !limit.is_finite() || limit < 0.0 {
        return Err(Error::InvalidLimit(limit.to_string()));
    }
    let total = reports::total_expense(conn)?;
    if total > limit {
        Ok(BudgetStatus::Exceeded(total))
    } else {
        Ok(BudgetStatus::WithinLimit)
    }
}

/// Parses a raw limit string for [`check`].
pub fn parse_limit(raw: &str) -> Result<f64> {
    let limit = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::InvalidLimit(raw.to_string()))?;
    if !limit.is_finite() || limit < 0.0 {
        return Err(Error::InvalidLimit(raw.to_string()));
    }
    Ok(limit)
}

/// The stored default limit, if one has been set.
pub fn stored_limit(conn: &Connection) -> Result<Option<f64>> {
    let value: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key='budget_limit'",
            [],
            |r| r.get(0),
        )
        .optional()?;
    match value {
        Some(s) => Ok(Some(parse_limit(&s)?)),
        None => Ok(None),
    }
}

/// Stores `limit` as the default for future checks.
pub fn set_limit(conn: &Connection, limit: f64) -> Result<()> {
    if !limit.is_finite() || limit < 0.0 {
        return Err(Error::InvalidLimit(limit.to_string()));
    }
    conn.execute(
        "INSERT INTO settings(key, value) VALUES('budget_limit', ?1)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![limit.to_string()],
    )?;
    Ok(())
}
