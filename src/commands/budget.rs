// Copyright (c) Fintrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use rusqlite::Connection;

use crate::budget::{self, BudgetStatus};
use crate::utils::fmt_amount;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(conn, sub)?,
        Some(("check", sub)) => check(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let limit = budget::parse_limit(sub.get_one::<String>("limit").unwrap())?;
    budget::set_limit(conn, limit)?;
    println!("Budget limit set to {}", fmt_amount(limit));
    Ok(())
}

fn check(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let limit = match sub.get_one::<String>("limit") {
        Some(raw) => budget::parse_limit(raw)?,
        None => match budget::stored_limit(conn)? {
            Some(limit) => limit,
            None => bail!("no budget limit set; pass --limit or run 'fintrack budget set'"),
        },
    };
    match budget::check(conn, limit)? {
        BudgetStatus::Exceeded(total) => {
            eprintln!(
                "WARNING: spending limit exceeded! Total expenses: {} (limit {})",
                fmt_amount(total),
                fmt_amount(limit)
            );
        }
        BudgetStatus::WithinLimit => {
            println!("Total expenses within limit {}", fmt_amount(limit));
        }
    }
    Ok(())
}
