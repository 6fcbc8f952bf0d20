// Copyright (c) Fintrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::budget::{self, BudgetStatus};
use crate::models::Kind;
use crate::store;
use crate::utils::{fmt_amount, maybe_print_json, parse_date, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let kind: Kind = sub.get_one::<String>("kind").unwrap().parse()?;
    let category = sub.get_one::<String>("category").unwrap();
    let amount = sub.get_one::<String>("amount").unwrap();
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;

    let id = store::insert(conn, kind, category, amount, &date.to_string())?;
    println!(
        "Recorded {} '{}' of {} on {} (id: {})",
        kind, category, amount, date, id
    );

    // Re-check after every insert; repeat warnings are intentional.
    let limit = match sub.get_one::<String>("limit") {
        Some(raw) => Some(budget::parse_limit(raw)?),
        None => budget::stored_limit(conn)?,
    };
    if let Some(limit) = limit {
        if let BudgetStatus::Exceeded(total) = budget::check(conn, limit)? {
            eprintln!(
                "WARNING: spending limit exceeded! Total expenses: {}",
                fmt_amount(total)
            );
        }
    }
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut data = store::list_all(conn)?;
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.kind.to_string(),
                    t.category.clone(),
                    fmt_amount(t.amount),
                    t.date.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Kind", "Category", "Amount", "Date"], rows)
        );
    }
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    store::delete(conn, id)?;
    println!("Deleted transaction {}", id);
    Ok(())
}
