// Copyright (c) Fintrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::cmp::Ordering;

use anyhow::Result;
use rusqlite::Connection;

use crate::reports;
use crate::utils::{fmt_amount, maybe_print_json, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("by-category", sub)) => by_category(conn, sub)?,
        Some(("by-kind", sub)) => by_kind(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn by_category(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let totals = reports::expense_totals_by_category(conn)?;
    let mut items: Vec<_> = totals.into_iter().collect();
    items.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    let data: Vec<Vec<String>> = items
        .into_iter()
        .map(|(category, spent)| vec![category, fmt_amount(spent)])
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Category", "Spent"], data));
    }
    Ok(())
}

fn by_kind(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let totals = reports::totals_by_kind(conn)?;
    let mut items: Vec<_> = totals.into_iter().collect();
    items.sort_by_key(|(kind, _)| kind.as_str());
    let data: Vec<Vec<String>> = items
        .into_iter()
        .map(|(kind, total)| vec![kind.to_string(), fmt_amount(total)])
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Kind", "Total"], data));
    }
    Ok(())
}
