// Copyright (c) Fintrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("fintrack")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Record personal income and expense transactions, report on them, and export")
        .subcommand(Command::new("init").about("Create the ledger database if it does not exist"))
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .required(true)
                                .help("Income or Expense"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .required(true)
                                .help("YYYY-MM-DD"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .help("Budget limit to check after recording; overrides the stored limit"),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .help("Show at most this many rows"),
                        )
                        .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                        .arg(Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue)),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Summaries over the ledger")
                .subcommand(
                    Command::new("by-category")
                        .about("Expense totals per category")
                        .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                        .arg(Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue)),
                )
                .subcommand(
                    Command::new("by-kind")
                        .about("Income and expense totals")
                        .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                        .arg(Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue)),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Spending limit")
                .subcommand(
                    Command::new("set")
                        .about("Store the spending limit checked after each expense")
                        .arg(Arg::new("limit").long("limit").required(true)),
                )
                .subcommand(
                    Command::new("check")
                        .about("Warn when total expenses exceed the limit")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .help("One-off limit; defaults to the stored limit"),
                        ),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export the ledger to a file")
                .subcommand(
                    Command::new("transactions")
                        .about("Write all transactions to a CSV or JSON file")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv or json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
}
