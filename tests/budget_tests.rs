// Copyright (c) Fintrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::budget::{self, BudgetStatus};
use fintrack::error::Error;
use fintrack::models::Kind;
use fintrack::{db, store};
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

#[test]
fn exceeded_only_on_strict_excess() {
    let conn = setup();
    store::insert(&conn, Kind::Expense, "Food", "50.00", "2024-01-01").unwrap();
    store::insert(&conn, Kind::Income, "Salary", "1000.00", "2024-01-02").unwrap();

    assert_eq!(
        budget::check(&conn, 40.0).unwrap(),
        BudgetStatus::Exceeded(50.0)
    );
    // Equal to the limit is not exceeded.
    assert_eq!(budget::check(&conn, 50.0).unwrap(), BudgetStatus::WithinLimit);
    assert_eq!(budget::check(&conn, 60.0).unwrap(), BudgetStatus::WithinLimit);
}

#[test]
fn income_does_not_count_against_the_limit() {
    let conn = setup();
    store::insert(&conn, Kind::Income, "Salary", "1000", "2024-01-01").unwrap();
    assert_eq!(budget::check(&conn, 0.0).unwrap(), BudgetStatus::WithinLimit);
}

#[test]
fn invalid_limits_are_rejected() {
    let conn = setup();
    assert!(matches!(
        budget::check(&conn, -1.0),
        Err(Error::InvalidLimit(_))
    ));
    assert!(matches!(
        budget::check(&conn, f64::NAN),
        Err(Error::InvalidLimit(_))
    ));
    assert!(matches!(
        budget::check(&conn, f64::INFINITY),
        Err(Error::InvalidLimit(_))
    ));
    assert!(matches!(
        budget::parse_limit("abc"),
        Err(Error::InvalidLimit(_))
    ));
    assert!(matches!(
        budget::parse_limit("-10"),
        Err(Error::InvalidLimit(_))
    ));
}

#[test]
fn check_refires_on_every_call_once_crossed() {
    let conn = setup();
    store::insert(&conn, Kind::Expense, "Food", "100", "2024-01-01").unwrap();
    for _ in 0..3 {
        assert_eq!(
            budget::check(&conn, 40.0).unwrap(),
            BudgetStatus::Exceeded(100.0)
        );
    }
}

#[test]
fn stored_limit_round_trips() {
    let conn = setup();
    assert_eq!(budget::stored_limit(&conn).unwrap(), None);
    budget::set_limit(&conn, 250.0).unwrap();
    assert_eq!(budget::stored_limit(&conn).unwrap(), Some(250.0));
    budget::set_limit(&conn, 300.0).unwrap();
    assert_eq!(budget::stored_limit(&conn).unwrap(), Some(300.0));
}

#[test]
fn set_limit_rejects_invalid_values() {
    let conn = setup();
    assert!(matches!(
        budget::set_limit(&conn, -5.0),
        Err(Error::InvalidLimit(_))
    ));
    assert_eq!(budget::stored_limit(&conn).unwrap(), None);
}
