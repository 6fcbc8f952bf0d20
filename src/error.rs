// Copyright (c) Fintrack Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub type Result<T> = std::result::Result<T, Error>;

/// The errors that may occur in the ledger core.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The backing database could not be opened or created. Fatal to the
    /// calling operation, never retried.
    #[error("ledger storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Malformed insert arguments, rejected before any write occurs.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No transaction exists with the given id.
    #[error("no transaction with id {0}")]
    NotFound(i64),

    /// The budget limit is not a finite, non-negative number.
    #[error("invalid budget limit '{0}'")]
    InvalidLimit(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    Sql(#[from] rusqlite::Error),
}
