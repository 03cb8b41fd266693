// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command-line error types.

use thiserror::Error;

/// Errors in arguments or configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum CliError {
    #[error("Missing input file")]
    MissingInput,

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Option {0} requires a value")]
    MissingValue(String),

    #[error("Invalid value for {option}: {value}")]
    InvalidValue { option: String, value: String },
}
