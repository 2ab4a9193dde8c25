// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Use-case handler implementations.
//!
//! Each handler validates the input variant it requires, builds one or more
//! worker payloads, and assembles a result envelope from worker output.
//! Bridge failures propagate unchanged; the only error a handler raises
//! itself is `InvalidInput` for an envelope that violates its precondition.
//!
//! # Available use cases
//!
//! * `find-codes` — single text, one worker invocation
//! * `find-codes-batch-json` — ordered batch, one invocation per item,
//!   strictly sequential, aborts on the first failure
//! * `find-codes-csv` — stub pending replacement by the batch-JSON handler

pub mod find_codes;
pub mod find_codes_batch;
pub mod find_codes_csv;

pub use find_codes::FindCodesUseCase;
pub use find_codes_batch::FindCodesBatchJsonUseCase;
pub use find_codes_csv::FindCodesCsvUseCase;

use serde_json::Value;

use crate::config::consts::STDOUT_PREFIX_LIMIT;
use crate::errors::{UseCaseError, WorkerError};

/// Parses raw worker stdout into a JSON value.
///
/// The bridge already guarantees syntactic validity, so a failure here
/// means the bridge contract broke; it is reported as malformed output
/// rather than panicking.
pub(crate) fn parse_worker_output(raw: &str) -> Result<Value, UseCaseError> {
    serde_json::from_str(raw).map_err(|_| {
        UseCaseError::Worker(WorkerError::MalformedOutput {
            prefix: raw.chars().take(STDOUT_PREFIX_LIMIT).collect(),
        })
    })
}
