// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types for the worker process bridge.
//!
//! Every variant corresponds to one distinct failure point in the worker
//! lifecycle so callers can tell apart "could not start", "took too long",
//! "caller gave up", and "worker broke its output contract". All errors
//! implement `std::error::Error` via the `thiserror` crate.

use std::time::Duration;
use thiserror::Error;

use crate::config::consts::STDOUT_PREFIX_LIMIT;

/// Failures raised by the worker process bridge.
///
/// Variants are ordered roughly by lifecycle stage: environment resolution,
/// spawn, stream I/O, supervision, and finally output classification.
#[derive(Error, Debug)]
pub enum WorkerError {
    /// Worker working directory could not be resolved.
    ///
    /// Raised when no explicit directory is configured and the bounded
    /// upward search found no directory containing both the `aiparser` and
    /// `backend` markers.
    #[error("could not locate worker root (expected 'aiparser' and 'backend' directories); searched from {searched}")]
    EnvironmentNotFound { searched: String },

    /// The worker executable failed to start.
    ///
    /// Distinct from every post-spawn failure: the OS never created the
    /// process (missing executable, permissions, bad working directory).
    #[error("failed to start worker '{program}': {source}. Ensure the interpreter is installed and on PATH")]
    LaunchFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Stream I/O against a running worker failed.
    #[error("worker I/O failed while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The worker exceeded its deadline and was killed.
    #[error("worker timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    /// The caller withdrew the request; the worker was killed.
    ///
    /// Not a worker fault. Deliberately distinct from [`WorkerError::Timeout`]
    /// so callers can tell "I gave up" from "it was slow".
    #[error("worker invocation cancelled by caller")]
    Cancelled,

    /// The worker exited with a nonzero status.
    #[error("worker failed (exit {exit_code}): {stderr}")]
    ExecutionFailed { exit_code: i32, stderr: String },

    /// The worker exited cleanly but wrote nothing usable to stdout.
    #[error("worker returned empty stdout. STDERR: {stderr}")]
    EmptyOutput { stderr: String },

    /// The worker wrote stdout that is not a single JSON value.
    ///
    /// Carries at most [`STDOUT_PREFIX_LIMIT`](crate::config::consts::STDOUT_PREFIX_LIMIT)
    /// characters of the offending output.
    #[error("worker returned non-JSON stdout. First {} chars: {prefix}", STDOUT_PREFIX_LIMIT)]
    MalformedOutput { prefix: String },
}

/// Result type alias for bridge operations.
pub type WorkerResult<T> = Result<T, WorkerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_output_message_tracks_the_prefix_limit() {
        let err = WorkerError::MalformedOutput {
            prefix: "oops".to_string(),
        };
        assert_eq!(
            err.to_string(),
            format!("worker returned non-JSON stdout. First {STDOUT_PREFIX_LIMIT} chars: oops")
        );
    }
}
