// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for use-case handler lifecycle events.

use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Use-case execution started.
///
/// # Log Level
/// `info!` - Important operational event
pub struct UseCaseStarted<'a> {
    pub use_case_id: &'a str,
}

impl Display for UseCaseStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Use case '{}' started", self.use_case_id)
    }
}

/// Use-case execution completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
pub struct UseCaseCompleted<'a> {
    pub use_case_id: &'a str,
    pub duration: Duration,
}

impl Display for UseCaseCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Use case '{}' completed: duration={:?}",
            self.use_case_id, self.duration
        )
    }
}

/// One batch item finished.
///
/// # Log Level
/// `debug!` - Per-item progress detail
pub struct BatchItemCompleted<'a> {
    pub use_case_id: &'a str,
    pub index: usize,
    pub total: usize,
}

impl Display for BatchItemCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Use case '{}' batch item {}/{} completed",
            self.use_case_id,
            self.index + 1,
            self.total
        )
    }
}
