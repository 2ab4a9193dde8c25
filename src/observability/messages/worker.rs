// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for worker process lifecycle events.

use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Worker process spawned.
///
/// # Log Level
/// `debug!` - Per-invocation operational detail
pub struct WorkerSpawned<'a> {
    pub use_case_id: &'a str,
    pub program: &'a str,
}

impl Display for WorkerSpawned<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Worker spawned for '{}': program={}",
            self.use_case_id, self.program
        )
    }
}

/// Worker process exited and both streams are drained.
///
/// # Log Level
/// `debug!` - Per-invocation operational detail
pub struct WorkerExited<'a> {
    pub use_case_id: &'a str,
    pub exit_code: i32,
    pub duration: Duration,
}

impl Display for WorkerExited<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Worker for '{}' exited: code={}, duration={:?}",
            self.use_case_id, self.exit_code, self.duration
        )
    }
}

/// Worker process (and its process group) forcibly terminated.
///
/// # Log Level
/// `warn!` on deadline expiry, `debug!` on caller cancellation
pub struct WorkerKilled<'a> {
    pub use_case_id: &'a str,
    pub reason: &'a str,
}

impl Display for WorkerKilled<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Worker for '{}' killed: {}",
            self.use_case_id, self.reason
        )
    }
}
