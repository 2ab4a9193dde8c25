// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The worker process bridge.
//!
//! Use-case handlers delegate the actual computation to an out-of-process
//! worker speaking a one-shot JSON-over-stdio protocol: exactly one JSON
//! object in on stdin, exactly one JSON value out on stdout, diagnostics on
//! stderr, exit code 0 on success. This module owns the full invocation
//! lifecycle — spawn, feed, concurrent drain, deadline, cancellation,
//! process-tree kill, and outcome classification — plus the translation
//! from request envelopes to the worker's minimal payload.

mod payload;
mod runner;
mod workdir;

#[cfg(test)]
pub mod stub;

pub use payload::WorkerPayload;
pub use runner::{ProcessWorkerRunner, WorkerConfig};
pub use workdir::discover_worker_root;
