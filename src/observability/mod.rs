// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Message types follow a struct-based pattern with `Display` trait
//! implementation to keep log wording in one place and out of the
//! operational code paths.
//!
//! Messages are organized by subsystem:
//! * `messages::usecase` - handler lifecycle events
//! * `messages::worker` - worker process lifecycle events

pub mod messages;

/// Initializes the global tracing subscriber.
///
/// Respects `RUST_LOG` when set, defaulting to `info`. Call once from the
/// binary entry point; a second call panics because the global subscriber
/// is already installed.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
