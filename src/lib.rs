// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

// Worker termination relies on Unix process groups (killpg); no job-object
// equivalent is wired up for other platforms.
#[cfg(not(unix))]
compile_error!("findcodes supervises workers via Unix process groups and does not build on non-Unix targets");

pub mod config;         // config loading + runtime wiring
pub mod dispatch;       // use-case registry and resolution
pub mod envelope;       // request/result envelopes
pub mod errors;         // error handling
pub mod observability;
pub mod traits;         // unified abstractions
pub mod usecases;       // use-case handlers
pub mod worker;         // worker process bridge
