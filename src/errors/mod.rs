// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod dispatch;
mod usecase;
mod worker;

pub use config::ConfigError;
pub use dispatch::DispatchError;
pub use usecase::UseCaseError;
pub use worker::{WorkerError, WorkerResult};
