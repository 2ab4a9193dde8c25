// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod handler;
pub mod runner;

pub use handler::UseCaseHandler;
pub use runner::WorkerRunner;
