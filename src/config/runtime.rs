// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::config::{Config, WorkerSettings};
use crate::dispatch::UseCaseRegistry;
use crate::errors::WorkerError;
use crate::traits::WorkerRunner;
use crate::usecases::{FindCodesBatchJsonUseCase, FindCodesCsvUseCase, FindCodesUseCase};
use crate::worker::ProcessWorkerRunner;

/// Builds the process-backed worker runner from settings.
pub fn build_runner(settings: &WorkerSettings) -> Result<Arc<dyn WorkerRunner>, WorkerError> {
    let runner = ProcessWorkerRunner::new(settings.to_worker_config())?;
    Ok(Arc::new(runner))
}

/// Registers every supported use case against the given runner.
pub fn build_registry(runner: Arc<dyn WorkerRunner>) -> UseCaseRegistry {
    let mut registry = UseCaseRegistry::new();
    registry.insert(Arc::new(FindCodesUseCase::new(runner.clone())));
    registry.insert(Arc::new(FindCodesBatchJsonUseCase::new(runner.clone())));
    registry.insert(Arc::new(FindCodesCsvUseCase::new(runner)));
    registry
}

/// Builds the full dispatch runtime from configuration.
pub fn build_runtime(cfg: &Config) -> Result<UseCaseRegistry, WorkerError> {
    let runner = build_runner(&cfg.worker)?;
    Ok(build_registry(runner))
}
