// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::WorkerError;

/// Errors surfaced by use-case handlers.
///
/// Handlers raise [`UseCaseError::InvalidInput`] when the envelope shape
/// violates their precondition; anything the bridge raises passes through
/// unchanged via the transparent variant. Handlers never reinterpret or
/// reclassify bridge failures.
#[derive(Error, Debug)]
pub enum UseCaseError {
    /// The request input does not match the shape the handler requires.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A failure from the worker process bridge, propagated as-is.
    #[error(transparent)]
    Worker(#[from] WorkerError),
}

impl UseCaseError {
    /// Shorthand for an [`UseCaseError::InvalidInput`] with a formatted reason.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
