// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors that can occur while resolving a use-case identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The identifier matched no registered handler and no default handler
    /// is registered.
    #[error("unknown use_case_id '{use_case_id}' and no default_text handler registered")]
    UnknownUseCase { use_case_id: String },
}
