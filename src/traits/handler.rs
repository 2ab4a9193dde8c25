// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::envelope::{RequestEnvelope, UseCaseResult};
use crate::errors::UseCaseError;

/// A named, independently invocable operation the service offers.
///
/// Handlers are stateless beyond a shared reference to the worker bridge,
/// registered once at startup and shared immutably thereafter.
#[async_trait]
pub trait UseCaseHandler: Send + Sync {
    /// The identifier this handler is registered under.
    fn use_case_id(&self) -> &'static str;

    /// Validates the envelope's input shape, issues worker invocation(s),
    /// and assembles the result envelope.
    ///
    /// The cancellation token threads down to the process-kill step of each
    /// invocation.
    async fn execute(
        &self,
        envelope: &RequestEnvelope,
        cancel: &CancellationToken,
    ) -> Result<UseCaseResult, UseCaseError>;
}
