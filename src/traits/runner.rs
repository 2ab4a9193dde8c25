// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::errors::WorkerError;
use crate::worker::WorkerPayload;

/// The seam between use-case handlers and the worker process bridge.
///
/// One call is one spawn-to-exit worker lifecycle servicing exactly one
/// payload; invocations are never pooled or reused. Handlers hold the
/// runner as `Arc<dyn WorkerRunner>` so tests can substitute a scripted
/// double for the real process bridge.
#[async_trait]
pub trait WorkerRunner: Send + Sync {
    /// Runs one worker invocation and returns its raw stdout.
    ///
    /// The returned string is guaranteed to be a single syntactically valid
    /// JSON value (whitespace-trimmed); its shape is opaque to the bridge
    /// and is parsed by the calling handler. `use_case_id` is carried for
    /// diagnostics only; the worker itself is single-purpose and stateless.
    async fn run(
        &self,
        use_case_id: &str,
        payload: &WorkerPayload,
        cancel: &CancellationToken,
    ) -> Result<String, WorkerError>;
}
