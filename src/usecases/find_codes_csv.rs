// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Map;
use tokio_util::sync::CancellationToken;

use crate::envelope::{wrap_item_result, RequestEnvelope, UseCaseInput, UseCaseResult};
use crate::errors::UseCaseError;
use crate::traits::{UseCaseHandler, WorkerRunner};
use crate::usecases::parse_worker_output;
use crate::worker::WorkerPayload;

/// CSV ingestion stub.
///
/// Accepts the single-text input shape and returns a well-formed envelope;
/// the output contract is deliberately undefined beyond that.
// TODO deprecate once the csv endpoint is adjusted to use FindCodesBatchJsonUseCase
pub struct FindCodesCsvUseCase {
    runner: Arc<dyn WorkerRunner>,
}

impl FindCodesCsvUseCase {
    pub fn new(runner: Arc<dyn WorkerRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl UseCaseHandler for FindCodesCsvUseCase {
    fn use_case_id(&self) -> &'static str {
        "find-codes-csv"
    }

    async fn execute(
        &self,
        envelope: &RequestEnvelope,
        cancel: &CancellationToken,
    ) -> Result<UseCaseResult, UseCaseError> {
        let UseCaseInput::Text { id, name, .. } = &envelope.input else {
            return Err(UseCaseError::invalid_input(
                "csv mode requires an input with a 'text' field",
            ));
        };

        let payload = WorkerPayload::new(String::new(), &Map::new());
        let raw = self.runner.run(self.use_case_id(), &payload, cancel).await?;
        let result = parse_worker_output(&raw)?;

        Ok(UseCaseResult::new(
            self.use_case_id(),
            wrap_item_result(id.as_deref(), name.as_deref(), result),
            "FindCodesCsvUseCase",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::worker::stub::ScriptedWorkerRunner;

    #[tokio::test]
    async fn returns_a_well_formed_envelope() {
        let runner = Arc::new(ScriptedWorkerRunner::always("[]"));
        let handler = FindCodesCsvUseCase::new(runner.clone());
        let envelope = RequestEnvelope {
            use_case_id: "find-codes-csv".to_string(),
            input: UseCaseInput::Text {
                id: Some("1".to_string()),
                name: None,
                text: "ignored for now".to_string(),
            },
            options: Map::new(),
        };

        let result = handler
            .execute(&envelope, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(result.use_case_id, "find-codes-csv");
        assert_eq!(result.payload["id"], "1");
        assert_eq!(result.metadata["handler"], "FindCodesCsvUseCase");

        // The stub invokes the worker with an empty payload.
        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1.to_wire(), r#"{"text":""}"#);
    }
}
