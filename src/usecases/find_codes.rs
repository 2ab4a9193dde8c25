// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::envelope::{wrap_item_result, RequestEnvelope, UseCaseInput, UseCaseResult};
use crate::errors::UseCaseError;
use crate::observability::messages::usecase::{UseCaseCompleted, UseCaseStarted};
use crate::traits::{UseCaseHandler, WorkerRunner};
use crate::usecases::parse_worker_output;
use crate::worker::WorkerPayload;

/// Tracing target for handler operations.
const USECASE_TARGET: &str = "findcodes::usecases";

/// Single-text inference: one worker invocation per request.
///
/// Requires the input to carry a scalar `text`; the optional `id` and
/// `name` are echoed through unchanged in the result payload.
pub struct FindCodesUseCase {
    runner: Arc<dyn WorkerRunner>,
}

impl FindCodesUseCase {
    pub fn new(runner: Arc<dyn WorkerRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl UseCaseHandler for FindCodesUseCase {
    fn use_case_id(&self) -> &'static str {
        "find-codes"
    }

    async fn execute(
        &self,
        envelope: &RequestEnvelope,
        cancel: &CancellationToken,
    ) -> Result<UseCaseResult, UseCaseError> {
        let UseCaseInput::Text { id, name, text } = &envelope.input else {
            return Err(UseCaseError::invalid_input(
                "single-text mode requires an input with a 'text' field",
            ));
        };

        let started = Instant::now();
        tracing::info!(
            target: USECASE_TARGET,
            "{}",
            UseCaseStarted { use_case_id: self.use_case_id() }
        );

        let payload = WorkerPayload::new(text.clone(), &envelope.options);
        let raw = self.runner.run(self.use_case_id(), &payload, cancel).await?;
        let result = parse_worker_output(&raw)?;

        tracing::info!(
            target: USECASE_TARGET,
            "{}",
            UseCaseCompleted {
                use_case_id: self.use_case_id(),
                duration: started.elapsed(),
            }
        );

        Ok(UseCaseResult::new(
            self.use_case_id(),
            wrap_item_result(id.as_deref(), name.as_deref(), result),
            "FindCodesUseCase",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    use crate::worker::stub::ScriptedWorkerRunner;

    fn text_envelope(id: Option<&str>, name: Option<&str>, text: &str) -> RequestEnvelope {
        RequestEnvelope {
            use_case_id: "find-codes".to_string(),
            input: UseCaseInput::Text {
                id: id.map(String::from),
                name: name.map(String::from),
                text: text.to_string(),
            },
            options: Map::new(),
        }
    }

    #[tokio::test]
    async fn issues_exactly_one_invocation_with_minimal_payload() {
        let runner = Arc::new(ScriptedWorkerRunner::always(r#"{"codes":["A1"]}"#));
        let handler = FindCodesUseCase::new(runner.clone());
        let envelope = text_envelope(Some("1"), Some("Test"), "abc");

        let result = handler
            .execute(&envelope, &CancellationToken::new())
            .await
            .unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "find-codes");
        assert_eq!(calls[0].1.to_wire(), r#"{"text":"abc"}"#);

        assert_eq!(result.use_case_id, "find-codes");
        assert_eq!(result.payload["id"], "1");
        assert_eq!(result.payload["name"], "Test");
        assert_eq!(result.payload["result"], json!({"codes": ["A1"]}));
        assert_eq!(result.metadata["handler"], "FindCodesUseCase");
    }

    #[tokio::test]
    async fn forwards_envelope_options_to_the_worker() {
        let runner = Arc::new(ScriptedWorkerRunner::always("[]"));
        let handler = FindCodesUseCase::new(runner.clone());

        let mut envelope = text_envelope(None, None, "abc");
        envelope.options.insert("model".to_string(), json!("large"));

        handler
            .execute(&envelope, &CancellationToken::new())
            .await
            .unwrap();

        let calls = runner.calls();
        let options = calls[0].1.options.as_ref().unwrap();
        assert_eq!(options.get("model"), Some(&json!("large")));
    }

    #[tokio::test]
    async fn missing_id_and_name_are_echoed_as_null() {
        let runner = Arc::new(ScriptedWorkerRunner::always("[]"));
        let handler = FindCodesUseCase::new(runner);
        let envelope = text_envelope(None, None, "");

        let result = handler
            .execute(&envelope, &CancellationToken::new())
            .await
            .unwrap();

        assert!(result.payload["id"].is_null());
        assert!(result.payload["name"].is_null());
    }

    #[tokio::test]
    async fn batch_input_is_rejected_without_an_invocation() {
        let runner = Arc::new(ScriptedWorkerRunner::always("[]"));
        let handler = FindCodesUseCase::new(runner.clone());
        let envelope = RequestEnvelope {
            use_case_id: "find-codes".to_string(),
            input: UseCaseInput::Batch { items: vec![] },
            options: Map::new(),
        };

        let err = handler
            .execute(&envelope, &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, UseCaseError::InvalidInput { .. }));
        assert_eq!(runner.call_count(), 0);
    }
}
