// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::envelope::{wrap_item_result, RequestEnvelope, UseCaseInput, UseCaseResult};
use crate::errors::UseCaseError;
use crate::observability::messages::usecase::{BatchItemCompleted, UseCaseCompleted, UseCaseStarted};
use crate::traits::{UseCaseHandler, WorkerRunner};
use crate::usecases::parse_worker_output;
use crate::worker::WorkerPayload;

const USECASE_TARGET: &str = "findcodes::usecases";

/// Batch inference over an ordered sequence of texts.
///
/// One worker invocation per item, issued strictly sequentially in item
/// order; the result array preserves input order one-to-one. A failure on
/// any item aborts the whole batch with no partial result — invocations
/// have unknown idempotence, so nothing is retried or collected past the
/// first failure.
pub struct FindCodesBatchJsonUseCase {
    runner: Arc<dyn WorkerRunner>,
}

impl FindCodesBatchJsonUseCase {
    pub fn new(runner: Arc<dyn WorkerRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl UseCaseHandler for FindCodesBatchJsonUseCase {
    fn use_case_id(&self) -> &'static str {
        "find-codes-batch-json"
    }

    async fn execute(
        &self,
        envelope: &RequestEnvelope,
        cancel: &CancellationToken,
    ) -> Result<UseCaseResult, UseCaseError> {
        let UseCaseInput::Batch { items } = &envelope.input else {
            return Err(UseCaseError::invalid_input(
                "batch mode requires an input with an 'items' sequence",
            ));
        };
        if items.is_empty() {
            return Err(UseCaseError::invalid_input(
                "batch mode requires items with at least one element",
            ));
        }

        let started = Instant::now();
        tracing::info!(
            target: USECASE_TARGET,
            "{}",
            UseCaseStarted { use_case_id: self.use_case_id() }
        );

        let mut results = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let payload = WorkerPayload::new(item.text.clone(), &envelope.options);
            let raw = self.runner.run(self.use_case_id(), &payload, cancel).await?;
            let result = parse_worker_output(&raw)?;
            results.push(wrap_item_result(
                item.id.as_deref(),
                item.name.as_deref(),
                result,
            ));

            tracing::debug!(
                target: USECASE_TARGET,
                "{}",
                BatchItemCompleted {
                    use_case_id: self.use_case_id(),
                    index,
                    total: items.len(),
                }
            );
        }

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
            Value::Array(results),
            "FindCodesBatchJsonUseCase",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    use crate::envelope::BatchItem;
    use crate::errors::WorkerError;
    use crate::worker::stub::{ScriptedOutcome, ScriptedWorkerRunner};

    fn batch_envelope(items: Vec<BatchItem>) -> RequestEnvelope {
        RequestEnvelope {
            use_case_id: "find-codes-batch-json".to_string(),
            input: UseCaseInput::Batch { items },
            options: Map::new(),
        }
    }

    fn item(id: &str, name: &str, text: &str) -> BatchItem {
        BatchItem {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn issues_one_invocation_per_item_in_input_order() {
        let runner = Arc::new(ScriptedWorkerRunner::new(vec![
            ScriptedOutcome::Ok(r#"{"codes":["A"]}"#.to_string()),
            ScriptedOutcome::Ok(r#"{"codes":["B"]}"#.to_string()),
        ]));
        let handler = FindCodesBatchJsonUseCase::new(runner.clone());
        let envelope = batch_envelope(vec![
            item("1", "First", "one"),
            item("2", "Second", "two"),
        ]);

        let result = handler
            .execute(&envelope, &CancellationToken::new())
            .await
            .unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].1.text, "one");
        assert_eq!(calls[1].1.text, "two");

        let payload = result.payload.as_array().unwrap();
        assert_eq!(payload.len(), 2);
        assert_eq!(payload[0]["id"], "1");
        assert_eq!(payload[0]["name"], "First");
        assert_eq!(payload[0]["result"], json!({"codes": ["A"]}));
        assert_eq!(payload[1]["id"], "2");
        assert_eq!(payload[1]["name"], "Second");
        assert_eq!(payload[1]["result"], json!({"codes": ["B"]}));
    }

    #[tokio::test]
    async fn empty_batch_is_rejected_before_any_invocation() {
        let runner = Arc::new(ScriptedWorkerRunner::new(vec![]));
        let handler = FindCodesBatchJsonUseCase::new(runner.clone());
        let envelope = batch_envelope(vec![]);

        let err = handler
            .execute(&envelope, &CancellationToken::new())
            .await
            .unwrap_err();

        assert!(matches!(err, UseCaseError::InvalidInput { .. }));
        assert_eq!(runner.call_count(), 0);
    }

    #[tokio::test]
    async fn single_text_input_is_rejected() {
        let runner = Arc::new(ScriptedWorkerRunner::new(vec![]));
        let handler = FindCodesBatchJsonUseCase::new(runner);
        let envelope = RequestEnvelope {
            use_case_id: "find-codes-batch-json".to_string(),
            input: UseCaseInput::Text {
                id: None,
                name: None,
                text: "abc".to_string(),
            },
            options: Map::new(),
        };

        let err = handler
            .execute(&envelope, &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, UseCaseError::InvalidInput { .. }));
    }

    #[tokio::test]
    async fn first_failure_aborts_the_whole_batch() {
        let runner = Arc::new(ScriptedWorkerRunner::new(vec![
            ScriptedOutcome::Ok("[]".to_string()),
            ScriptedOutcome::Fail {
                exit_code: 2,
                stderr: "boom".to_string(),
            },
        ]));
        let handler = FindCodesBatchJsonUseCase::new(runner.clone());
        let envelope = batch_envelope(vec![
            item("1", "a", "one"),
            item("2", "b", "two"),
            item("3", "c", "three"),
        ]);

        let err = handler
            .execute(&envelope, &CancellationToken::new())
            .await
            .unwrap_err();

        // The bridge failure propagates unchanged and the third item is
        // never attempted.
        match err {
            UseCaseError::Worker(WorkerError::ExecutionFailed { exit_code, stderr }) => {
                assert_eq!(exit_code, 2);
                assert_eq!(stderr, "boom");
            }
            other => panic!("expected propagated ExecutionFailed, got {other:?}"),
        }
        assert_eq!(runner.call_count(), 2);
    }
}
