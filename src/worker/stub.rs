// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Scripted worker runners for handler tests. Not available in production
//! builds.

use std::sync::Mutex;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::errors::{WorkerError, WorkerResult};
use crate::traits::WorkerRunner;
use crate::worker::WorkerPayload;

/// One scripted invocation outcome.
pub enum ScriptedOutcome {
    /// Raw JSON text the bridge would return.
    Ok(String),
    /// A nonzero-exit failure from the bridge.
    Fail { exit_code: i32, stderr: String },
}

/// A worker runner that replays scripted outcomes and records every call.
///
/// Outcomes are consumed in order; running past the script fails the test
/// unless the runner was built with [`ScriptedWorkerRunner::always`], which
/// repeats a single output indefinitely.
pub struct ScriptedWorkerRunner {
    outcomes: Mutex<Vec<ScriptedOutcome>>,
    repeat: Option<String>,
    calls: Mutex<Vec<(String, WorkerPayload)>>,
}

impl ScriptedWorkerRunner {
    pub fn new(outcomes: Vec<ScriptedOutcome>) -> Self {
        let mut outcomes = outcomes;
        // Stored reversed so each call can pop the next outcome off the end.
        outcomes.reverse();
        Self {
            outcomes: Mutex::new(outcomes),
            repeat: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A runner that answers every call with the same raw JSON text.
    pub fn always(output: &str) -> Self {
        Self {
            outcomes: Mutex::new(Vec::new()),
            repeat: Some(output.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// The recorded `(use_case_id, payload)` pairs, in call order.
    pub fn calls(&self) -> Vec<(String, WorkerPayload)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl WorkerRunner for ScriptedWorkerRunner {
    async fn run(
        &self,
        use_case_id: &str,
        payload: &WorkerPayload,
        _cancel: &CancellationToken,
    ) -> WorkerResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((use_case_id.to_string(), payload.clone()));

        let outcome = self.outcomes.lock().unwrap().pop();
        match outcome {
            Some(ScriptedOutcome::Ok(output)) => Ok(output),
            Some(ScriptedOutcome::Fail { exit_code, stderr }) => {
                Err(WorkerError::ExecutionFailed { exit_code, stderr })
            }
            None => match &self.repeat {
                Some(output) => Ok(output.clone()),
                None => panic!("worker runner called more times than scripted"),
            },
        }
    }
}
