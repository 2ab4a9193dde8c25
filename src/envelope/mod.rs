// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Request and result envelopes for use-case execution.
//!
//! The envelope is the contract between the excluded transport layer and the
//! dispatch core: a use-case identifier, a typed input (single text or an
//! ordered batch), and a free-form options map that is forwarded to the
//! worker untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A structured request handed to the dispatch layer.
///
/// # Example
/// ```
/// use findcodes::envelope::{RequestEnvelope, UseCaseInput};
///
/// let envelope: RequestEnvelope = serde_json::from_str(
///     r#"{"useCaseId":"find-codes","input":{"id":"1","name":"Test","text":"abc"}}"#,
/// ).unwrap();
/// assert_eq!(envelope.use_case_id, "find-codes");
/// assert!(matches!(envelope.input, UseCaseInput::Text { .. }));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    pub use_case_id: String,
    pub input: UseCaseInput,
    #[serde(default)]
    pub options: Map<String, Value>,
}

/// Input variants a handler may receive.
///
/// Deserialization is untagged: an object carrying `items` is a batch,
/// anything else must carry a scalar `text`. Batch non-emptiness is a
/// handler precondition, not a serde constraint, so the handler can fail
/// with a proper `InvalidInput` instead of a parse error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UseCaseInput {
    /// Ordered sequence of texts for batch execution.
    Batch { items: Vec<BatchItem> },
    /// A single text with optional caller-supplied id and name.
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        text: String,
    },
}

/// One element of a batch input. Order is significant and preserved
/// one-to-one in the result payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub text: String,
}

/// The result envelope a handler returns to the caller.
///
/// `payload` is opaque JSON: a single `{id, name, result}` object for the
/// single-text use case, an ordered array of them for batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCaseResult {
    pub use_case_id: String,
    pub payload: Value,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl UseCaseResult {
    /// Builds a result with a single metadata entry naming the handler.
    pub fn new(use_case_id: &str, payload: Value, handler: &str) -> Self {
        let mut metadata = Map::new();
        metadata.insert("handler".to_string(), Value::String(handler.to_string()));
        Self {
            use_case_id: use_case_id.to_string(),
            payload,
            metadata,
        }
    }
}

/// Wraps a parsed worker output under `{id, name, result}`, echoing the
/// caller-supplied id and name through unchanged.
pub fn wrap_item_result(id: Option<&str>, name: Option<&str>, result: Value) -> Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "result": result,
    })
}
