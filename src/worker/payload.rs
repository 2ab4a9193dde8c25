// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Translation between request envelopes and the worker's minimal input
//! contract.
//!
//! The worker accepts exactly one JSON object on stdin: `{"text": string}`
//! plus an optional `"options"` object. Identifiers are deliberately
//! stripped; the worker is single-purpose per invocation and stateless.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The minimal payload written to a worker's stdin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerPayload {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Map<String, Value>>,
}

impl WorkerPayload {
    /// Builds a payload from a text and the envelope's options map.
    ///
    /// An empty options map is dropped entirely so the wire form carries no
    /// `options` key when the caller supplied none.
    pub fn new(text: impl Into<String>, options: &Map<String, Value>) -> Self {
        Self {
            text: text.into(),
            options: if options.is_empty() {
                None
            } else {
                Some(options.clone())
            },
        }
    }

    /// Extracts a payload from an already-serialized request envelope.
    ///
    /// The in-crate handlers build payloads with [`WorkerPayload::new`] from
    /// typed envelopes; this entry point serves embedders that hold the
    /// envelope only as a JSON document.
    /// Extraction never fails on shape mismatch; it degrades by
    /// stringification, trading precision for robustness at the process
    /// boundary:
    ///
    /// - `input` is a string: used verbatim,
    /// - `input` is an object with a string `text`: that string,
    /// - `input` is an object whose `text` is not a string: the field's raw
    ///   JSON form,
    /// - anything else: the whole `input` value stringified.
    ///
    /// `options` is kept only when present and a JSON object; any other
    /// shape is dropped, not an error.
    pub fn from_envelope_value(envelope: &Value) -> Self {
        let text = match envelope.get("input") {
            Some(Value::String(text)) => text.clone(),
            Some(input @ Value::Object(fields)) => match fields.get("text") {
                Some(Value::String(text)) => text.clone(),
                Some(other) => other.to_string(),
                None => input.to_string(),
            },
            Some(other) => other.to_string(),
            None => String::new(),
        };

        let options = match envelope.get("options") {
            Some(Value::Object(map)) => Some(map.clone()),
            _ => None,
        };

        Self { text, options }
    }

    /// Serializes to the wire form: `{"text":...}` alone when no options
    /// are present, else `{"text":...,"options":{...}}`. Options are
    /// forwarded as a JSON object, never re-encoded as a string.
    pub fn to_wire(&self) -> String {
        let mut object = Map::new();
        object.insert("text".to_string(), Value::String(self.text.clone()));
        if let Some(options) = &self.options {
            object.insert("options".to_string(), Value::Object(options.clone()));
        }
        Value::Object(object).to_string()
    }
}
