// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Use-case registry and resolution.
//!
//! The registry is built once at startup and shared immutably thereafter;
//! resolution is a pure lookup with no side effects.

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::DispatchError;
use crate::traits::UseCaseHandler;

/// Identifier of the optional fallback handler. When a handler is
/// registered under this id, unknown identifiers resolve to it instead of
/// failing — never to an arbitrary handler.
pub const DEFAULT_USE_CASE_ID: &str = "default_text";

/// Newtype wrapper mapping use-case identifiers to handler instances.
///
/// Keys are stored lowercased; resolution is case-insensitive.
#[derive(Clone, Default)]
pub struct UseCaseRegistry(HashMap<String, Arc<dyn UseCaseHandler>>);

impl UseCaseRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Register a handler under its own identifier
    pub fn insert(&mut self, handler: Arc<dyn UseCaseHandler>) {
        self.0.insert(handler.use_case_id().to_lowercase(), handler);
    }

    /// Resolve a handler by identifier, case-insensitively.
    ///
    /// A blank or unregistered identifier falls back to the handler
    /// registered under [`DEFAULT_USE_CASE_ID`] if one exists, otherwise
    /// fails with [`DispatchError::UnknownUseCase`] naming the offending
    /// identifier.
    pub fn resolve(&self, use_case_id: &str) -> Result<&Arc<dyn UseCaseHandler>, DispatchError> {
        let key = use_case_id.trim().to_lowercase();
        if !key.is_empty() {
            if let Some(handler) = self.0.get(&key) {
                return Ok(handler);
            }
        }

        if let Some(fallback) = self.0.get(DEFAULT_USE_CASE_ID) {
            return Ok(fallback);
        }

        Err(DispatchError::UnknownUseCase {
            use_case_id: use_case_id.to_string(),
        })
    }

    /// Check if a handler is registered for an identifier
    pub fn contains(&self, use_case_id: &str) -> bool {
        self.0.contains_key(&use_case_id.trim().to_lowercase())
    }

    /// Get all registered identifiers
    pub fn ids(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for UseCaseRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UseCaseRegistry")
            .field("handler_count", &self.0.len())
            .field("use_case_ids", &self.0.keys().collect::<Vec<_>>())
            .finish()
    }
}
