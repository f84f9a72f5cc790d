//! Request handlers
//!
//! Translate HTTP-shaped input into store calls and store results back into
//! HTTP-shaped output. Validation happens here, before any store access;
//! error-to-status mapping lives on [`crate::error::StoreError`].

pub mod orderbook;
pub mod orders;

use crate::error::{StoreError, StoreResult};

/// Require a non-empty query parameter.
fn require_param(value: Option<String>, name: &str) -> StoreResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(StoreError::Validation(format!(
            "missing query parameter: {name}"
        ))),
    }
}
