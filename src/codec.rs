//! Depth codec
//!
//! Serializes a price ladder to the single-column textual form used by the
//! `order_books` table, and back. Pure transform; ladder order is preserved
//! end to end.

use crate::error::{StoreError, StoreResult};
use crate::models::PriceLevel;

/// Encode a depth ladder for storage in one text column.
pub fn encode(depth: &[PriceLevel]) -> StoreResult<String> {
    serde_json::to_string(depth).map_err(StoreError::MalformedEncoding)
}

/// Decode a stored depth ladder.
///
/// The whole input must be a valid encoding: syntax errors, wrong field
/// types, truncation, and trailing garbage all fail with
/// [`StoreError::MalformedEncoding`]. A partially populated ladder is never
/// returned.
pub fn decode(encoded: &str) -> StoreResult<Vec<PriceLevel>> {
    serde_json::from_str(encoded).map_err(StoreError::MalformedEncoding)
}
