//! Data model and wire types
//!
//! Prices and amounts are decimals serialized as plain JSON numbers, so a
//! stored ladder reads back exactly as it was submitted.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One price ladder level of an order book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLevel {
    /// Level price
    pub price: Decimal,
    /// Quantity available at this price
    pub amount: Decimal,
}

/// One stored depth observation for an `(exchange, pair)` key
///
/// Snapshots are append-only: each write creates a new row and reads return
/// the most recently written one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderBookSnapshot {
    /// Exchange the depth was observed on
    pub exchange_name: String,
    /// Trading pair, e.g. `BTCUSD`
    pub pair: String,
    /// Price ladder in submission order
    pub depth: Vec<PriceLevel>,
    /// Write time, assigned by the store
    pub created_at: DateTime<Utc>,
}

/// One client order action recorded for history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEvent {
    /// Store-assigned identifier, opaque to clients
    pub order_id: i64,
    /// Client the order belongs to
    pub client_id: i64,
    /// Raw order payload as submitted
    pub order: String,
    /// Write time, assigned by the store
    pub created_at: DateTime<Utc>,
}

/// `GET /orderbook` query parameters
///
/// Fields are optional so missing parameters reach the handler and produce a
/// descriptive rejection instead of a bare extractor error.
#[derive(Debug, Deserialize)]
pub struct OrderBookQuery {
    /// Exchange to look up
    pub exchange_name: Option<String>,
    /// Pair to look up
    pub pair: Option<String>,
}

/// `POST /orderbook` request body
#[derive(Debug, Deserialize)]
pub struct SaveOrderBookRequest {
    /// Exchange the depth was observed on
    pub exchange_name: String,
    /// Trading pair
    pub pair: String,
    /// Price ladder in ladder order
    pub depth: Vec<PriceLevel>,
}

/// `GET /orderhistory` query parameters
#[derive(Debug, Deserialize)]
pub struct OrderHistoryQuery {
    /// Client to list events for
    pub client_id: Option<i64>,
}

/// `POST /order` request body
#[derive(Debug, Deserialize)]
pub struct SaveOrderRequest {
    /// Client the order belongs to
    pub client_id: i64,
    /// Raw order payload
    pub order: String,
}
