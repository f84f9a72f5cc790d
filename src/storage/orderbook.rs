//! Order book snapshot store
//!
//! Append-only: every write creates a new row for its `(exchange, pair)` key
//! and reads return the most recently written snapshot.

use chrono::Utc;
use sqlx::{PgPool, Row};
use tracing::debug;

use crate::codec;
use crate::error::{StoreError, StoreResult};
use crate::models::{OrderBookSnapshot, PriceLevel};

/// Store of depth snapshots keyed by `(exchange_name, pair)`
#[derive(Debug, Clone)]
pub struct OrderBookStore {
    /// Shared database pool
    pool: PgPool,
}

impl OrderBookStore {
    /// Create a store over the shared pool
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append one snapshot and return the new row id.
    ///
    /// `created_at` is assigned here, not by the caller, so write time stays
    /// monotonic per key within clock resolution.
    pub async fn write(
        &self,
        exchange_name: &str,
        pair: &str,
        depth: &[PriceLevel],
    ) -> StoreResult<i64> {
        let encoded = codec::encode(depth)?;

        let row = sqlx::query(
            r"
            INSERT INTO order_books (exchange_name, pair, depth, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            ",
        )
        .bind(exchange_name)
        .bind(pair)
        .bind(&encoded)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        let id: i64 = row.get("id");
        debug!("Snapshot {} stored for {}/{}", id, exchange_name, pair);
        Ok(id)
    }

    /// Read the most recent snapshot for a key.
    ///
    /// Selection policy: candidates are ordered by `created_at` descending
    /// with row id as the insertion-order tie-break, so concurrent writers
    /// to the same key still yield a deterministic winner. A key with no
    /// rows fails with [`StoreError::NotFound`].
    pub async fn read(&self, exchange_name: &str, pair: &str) -> StoreResult<OrderBookSnapshot> {
        let row = sqlx::query(
            r"
            SELECT exchange_name, pair, depth, created_at
            FROM order_books
            WHERE exchange_name = $1 AND pair = $2
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            ",
        )
        .bind(exchange_name)
        .bind(pair)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Err(StoreError::NotFound(format!(
                "no order book stored for {exchange_name}/{pair}"
            )));
        };

        let encoded: String = row.get("depth");
        Ok(OrderBookSnapshot {
            exchange_name: row.get("exchange_name"),
            pair: row.get("pair"),
            depth: codec::decode(&encoded)?,
            created_at: row.get("created_at"),
        })
    }
}
