//! Client order ledger store
//!
//! Append-only log of order events, queried per client. `order` is a
//! reserved word, hence the quoted column.

use chrono::Utc;
use sqlx::{PgPool, Row};
use tracing::debug;

use crate::error::StoreResult;
use crate::models::OrderEvent;

/// Store of client order events keyed by `client_id`
#[derive(Debug, Clone)]
pub struct OrderLedgerStore {
    /// Shared database pool
    pool: PgPool,
}

impl OrderLedgerStore {
    /// Create a store over the shared pool
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append one order event and return the store-assigned order id.
    pub async fn append(&self, client_id: i64, order: &str) -> StoreResult<i64> {
        let row = sqlx::query(
            r#"
            INSERT INTO history_orders (client_id, "order", created_at)
            VALUES ($1, $2, $3)
            RETURNING order_id
            "#,
        )
        .bind(client_id)
        .bind(order)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        let order_id: i64 = row.get("order_id");
        debug!("Order {} recorded for client {}", order_id, client_id);
        Ok(order_id)
    }

    /// List all events for a client.
    ///
    /// Ordered by `created_at` ascending with `order_id` as the tie-break
    /// for equal timestamps. A client with no events yields an empty list,
    /// not an error.
    pub async fn list_by_client(&self, client_id: i64) -> StoreResult<Vec<OrderEvent>> {
        let rows = sqlx::query(
            r#"
            SELECT order_id, client_id, "order", created_at
            FROM history_orders
            WHERE client_id = $1
            ORDER BY created_at ASC, order_id ASC
            "#,
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        let events = rows
            .into_iter()
            .map(|row| OrderEvent {
                order_id: row.get("order_id"),
                client_id: row.get("client_id"),
                order: row.get("order"),
                created_at: row.get("created_at"),
            })
            .collect();

        Ok(events)
    }
}
