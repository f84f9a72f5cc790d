//! Storage layer
//!
//! `PostgreSQL`-backed stores for order-book snapshots and the client order
//! ledger. The pool is the process-wide shared connection resource: acquired
//! once at startup, handed to the stores, and closed at shutdown.

pub mod ledger;
pub mod orderbook;

pub use ledger::OrderLedgerStore;
pub use orderbook::OrderBookStore;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::config::DatabaseConfig;

/// Connect the shared database pool.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url())
        .await
        .with_context(|| {
            format!(
                "failed to connect to database {} at {}:{}",
                config.database, config.host, config.port
            )
        })?;

    info!(
        "Connected to database {} at {}:{}",
        config.database, config.host, config.port
    );
    Ok(pool)
}

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    info!("Running database migrations");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS order_books (
            id            BIGSERIAL   PRIMARY KEY,
            exchange_name TEXT        NOT NULL,
            pair          TEXT        NOT NULL,
            depth         TEXT        NOT NULL,
            created_at    TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE INDEX IF NOT EXISTS idx_order_books_key
            ON order_books (exchange_name, pair, created_at DESC)
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS history_orders (
            order_id   BIGSERIAL   PRIMARY KEY,
            client_id  BIGINT      NOT NULL,
            "order"    TEXT        NOT NULL,
            created_at TIMESTAMPTZ NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE INDEX IF NOT EXISTS idx_history_orders_client
            ON history_orders (client_id, created_at, order_id)
        ",
    )
    .execute(pool)
    .await?;

    info!("Database migrations completed");
    Ok(())
}
