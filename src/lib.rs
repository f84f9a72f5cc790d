//! Market Store
//!
//! Persistence service for market data snapshots and client order activity.
//! Stores and serves order-book depth keyed by `(exchange, pair)` and a
//! client's order history, backed by `PostgreSQL`.

use anyhow::Result;

pub mod codec;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod server;
pub mod storage;

pub use config::{DatabaseConfig, ServerConfig, ServiceConfig};
pub use error::{StoreError, StoreResult};
pub use server::MarketStoreServer;

/// Start the market store server
pub async fn start_server(config: ServiceConfig) -> Result<()> {
    let server = MarketStoreServer::new(config).await?;
    server.start().await
}
