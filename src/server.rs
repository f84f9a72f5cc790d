//! HTTP server assembly and lifecycle
//!
//! The router owns no cross-request state beyond the two stores sharing one
//! database pool; request concurrency and cancellation are the runtime's
//! concern, and the timeout layer bounds every request.

use anyhow::Result;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    response::IntoResponse,
    routing::{get, post},
};
use sqlx::PgPool;
use std::net::SocketAddr;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::config::{ServerConfig, ServiceConfig};
use crate::handlers::{orderbook, orders};
use crate::storage::{self, OrderBookStore, OrderLedgerStore};

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    /// Order book snapshot store
    pub order_books: OrderBookStore,
    /// Client order ledger store
    pub orders: OrderLedgerStore,
}

/// Market store HTTP server
pub struct MarketStoreServer {
    config: ServiceConfig,
    pool: PgPool,
}

impl MarketStoreServer {
    /// Connect storage and prepare the server.
    ///
    /// The pool is the process-wide shared resource from here until
    /// [`Self::start`] returns.
    pub async fn new(config: ServiceConfig) -> Result<Self> {
        let pool = storage::connect(&config.database).await?;
        storage::run_migrations(&pool).await?;
        Ok(Self { config, pool })
    }

    /// Build the application router over the given state.
    ///
    /// Exposed separately so tests can drive the real routes without a
    /// listening socket.
    pub fn router(state: AppState, config: &ServerConfig) -> Router {
        Router::new()
            .route("/health", get(health))
            .route(
                "/orderbook",
                get(orderbook::get_order_book).post(orderbook::save_order_book),
            )
            .route("/orderhistory", get(orders::get_order_history))
            .route("/order", post(orders::save_order))
            .with_state(state)
            .layer(DefaultBodyLimit::max(config.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeout_seconds,
            )))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }

    /// Start the server and block until shutdown.
    pub async fn start(self) -> Result<()> {
        let addr: SocketAddr = match self.config.server_address().parse() {
            Ok(addr) => addr,
            Err(e) => {
                error!(
                    "Invalid server address '{}': {}",
                    self.config.server_address(),
                    e
                );
                return Err(anyhow::anyhow!("Invalid server address: {}", e));
            }
        };

        let state = AppState {
            order_books: OrderBookStore::new(self.pool.clone()),
            orders: OrderLedgerStore::new(self.pool.clone()),
        };
        let app = Self::router(state, &self.config.server);

        let listener = match tokio::net::TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("Failed to bind TCP listener to {}: {}", addr, e);
                return Err(anyhow::anyhow!("Failed to bind to address {}: {}", addr, e));
            }
        };

        info!("Market store listening on {}", addr);

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
        {
            error!("Server encountered a fatal error: {}", e);
            self.pool.close().await;
            return Err(anyhow::anyhow!("Server error: {}", e));
        }

        // Release the shared pool before exit
        self.pool.close().await;
        info!("Storage pool closed, shutdown complete");
        Ok(())
    }
}

async fn health() -> impl IntoResponse {
    "OK"
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}
