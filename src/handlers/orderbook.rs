//! Order book endpoints

use axum::{
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use tracing::info;

use crate::error::StoreError;
use crate::models::{OrderBookQuery, PriceLevel, SaveOrderBookRequest};
use crate::server::AppState;

use super::require_param;

/// `GET /orderbook`
///
/// Responds with the most recent snapshot's depth ladder alone; the envelope
/// fields are not re-exposed. A key with no snapshot is a 404, not an empty
/// list.
pub async fn get_order_book(
    State(state): State<AppState>,
    Query(query): Query<OrderBookQuery>,
) -> Result<Json<Vec<PriceLevel>>, StoreError> {
    let exchange_name = require_param(query.exchange_name, "exchange_name")?;
    let pair = require_param(query.pair, "pair")?;

    let snapshot = state.order_books.read(&exchange_name, &pair).await?;
    Ok(Json(snapshot.depth))
}

/// `POST /orderbook`
pub async fn save_order_book(
    State(state): State<AppState>,
    body: Result<Json<SaveOrderBookRequest>, JsonRejection>,
) -> Result<StatusCode, StoreError> {
    let Json(request) = body.map_err(|rejection| StoreError::Validation(rejection.body_text()))?;

    if request.exchange_name.is_empty() || request.pair.is_empty() {
        return Err(StoreError::Validation(
            "exchange_name and pair must be non-empty".to_string(),
        ));
    }

    let id = state
        .order_books
        .write(&request.exchange_name, &request.pair, &request.depth)
        .await?;

    info!(
        "Stored order book snapshot {} for {}/{} ({} levels)",
        id,
        request.exchange_name,
        request.pair,
        request.depth.len()
    );
    Ok(StatusCode::CREATED)
}
