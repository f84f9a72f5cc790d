//! Order ledger endpoints

use axum::{
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::Json,
};
use tracing::info;

use crate::error::StoreError;
use crate::models::{OrderEvent, OrderHistoryQuery, SaveOrderRequest};
use crate::server::AppState;

/// `GET /orderhistory`
///
/// A client with no recorded events gets a 200 with an empty array.
pub async fn get_order_history(
    State(state): State<AppState>,
    query: Result<Query<OrderHistoryQuery>, QueryRejection>,
) -> Result<Json<Vec<OrderEvent>>, StoreError> {
    let Query(query) = query.map_err(|rejection| StoreError::Validation(rejection.body_text()))?;
    let client_id = query.client_id.ok_or_else(|| {
        StoreError::Validation("missing query parameter: client_id".to_string())
    })?;

    let events = state.orders.list_by_client(client_id).await?;
    Ok(Json(events))
}

/// `POST /order`
pub async fn save_order(
    State(state): State<AppState>,
    body: Result<Json<SaveOrderRequest>, JsonRejection>,
) -> Result<StatusCode, StoreError> {
    let Json(request) = body.map_err(|rejection| StoreError::Validation(rejection.body_text()))?;

    let order_id = state
        .orders
        .append(request.client_id, &request.order)
        .await?;

    info!(
        "Order {} recorded for client {}",
        order_id, request.client_id
    );
    Ok(StatusCode::CREATED)
}
