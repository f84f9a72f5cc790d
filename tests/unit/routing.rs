//! Routing and validation tests
//!
//! These drive the real router through `tower::ServiceExt::oneshot` with a
//! pool that is never connected: every request below must be answered before
//! any store access happens.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use tower::ServiceExt;

use crate::test_router;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_responds_ok() {
    let response = test_router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn order_book_read_without_params_is_rejected() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/orderbook")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "BAD_REQUEST");
    assert!(body["message"].as_str().unwrap().contains("exchange_name"));
}

#[tokio::test]
async fn order_book_read_without_pair_is_rejected() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/orderbook?exchange_name=binance")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("pair"));
}

#[tokio::test]
async fn order_book_read_with_empty_params_is_rejected() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/orderbook?exchange_name=&pair=BTCUSD")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn order_book_write_rejects_malformed_body() {
    let response = test_router()
        .oneshot(json_post("/orderbook", "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn order_book_write_rejects_mistyped_depth() {
    let response = test_router()
        .oneshot(json_post(
            "/orderbook",
            r#"{"exchange_name":"binance","pair":"BTCUSD","depth":5}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn order_book_write_rejects_empty_key_fields() {
    let response = test_router()
        .oneshot(json_post(
            "/orderbook",
            r#"{"exchange_name":"","pair":"BTCUSD","depth":[]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("non-empty"));
}

#[tokio::test]
async fn order_book_write_requires_json_content_type() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/orderbook")
                .body(Body::from(
                    r#"{"exchange_name":"binance","pair":"BTCUSD","depth":[]}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn order_history_without_client_id_is_rejected() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/orderhistory")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("client_id"));
}

#[tokio::test]
async fn order_history_with_non_numeric_client_id_is_rejected() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/orderhistory?client_id=seven")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn order_write_rejects_malformed_body() {
    let response = test_router()
        .oneshot(json_post("/order", r#"{"client_id":"seven"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/orderbooks")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unsupported_method_is_rejected() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/orderbook")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
