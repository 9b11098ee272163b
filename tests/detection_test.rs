// ABOUTME: Integration tests for the fridge photo detection client
// ABOUTME: Serves a fake detection endpoint with axum and checks filtering, merging and errors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MoodBites

mod common;

use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use common::{init_test_logging, spawn_server, test_http_client, test_image};
use moodbites::config::DetectionServiceConfig;
use moodbites::errors::ErrorCode;
use moodbites::models::{IngredientCategory, Provenance};
use moodbites::scan::{DetectionClient, IngredientDetector};
use serde_json::{json, Value};

async fn detect(mut multipart: Multipart) -> (StatusCode, Json<Value>) {
    let mut saw_image = false;
    while let Some(field) = multipart.next_field().await.unwrap() {
        if field.name() == Some("image") {
            saw_image = !field.bytes().await.unwrap().is_empty();
        }
    }
    if !saw_image {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "no image" })));
    }

    (
        StatusCode::OK,
        Json(json!({
            "detections": [
                { "label": "Tomato", "confidence": 0.62, "bbox": [0.0, 0.0, 10.0, 10.0] },
                { "label": "tomato", "confidence": 0.93, "bbox": [20.0, 20.0, 60.0, 70.0] },
                { "label": "banana", "confidence": 71 },
                { "label": "bottle", "confidence": 0.12 }
            ]
        })),
    )
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::SERVICE_UNAVAILABLE, "model loading")
}

async fn garbage() -> &'static str {
    "not json"
}

fn client_for(base_url: String) -> DetectionClient {
    DetectionClient::new(DetectionServiceConfig {
        base_url,
        min_confidence: 0.4,
    })
    .with_http_client(test_http_client())
}

#[tokio::test]
async fn test_detections_become_ingredients() {
    init_test_logging();
    let base = spawn_server(Router::new().route("/detect", post(detect))).await;

    let ingredients = client_for(base).detect(&test_image()).await.unwrap();

    let names: Vec<&str> = ingredients.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["tomato", "banana"]);

    let tomato = &ingredients[0];
    assert_eq!(tomato.confidence, 93);
    assert_eq!(tomato.provenance, Provenance::Detected);
    assert_eq!(tomato.category, IngredientCategory::Vegetables);
    assert!((tomato.bounding_box.unwrap().area() - 2000.0).abs() < f64::EPSILON);

    let banana = &ingredients[1];
    assert_eq!(banana.confidence, 71);
    assert_eq!(banana.category, IngredientCategory::Fruits);
    assert!(banana.bounding_box.is_none());
}

#[tokio::test]
async fn test_service_error_is_external_service_error() {
    init_test_logging();
    let base = spawn_server(Router::new().route("/detect", post(broken))).await;

    let err = client_for(base).detect(&test_image()).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.message.contains("503"));
}

#[tokio::test]
async fn test_malformed_body_is_external_service_error() {
    init_test_logging();
    let base = spawn_server(Router::new().route("/detect", post(garbage))).await;

    let err = client_for(base).detect(&test_image()).await.unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceError);
}

#[tokio::test]
async fn test_unreachable_service_is_unavailable() {
    init_test_logging();

    let err = client_for("http://127.0.0.1:9".to_owned())
        .detect(&test_image())
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    assert_eq!(err.context.service.as_deref(), Some("detection-service"));
}
