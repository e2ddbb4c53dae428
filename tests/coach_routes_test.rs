// ABOUTME: Integration tests for the coach conversation route
// ABOUTME: Exercises the full router path for turns, history threading, and failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{sample_plan, test_resources};
use helpers::axum_test::AxumTestRequest;
use helpers::stub_provider::StubProvider;
use recomp_coach_server::errors::{ErrorCode, ErrorResponse};
use recomp_coach_server::llm::LlmProvider;
use recomp_coach_server::routes::coach::CoachReplyResponse;
use recomp_coach_server::server;
use serde_json::json;

fn router_with(provider: Arc<dyn LlmProvider>) -> axum::Router {
    server::router(test_resources(Some(provider)))
}

#[tokio::test]
async fn test_send_message_returns_reply() {
    let provider = Arc::new(StubProvider::with_text("Priorize o sono."));
    let router = router_with(provider);

    let response = AxumTestRequest::post("/api/coach")
        .json(&json!({"message": "Como recuperar melhor?"}))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: CoachReplyResponse = response.json();
    assert_eq!(body.reply, "Priorize o sono.");
}

#[tokio::test]
async fn test_send_message_threads_history_and_plan() {
    let provider = Arc::new(StubProvider::with_text("ok"));
    let router = router_with(provider.clone());

    let response = AxumTestRequest::post("/api/coach")
        .json(&json!({
            "message": "E aos domingos?",
            "history": [
                {"role": "user", "text": "Quantos treinos por semana?"},
                {"role": "model", "text": "Quatro sessões."}
            ],
            "plan": serde_json::to_value(sample_plan()).unwrap()
        }))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let requests = provider.converse_requests();
    assert_eq!(requests.len(), 1);
    let messages = &requests[0].messages;
    assert_eq!(messages.len(), 5);
    assert!(messages[0].text.contains("Calorias: 2200"));
    assert_eq!(messages[2].text, "Quantos treinos por semana?");
    assert_eq!(messages[3].text, "Quatro sessões.");
    assert_eq!(messages[4].text, "E aos domingos?");
}

#[tokio::test]
async fn test_send_message_empty_is_invalid_input() {
    let provider = Arc::new(StubProvider::with_text("ok"));
    let router = router_with(provider.clone());

    let response = AxumTestRequest::post("/api/coach")
        .json(&json!({"message": "   "}))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = response.json();
    assert_eq!(body.error.code, ErrorCode::InvalidInput);
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_send_message_provider_failure_is_service_unavailable() {
    let provider = Arc::new(StubProvider::failing(
        ErrorCode::ProviderError,
        "quota exhausted",
    ));
    let router = router_with(provider);

    let response = AxumTestRequest::post("/api/coach")
        .json(&json!({"message": "oi"}))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    let body: ErrorResponse = response.json();
    assert_eq!(body.error.code, ErrorCode::CoachUnavailable);
    assert!(body.error.message.contains("quota exhausted"));
}

#[tokio::test]
async fn test_send_message_rejects_get() {
    let provider = Arc::new(StubProvider::with_text("ok"));
    let router = router_with(provider);

    let response = AxumTestRequest::get("/api/coach").send(router).await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_send_message_without_provider_is_config_missing() {
    let router = server::router(test_resources(None));

    let response = AxumTestRequest::post("/api/coach")
        .json(&json!({"message": "oi"}))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorResponse = response.json();
    assert_eq!(body.error.code, ErrorCode::ConfigMissing);
}
