// ABOUTME: Coach conversation route handler - one conversational turn per request
// ABOUTME: POST /api/coach takes message + history + plan and returns the reply text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

//! Coach conversation route
//!
//! The session is stateless: the client threads the full history on every
//! request and appends the returned reply itself. A failed turn preserves
//! that history, so the conversation is never reset by a single failure.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::coach::CoachSession;
use crate::errors::AppError;
use crate::models::{ChatHistory, GeneratedPlan};
use crate::server::ServerResources;

/// Request to run one coach turn
#[derive(Debug, Serialize, Deserialize)]
pub struct SendMessageRequest {
    /// New user message; must be non-empty after trimming
    pub message: String,
    /// Full conversation history in original order
    #[serde(default)]
    pub history: ChatHistory,
    /// Active plan, if one has been generated
    #[serde(default)]
    pub plan: Option<GeneratedPlan>,
}

/// Reply for one coach turn
#[derive(Debug, Serialize, Deserialize)]
pub struct CoachReplyResponse {
    /// Coach reply text to be appended to history by the caller
    pub reply: String,
}

/// Coach routes handler
pub struct CoachRoutes;

impl CoachRoutes {
    /// Create all coach routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/coach", post(Self::send_message))
            .with_state(resources)
    }

    /// Run one conversational turn
    async fn send_message(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<SendMessageRequest>,
    ) -> Result<Response, AppError> {
        let provider = resources.provider()?;

        let session = CoachSession::new(provider);
        let reply = session
            .ask(&request.message, &request.history, request.plan.as_ref())
            .await?;

        Ok((StatusCode::OK, Json(CoachReplyResponse { reply })).into_response())
    }
}
