// ABOUTME: Plan generation route handler - the structured-generation boundary
// ABOUTME: POST /api/plan turns a UserProfile body into a GeneratedPlan response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

//! Plan generation route
//!
//! One POST endpoint wrapping the generation client. A failure here means
//! the plan is discarded wholesale; the client returns the user to data
//! entry.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::info;

use crate::errors::AppError;
use crate::models::UserProfile;
use crate::plan::PlanGenerator;
use crate::server::ServerResources;

/// Plan routes handler
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create all plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/plan", post(Self::generate_plan))
            .with_state(resources)
    }

    /// Generate a structured plan for the submitted profile
    async fn generate_plan(
        State(resources): State<Arc<ServerResources>>,
        Json(profile): Json<UserProfile>,
    ) -> Result<Response, AppError> {
        let provider = resources.provider()?;

        let generator = PlanGenerator::new(provider);
        let plan = generator.generate(&profile).await?;

        info!(goal = %profile.goal, "Plan generated for profile");
        Ok((StatusCode::OK, Json(plan)).into_response())
    }
}
