// ABOUTME: Generation client - one schema-constrained provider exchange per plan
// ABOUTME: Empty text fails EmptyResponse; unparseable text fails MalformedResponse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::prompt::build_plan_prompt;
use crate::errors::AppError;
use crate::llm::{LlmProvider, StructuredRequest};
use crate::models::{GeneratedPlan, UserProfile};
use crate::schema::{shape_for, EntityKind};

/// Fixed sampling temperature for plan generation
///
/// Balances plan variety against structural reliability.
pub const PLAN_TEMPERATURE: f32 = 0.7;

/// Generation client for structured plan creation
///
/// Performs exactly one outbound provider exchange per call with no
/// retries; a failure surfaces to the caller, which discards the
/// half-formed profile state.
pub struct PlanGenerator {
    provider: Arc<dyn LlmProvider>,
}

impl PlanGenerator {
    /// Create a generator over an injected provider
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Generate a plan for a profile
    ///
    /// Builds the prompt and the plan shape, submits both with the fixed
    /// temperature, and parses the returned text into a [`GeneratedPlan`].
    ///
    /// # Errors
    ///
    /// - `EmptyResponse` if the provider returned no text
    /// - `MalformedResponse` if the text is not valid plan JSON; typed
    ///   deserialization also rejects any missing required field, since the
    ///   provider is an untrusted boundary despite the shape constraint
    /// - `TransportError` / `ProviderError` / `GenerationTimeout` from the
    ///   provider exchange itself
    #[instrument(skip(self, profile), fields(provider = self.provider.name()))]
    pub async fn generate(&self, profile: &UserProfile) -> Result<GeneratedPlan, AppError> {
        let prompt = build_plan_prompt(profile);
        let request = StructuredRequest::new(prompt, shape_for(EntityKind::Plan))
            .with_temperature(PLAN_TEMPERATURE);

        debug!("Requesting structured plan generation");
        let response = self.provider.generate_structured(&request).await?;

        if response.text.trim().is_empty() {
            return Err(AppError::empty_response());
        }

        let plan: GeneratedPlan =
            serde_json::from_str(&response.text).map_err(AppError::malformed_response)?;

        info!(
            calories = plan.macros.calories,
            meals = plan.nutrition_plan.len(),
            sessions = plan.workout_plan.len(),
            "Generated plan"
        );

        Ok(plan)
    }
}
