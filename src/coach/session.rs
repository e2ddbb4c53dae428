// ABOUTME: Coach session orchestrating one conversational turn against the provider
// ABOUTME: Stateless between calls; history is caller-owned and never mutated in place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

use std::sync::Arc;

use tracing::{debug, instrument};

use super::context::build_seed;
use crate::errors::AppError;
use crate::llm::{get_coach_system_prompt, ConverseRequest, LlmProvider};
use crate::models::{ChatMessage, GeneratedPlan};

/// Fixed fallback reply when the provider returns empty text for a turn
pub const COACH_FALLBACK_REPLY: &str =
    "Desculpe, não consegui processar sua mensagem. Tente novamente.";

/// Orchestrates one conversational coach turn
///
/// The session itself is stateless between calls: each `ask` is a pure
/// function of `(message, history, plan)` against a deterministic provider.
/// The caller persists, truncates, or branches history without
/// coordinating with the session, and appends the returned reply itself,
/// which prevents lost-update races when a UI fires concurrent sends.
pub struct CoachSession {
    provider: Arc<dyn LlmProvider>,
}

impl CoachSession {
    /// Create a session over an injected provider
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Run one conversational turn
    ///
    /// Constructs `[system instruction] + seed + history (verbatim order) +
    /// new user message` and submits it as a single-turn completion.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if `message` is empty after trimming; rejected
    ///   before any network call
    /// - `CoachUnavailable` for any transport/provider/timeout failure;
    ///   the caller-owned history is untouched so the conversation
    ///   survives the failed turn
    #[instrument(skip(self, message, history, plan), fields(provider = self.provider.name(), history_len = history.len()))]
    pub async fn ask(
        &self,
        message: &str,
        history: &[ChatMessage],
        plan: Option<&GeneratedPlan>,
    ) -> Result<String, AppError> {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return Err(AppError::invalid_input(
                "coach message must not be empty after trimming",
            ));
        }

        let [seed_user, seed_model] = build_seed(plan);
        let mut messages = Vec::with_capacity(history.len() + 3);
        messages.push(seed_user);
        messages.push(seed_model);
        messages.extend_from_slice(history);
        messages.push(ChatMessage::user(trimmed));

        let request = ConverseRequest::new(get_coach_system_prompt(), messages);

        debug!("Submitting coach turn");
        let response = self
            .provider
            .converse(&request)
            .await
            .map_err(AppError::coach_unavailable)?;

        if response.text.trim().is_empty() {
            return Ok(COACH_FALLBACK_REPLY.to_owned());
        }

        Ok(response.text)
    }
}
