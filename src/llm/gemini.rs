// ABOUTME: Google Gemini LLM provider implementation over the Generative AI API
// ABOUTME: Supports schema-constrained JSON generation and system-instructed chat completion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

//! # Gemini Provider
//!
//! Implementation of the [`LlmProvider`] trait for Google's Gemini models.
//!
//! ## Configuration
//!
//! Set the `GEMINI_API_KEY` environment variable with your API key from
//! Google AI Studio. The credential never leaves this backend: clients talk
//! to this server, never to Gemini directly.
//!
//! ## Supported Models
//!
//! - `gemini-2.5-flash` (default): fast model with structured output support
//! - `gemini-1.5-pro`: advanced reasoning capabilities
//! - `gemini-1.5-flash`: balanced performance and cost

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, instrument};

use super::{
    CompletionResponse, ConverseRequest, LlmCapabilities, LlmProvider, StructuredRequest,
};
use crate::errors::AppError;
use crate::models::ChatMessage;

/// Environment variable for the Gemini API key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default model to use
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Available Gemini models
const AVAILABLE_MODELS: &[&str] = &["gemini-2.5-flash", "gemini-1.5-pro", "gemini-1.5-flash"];

/// Base URL for the Gemini API
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Deadline for one provider exchange
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

/// Content structure for the Gemini API
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<TextPart>,
}

/// Text part of a content entry
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TextPart {
    text: String,
}

/// Generation configuration
#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(rename = "responseSchema", skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
    #[serde(rename = "candidateCount")]
    candidate_count: u32,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

/// API error payload from Gemini
#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini LLM provider
pub struct GeminiProvider {
    api_key: String,
    client: Client,
    default_model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider with an API key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            api_key: api_key.into(),
            client,
            default_model: DEFAULT_MODEL.to_owned(),
        }
    }

    /// Create a provider from the `GEMINI_API_KEY` environment variable
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` if the environment variable is not set. This
    /// is surfaced before any provider call is attempted.
    pub fn from_env() -> Result<Self, AppError> {
        let api_key =
            env::var(GEMINI_API_KEY_ENV).map_err(|_| AppError::config_missing(GEMINI_API_KEY_ENV))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom default model
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// List of models this provider accepts
    #[must_use]
    pub const fn available_models() -> &'static [&'static str] {
        AVAILABLE_MODELS
    }

    /// Build the API URL for a model and method
    fn build_url(&self, model: &str) -> String {
        format!(
            "{API_BASE_URL}/models/{model}:generateContent?key={}",
            self.api_key
        )
    }

    /// Convert domain chat messages to Gemini contents
    fn convert_messages(messages: &[ChatMessage]) -> Vec<GeminiContent> {
        messages
            .iter()
            .map(|message| GeminiContent {
                role: Some(message.role.as_str().to_owned()),
                parts: vec![TextPart {
                    text: message.text.clone(),
                }],
            })
            .collect()
    }

    /// Issue one `generateContent` exchange and extract the response text
    async fn send(&self, model: &str, request: &GeminiRequest) -> Result<CompletionResponse, AppError> {
        let url = self.build_url(model);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| AppError::transport(format!("failed to read provider response: {e}")))?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status.as_u16(), &response_text));
        }

        let gemini_response: GeminiResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(error = %e, "Failed to parse Gemini response envelope");
                AppError::provider(format!("unparseable provider response envelope: {e}"))
                    .with_source(e)
            })?;

        if let Some(api_error) = gemini_response.error {
            return Err(AppError::provider(format!(
                "Gemini API error: {}",
                api_error.message
            )));
        }

        let first = gemini_response
            .candidates
            .as_ref()
            .and_then(|candidates| candidates.first());
        let text = first
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| content.parts.first())
            .map(|part| part.text.clone())
            .unwrap_or_default();
        let finish_reason = first.and_then(|candidate| candidate.finish_reason.clone());

        debug!("Received Gemini response");

        Ok(CompletionResponse {
            text,
            model: model.to_owned(),
            finish_reason,
        })
    }

    /// Map a reqwest failure to the transport/timeout taxonomy
    fn map_transport_error(error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::generation_timeout(format!("provider call exceeded deadline: {error}"))
                .with_source(error)
        } else {
            AppError::transport(format!("HTTP request failed: {error}")).with_source(error)
        }
    }

    /// Map a non-2xx API status to an error, extracting the message if present
    fn map_api_error(status: u16, response_text: &str) -> AppError {
        let message = serde_json::from_str::<GeminiResponse>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| response_text.to_owned(), |e| e.message);

        AppError::provider(format!("Gemini API error ({status}): {message}"))
            .with_details(serde_json::json!({ "status": status }))
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn display_name(&self) -> &'static str {
        "Google Gemini"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::JSON_MODE | LlmCapabilities::SYSTEM_INSTRUCTION
    }

    fn default_model(&self) -> &str {
        &self.default_model
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(DEFAULT_MODEL)))]
    async fn generate_structured(
        &self,
        request: &StructuredRequest,
    ) -> Result<CompletionResponse, AppError> {
        let model = request.model.as_deref().unwrap_or(&self.default_model);

        let gemini_request = GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_owned()),
                parts: vec![TextPart {
                    text: request.prompt.clone(),
                }],
            }],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                temperature: request.temperature,
                response_mime_type: Some("application/json".to_owned()),
                response_schema: Some(request.response_schema.clone()),
                candidate_count: 1,
            }),
        };

        debug!("Sending structured generation request to Gemini");
        self.send(model, &gemini_request).await
    }

    #[instrument(skip(self, request), fields(model = %request.model.as_deref().unwrap_or(DEFAULT_MODEL), turns = request.messages.len()))]
    async fn converse(&self, request: &ConverseRequest) -> Result<CompletionResponse, AppError> {
        let model = request.model.as_deref().unwrap_or(&self.default_model);

        let gemini_request = GeminiRequest {
            contents: Self::convert_messages(&request.messages),
            system_instruction: Some(GeminiContent {
                role: None,
                parts: vec![TextPart {
                    text: request.system_instruction.clone(),
                }],
            }),
            generation_config: request.temperature.map(|temperature| GenerationConfig {
                temperature: Some(temperature),
                response_mime_type: None,
                response_schema: None,
                candidate_count: 1,
            }),
        };

        debug!("Sending conversational request to Gemini");
        self.send(model, &gemini_request).await
    }
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiProvider")
            .field("default_model", &self.default_model)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
