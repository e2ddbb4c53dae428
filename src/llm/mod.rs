// ABOUTME: LLM provider abstraction for pluggable AI model integration
// ABOUTME: Defines structured-generation and conversational contracts providers must implement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

//! # LLM Provider Service Provider Interface
//!
//! This module defines the contract the generation client and the coach
//! session call through. The provider is an injected capability so both can
//! be tested against a deterministic stub instead of a live network
//! dependency.
//!
//! ## Key Concepts
//!
//! - **`LlmCapabilities`**: Bitflags describing provider features
//! - **`LlmProvider`**: Async trait with one structured-generation operation
//!   and one conversational operation
//! - **`StructuredRequest`** / **`ConverseRequest`**: The two request shapes
//! - **`CompletionResponse`**: Raw text plus provider metadata
//!
//! ## Example: Using a Provider
//!
//! ```rust,no_run
//! use recomp_coach_server::llm::{ConverseRequest, LlmProvider};
//! use recomp_coach_server::models::ChatMessage;
//!
//! async fn example(provider: &dyn LlmProvider) {
//!     let request = ConverseRequest::new(
//!         "Você é um treinador.",
//!         vec![ChatMessage::user("Qual o melhor aquecimento?")],
//!     );
//!     let response = provider.converse(&request).await;
//! }
//! ```

mod gemini;
pub mod prompts;

pub use gemini::{GeminiProvider, GEMINI_API_KEY_ENV};
pub use prompts::get_coach_system_prompt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::ChatMessage;

bitflags::bitflags! {
    /// LLM provider capability flags
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct LlmCapabilities: u8 {
        /// Provider supports schema-constrained JSON output
        const JSON_MODE = 0b0000_0001;
        /// Provider supports an out-of-band system instruction
        const SYSTEM_INSTRUCTION = 0b0000_0010;
    }
}

impl LlmCapabilities {
    /// Check if schema-constrained JSON output is supported
    #[must_use]
    pub const fn supports_json_mode(&self) -> bool {
        self.contains(Self::JSON_MODE)
    }

    /// Check if an out-of-band system instruction is supported
    #[must_use]
    pub const fn supports_system_instruction(&self) -> bool {
        self.contains(Self::SYSTEM_INSTRUCTION)
    }
}

/// A single-exchange structured generation request
///
/// The response schema is attached as a hard output constraint: the
/// provider is asked for strict JSON conforming to the shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredRequest {
    /// Natural-language instruction
    pub prompt: String,
    /// Required output shape, in the provider's schema dialect
    pub response_schema: Value,
    /// Model identifier override (provider default if absent)
    pub model: Option<String>,
    /// Sampling temperature
    pub temperature: Option<f32>,
}

impl StructuredRequest {
    /// Create a new structured request
    pub fn new(prompt: impl Into<String>, response_schema: Value) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema,
            model: None,
            temperature: None,
        }
    }

    /// Set the model to use
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the sampling temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// A single-turn completion request over a full message sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverseRequest {
    /// System instruction carried out-of-band from the message sequence
    pub system_instruction: String,
    /// Full ordered message sequence, replayed verbatim
    pub messages: Vec<ChatMessage>,
    /// Model identifier override (provider default if absent)
    pub model: Option<String>,
    /// Sampling temperature
    pub temperature: Option<f32>,
}

impl ConverseRequest {
    /// Create a new conversational request
    pub fn new(system_instruction: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            messages,
            model: None,
            temperature: None,
        }
    }

    /// Set the model to use
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Response from either provider operation
///
/// `text` may be empty; the caller decides whether that is a failure
/// (structured call) or a fallback condition (coach turn).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Generated text, possibly empty
    pub text: String,
    /// Model that produced the response
    pub model: String,
    /// Finish reason if reported (e.g. "STOP")
    pub finish_reason: Option<String>,
}

/// LLM provider trait
///
/// Both operations are exactly one outbound exchange with no internal
/// retries; every failure surfaces to the caller as a typed [`AppError`].
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g. "gemini")
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Provider capabilities
    fn capabilities(&self) -> LlmCapabilities;

    /// Default model used when a request does not name one
    fn default_model(&self) -> &str;

    /// Perform a schema-constrained generation exchange
    async fn generate_structured(
        &self,
        request: &StructuredRequest,
    ) -> Result<CompletionResponse, AppError>;

    /// Perform a single-turn completion over a full message sequence
    async fn converse(&self, request: &ConverseRequest) -> Result<CompletionResponse, AppError>;
}
