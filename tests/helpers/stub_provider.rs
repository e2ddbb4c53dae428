// ABOUTME: Deterministic in-memory LlmProvider stub for integration tests
// ABOUTME: Records every outbound request and replays scripted replies or failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

use std::sync::Mutex;

use async_trait::async_trait;
use recomp_coach_server::errors::{AppError, ErrorCode};
use recomp_coach_server::llm::{
    CompletionResponse, ConverseRequest, LlmCapabilities, LlmProvider, StructuredRequest,
};

/// What the stub should do when a request arrives
#[derive(Debug, Clone)]
pub enum StubReply {
    /// Return this text as the completion
    Text(String),
    /// Fail with this error code and message
    Fail(ErrorCode, String),
}

/// Provider stub that records requests and replays a scripted reply
pub struct StubProvider {
    reply: StubReply,
    structured_requests: Mutex<Vec<StructuredRequest>>,
    converse_requests: Mutex<Vec<ConverseRequest>>,
}

impl StubProvider {
    pub fn new(reply: StubReply) -> Self {
        Self {
            reply,
            structured_requests: Mutex::new(Vec::new()),
            converse_requests: Mutex::new(Vec::new()),
        }
    }

    /// Stub that answers every request with the given text
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::new(StubReply::Text(text.into()))
    }

    /// Stub that fails every request with the given code
    pub fn failing(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(StubReply::Fail(code, message.into()))
    }

    /// All structured requests received so far
    pub fn structured_requests(&self) -> Vec<StructuredRequest> {
        self.structured_requests
            .lock()
            .expect("stub lock poisoned")
            .clone()
    }

    /// All conversational requests received so far
    pub fn converse_requests(&self) -> Vec<ConverseRequest> {
        self.converse_requests
            .lock()
            .expect("stub lock poisoned")
            .clone()
    }

    /// Total number of requests received across both operations
    pub fn call_count(&self) -> usize {
        self.structured_requests().len() + self.converse_requests().len()
    }

    fn respond(&self) -> Result<CompletionResponse, AppError> {
        match &self.reply {
            StubReply::Text(text) => Ok(CompletionResponse {
                text: text.clone(),
                model: "stub-model".to_owned(),
                finish_reason: Some("STOP".to_owned()),
            }),
            StubReply::Fail(code, message) => Err(AppError::new(*code, message.clone())),
        }
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn display_name(&self) -> &'static str {
        "Test Stub"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::JSON_MODE | LlmCapabilities::SYSTEM_INSTRUCTION
    }

    fn default_model(&self) -> &str {
        "stub-model"
    }

    async fn generate_structured(
        &self,
        request: &StructuredRequest,
    ) -> Result<CompletionResponse, AppError> {
        self.structured_requests
            .lock()
            .expect("stub lock poisoned")
            .push(request.clone());
        self.respond()
    }

    async fn converse(&self, request: &ConverseRequest) -> Result<CompletionResponse, AppError> {
        self.converse_requests
            .lock()
            .expect("stub lock poisoned")
            .push(request.clone());
        self.respond()
    }
}
