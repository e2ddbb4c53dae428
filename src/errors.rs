// ABOUTME: Unified error handling with typed error codes and HTTP response mapping
// ABOUTME: Defines AppError, ErrorCode, and the JSON error envelope returned by all routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

//! # Unified Error Handling System
//!
//! This module provides the centralized error handling system for the coach
//! server. It defines standard error codes, error construction helpers, and
//! HTTP response formatting so every route returns the same error envelope.
//!
//! The taxonomy is deliberately asymmetric: plan generation failures discard
//! the half-formed plan wholesale, while a failed coach turn preserves the
//! caller-owned history so the conversation can continue.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Configuration (1000-1999)
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 1000,
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 1001,

    // Validation (2000-2999)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 2000,

    // Provider boundary (3000-3999)
    #[serde(rename = "TRANSPORT_ERROR")]
    TransportError = 3000,
    #[serde(rename = "PROVIDER_ERROR")]
    ProviderError = 3001,
    #[serde(rename = "EMPTY_RESPONSE")]
    EmptyResponse = 3002,
    #[serde(rename = "MALFORMED_RESPONSE")]
    MalformedResponse = 3003,
    #[serde(rename = "GENERATION_TIMEOUT")]
    GenerationTimeout = 3004,

    // Coach turn (4000-4999)
    #[serde(rename = "COACH_UNAVAILABLE")]
    CoachUnavailable = 4000,

    // Internal (9000-9999)
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::InvalidInput => 400,

            // 502 Bad Gateway: the provider boundary misbehaved
            Self::TransportError
            | Self::ProviderError
            | Self::EmptyResponse
            | Self::MalformedResponse => 502,

            // 503 Service Unavailable: retryable without losing context
            Self::CoachUnavailable => 503,

            // 504 Gateway Timeout
            Self::GenerationTimeout => 504,

            // 500 Internal Server Error
            Self::ConfigError | Self::ConfigMissing | Self::InternalError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ConfigError => "Server configuration is invalid",
            Self::ConfigMissing => "A required server configuration value is missing",
            Self::InvalidInput => "The provided input is invalid",
            Self::TransportError => "Could not reach the AI provider",
            Self::ProviderError => "The AI provider returned an error",
            Self::EmptyResponse => "The AI provider returned no content",
            Self::MalformedResponse => "The AI provider returned unparseable content",
            Self::GenerationTimeout => "The AI provider did not respond in time",
            Self::CoachUnavailable => "The coach is temporarily unavailable",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Request ID for tracing
    pub request_id: Option<String>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            request_id: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a request ID to the error context
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.context.request_id = Some(request_id.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorResponseDetails,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                request_id: error.context.request_id,
                details: error.context.details,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse::from(self);
        (status, Json(body)).into_response()
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Missing required configuration value (e.g. the provider credential)
    pub fn config_missing(name: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ConfigMissing,
            format!("{} is not configured", name.into()),
        )
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Network/connection failure reaching the provider
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::TransportError, message)
    }

    /// Provider returned a non-success status or an error payload
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ProviderError, message)
    }

    /// Structured call produced no text
    pub fn empty_response() -> Self {
        Self::new(
            ErrorCode::EmptyResponse,
            "provider returned an empty response for a structured call",
        )
    }

    /// Structured call produced unparseable text
    pub fn malformed_response(source: serde_json::Error) -> Self {
        Self::new(
            ErrorCode::MalformedResponse,
            format!("provider response is not valid plan JSON: {source}"),
        )
        .with_source(source)
    }

    /// Deadline expired waiting for the provider
    pub fn generation_timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::GenerationTimeout, message)
    }

    /// Any failure during a conversational turn, wrapping the underlying error
    #[must_use]
    pub fn coach_unavailable(source: Self) -> Self {
        Self::new(
            ErrorCode::CoachUnavailable,
            format!("coach turn failed: {}", source.message),
        )
        .with_source(source)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        match error.source() {
            Some(source) => Self::new(ErrorCode::InternalError, error.to_string()).with_details(
                serde_json::json!({
                    "source": source.to_string()
                }),
            ),
            None => Self::new(ErrorCode::InternalError, error.to_string()),
        }
    }
}
