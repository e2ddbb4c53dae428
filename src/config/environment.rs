// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

//! Environment-based configuration management
//!
//! Configuration is environment-only: no config files, every knob is a
//! deployment variable with a sensible default. The provider credential is
//! deliberately NOT read here; it stays inside the provider so a missing
//! key surfaces as a request-time `CONFIG_MISSING` failure rather than a
//! startup crash.

use serde::{Deserialize, Serialize};
use std::env;

use crate::errors::{AppError, AppResult};

/// Default HTTP port
const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default bind host
const DEFAULT_HOST: &str = "0.0.0.0";

/// Default per-request timeout applied at the HTTP layer, seconds
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Environment type selecting logging defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// LLM-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Model identifier override (`COACH_LLM_MODEL`); provider default if absent
    pub model: Option<String>,
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host (`HOST`)
    pub host: String,
    /// HTTP API port (`HTTP_PORT`)
    pub http_port: u16,
    /// Log level (`LOG_LEVEL`)
    pub log_level: LogLevel,
    /// Deployment environment (`ENVIRONMENT`)
    pub environment: Environment,
    /// Per-request timeout at the HTTP layer, seconds (`REQUEST_TIMEOUT_SECS`)
    pub request_timeout_secs: u64,
    /// LLM configuration
    pub llm: LlmConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse (e.g. a
    /// non-numeric port).
    pub fn from_env() -> AppResult<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|e| AppError::config(format!("invalid HTTP_PORT '{value}': {e}")))?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let request_timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(value) => value.parse::<u64>().map_err(|e| {
                AppError::config(format!("invalid REQUEST_TIMEOUT_SECS '{value}': {e}"))
            })?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_owned()),
            http_port,
            log_level: LogLevel::from_str_or_default(
                &env::var("LOG_LEVEL").unwrap_or_default(),
            ),
            environment: Environment::from_str_or_default(
                &env::var("ENVIRONMENT").unwrap_or_default(),
            ),
            request_timeout_secs,
            llm: LlmConfig {
                model: env::var("COACH_LLM_MODEL").ok(),
            },
        })
    }

    /// One-line summary suitable for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "host={} http_port={} environment={} log_level={} llm_model={}",
            self.host,
            self.http_port,
            self.environment,
            self.log_level,
            self.llm.model.as_deref().unwrap_or("(provider default)"),
        )
    }
}
