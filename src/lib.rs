// ABOUTME: Main library entry point for the BodyRecomp coaching backend
// ABOUTME: Provides schema-constrained plan generation and AI coach chat over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

#![deny(unsafe_code)]

//! # BodyRecomp Coach Server
//!
//! A server-side relay between a fitness onboarding client and Google Gemini.
//! It turns a user's physical profile into a structured nutrition/workout
//! plan via schema-constrained generation, and runs a context-seeded coach
//! conversation on top of that plan.
//!
//! ## Architecture
//!
//! - **Models**: Profile, plan, and chat message data structures
//! - **Schema**: Declarative response shapes for structured generation
//! - **LLM**: Provider abstraction and the Gemini implementation
//! - **Plan**: Prompt builder and generation client
//! - **Coach**: Context assembler and conversational session
//! - **Routes**: Axum HTTP handlers for the client-facing boundary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recomp_coach_server::config::environment::ServerConfig;
//! use recomp_coach_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Coach server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Coach conversation: context seed assembly and session orchestration
pub mod coach;

/// Environment-based configuration management
pub mod config;

/// Unified error handling with typed error codes
pub mod errors;

/// LLM provider abstraction and the Gemini implementation
pub mod llm;

/// Logging configuration and structured logging setup
pub mod logging;

/// Profile, plan, and chat data structures
pub mod models;

/// Plan generation: prompt builder and generation client
pub mod plan;

/// `HTTP` route handlers for the client-facing boundary
pub mod routes;

/// Declarative response shapes for structured generation
pub mod schema;

/// Server resources and axum application wiring
pub mod server;
