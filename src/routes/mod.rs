// ABOUTME: Route module organization for the coach server HTTP endpoints
// ABOUTME: Each domain module contains route definitions and thin handler functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

//! Route modules for the coach server
//!
//! All operation routes are POST-only; any other method is rejected with
//! 405 by routing, before body parsing. Handlers are thin and delegate to
//! the plan and coach pipelines.

/// Coach conversation route
pub mod coach;
/// Health check and readiness routes
pub mod health;
/// Plan generation route
pub mod plan;

pub use coach::{CoachReplyResponse, CoachRoutes, SendMessageRequest};
pub use health::HealthRoutes;
pub use plan::PlanRoutes;
