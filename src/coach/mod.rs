// ABOUTME: Coach conversation module - context seed assembly and session orchestration
// ABOUTME: Makes a stateless provider API behave like a plan-aware conversation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

//! Coach conversation pipeline
//!
//! `plan (or none) + history + new message -> context assembler -> coach
//! session -> reply`. The session holds no state between calls; the caller
//! owns and threads the history.

mod context;
mod session;

pub use context::{build_seed, NO_PLAN_CONTEXT, SEED_ACKNOWLEDGMENT};
pub use session::{CoachSession, COACH_FALLBACK_REPLY};
