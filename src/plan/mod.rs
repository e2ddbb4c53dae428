// ABOUTME: Plan generation module - prompt builder and generation client
// ABOUTME: One schema-constrained provider exchange turns a profile into a GeneratedPlan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

//! Plan generation pipeline
//!
//! `profile -> prompt builder -> generation client -> GeneratedPlan`.
//! Failure at any point discards the whole plan; the caller returns the
//! user to data entry rather than retrying.

mod generator;
mod prompt;

pub use generator::{PlanGenerator, PLAN_TEMPERATURE};
pub use prompt::{build_plan_prompt, NO_RESTRICTIONS_PLACEHOLDER};
