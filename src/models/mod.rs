// ABOUTME: Data model module organization for profile, plan, and chat structures
// ABOUTME: Wire formats follow the original client contract (camelCase, pt-BR enum labels)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

//! Domain data structures
//!
//! Every entity here is shaped by the schema registry: a provider response
//! that does not deserialize into these types is rejected wholesale rather
//! than silently defaulted.

mod chat;
mod plan;
mod profile;

pub use chat::{ChatHistory, ChatMessage, ChatRole};
pub use plan::{Exercise, GeneratedPlan, MacroTarget, Meal, MealItem, WorkoutSession};
pub use profile::{ActivityLevel, Gender, Goal, TrainingEnvironment, UserProfile};
