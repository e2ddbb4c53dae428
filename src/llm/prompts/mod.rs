// ABOUTME: System prompts for LLM interactions loaded at compile time
// ABOUTME: Provides the coach persona system instruction for Gemini chat completion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

//! # System Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy
//! maintenance.

/// BodyRecomp coach persona system instruction (pt-BR)
///
/// Defines the coach's role, tone, and language for every conversational
/// turn. Sent out-of-band as the provider's system instruction, never as
/// part of the visible history.
pub const COACH_SYSTEM_PROMPT: &str = include_str!("coach_system.md");

/// Get the system instruction for the coach conversation
#[must_use]
pub const fn get_coach_system_prompt() -> &'static str {
    COACH_SYSTEM_PROMPT
}
