// ABOUTME: Chat message and history types for the coach conversation
// ABOUTME: History is caller-owned, append-only, and replayed verbatim each turn
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BodyRecomp

use serde::{Deserialize, Serialize};

/// Role of a message in the coach conversation
///
/// Only user and model turns appear in history; the system instruction is
/// carried out-of-band on the provider request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// End-user input
    User,
    /// Provider reply
    Model,
}

impl ChatRole {
    /// Wire representation used by the provider API
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

/// A single message in the coach conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: ChatRole,
    /// Message text
    pub text: String,
}

impl ChatMessage {
    /// Create a new chat message
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    /// Create a user message
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    /// Create a model message
    pub fn model(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Model, text)
    }
}

/// Ordered conversation history, owned and threaded by the caller
///
/// Insertion order is conversational order and is significant: the core
/// replays it verbatim to the provider on every turn and never mutates it
/// in place.
pub type ChatHistory = Vec<ChatMessage>;
