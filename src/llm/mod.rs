// ABOUTME: Streaming LLM provider abstraction for the drafting and assistant collaborators
// ABOUTME: Defines the provider trait, chat message types, and the chunk stream contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stampdesk

//! # LLM Provider Interface
//!
//! Contract for the external text-generation collaborator. The wizard and the
//! assistant both receive an [`LlmProvider`] at construction time (dependency
//! injection), so tests substitute a scripted fake and production code uses
//! [`GeminiProvider`].
//!
//! Responses are long-lived asynchronous sequences of text chunks, not single
//! request/response calls. Dropping a [`ChatStream`] abandons the
//! subscription; no server-side cancellation is attempted.

pub mod gemini;
pub mod prompts;
pub mod sse;

pub use gemini::GeminiProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::pin::Pin;
use tokio_stream::Stream;

use crate::errors::AppError;

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction message
    System,
    /// User input message
    User,
    /// Assistant response message
    Assistant,
}

/// A single message in a chat transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant message
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

/// Configuration for a streamed generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation messages, system instruction first if present
    pub messages: Vec<ChatMessage>,
    /// Model identifier (provider-specific); provider default when `None`
    pub model: Option<String>,
    /// Temperature for response randomness
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Create a new request with messages
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
            temperature: None,
            max_tokens: None,
        }
    }

}

/// A chunk of a streaming response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamChunk {
    /// Content delta for this chunk
    pub delta: String,
    /// Whether this is the final chunk
    pub is_final: bool,
    /// Finish reason if final
    pub finish_reason: Option<String>,
}

/// Stream type for generation responses
pub type ChatStream = Pin<Box<dyn Stream<Item = Result<StreamChunk, AppError>> + Send>>;

/// The external text-generation collaborator.
///
/// One in-flight stream per owning component is the caller's responsibility;
/// the provider itself is stateless and may serve concurrent requests.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g. "gemini")
    fn name(&self) -> &'static str;

    /// Human-readable display name for the provider
    fn display_name(&self) -> &'static str;

    /// Default model used when the request does not name one
    fn default_model(&self) -> &str;

    /// Open a streaming generation request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be opened (network failure,
    /// rejected API key, rate limiting). Errors after the stream is open are
    /// delivered as `Err` items on the stream itself.
    async fn complete_stream(&self, request: &ChatRequest) -> Result<ChatStream, AppError>;

    /// Check that the provider is reachable and the API key is valid
    ///
    /// # Errors
    ///
    /// Returns an error if the health check request itself fails.
    async fn health_check(&self) -> Result<bool, AppError>;
}
