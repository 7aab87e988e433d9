// ABOUTME: Conversational assistant session with a streamed bilingual transcript
// ABOUTME: Seeds a fixed greeting, serializes turns, and keeps stream failures in-transcript
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stampdesk

//! # Assistant Session
//!
//! One conversational session with the informational legal assistant. The
//! transcript starts with a fixed bilingual greeting, alternates user and
//! assistant turns, and grows the in-flight assistant reply incrementally as
//! stream chunks arrive. Turns are strictly serialized: a new user message is
//! rejected while a reply is still streaming.
//!
//! Transport and provider failures never surface to the caller as errors;
//! they land in the transcript as a fixed apology so the conversation can
//! simply continue.

use std::sync::Arc;

use tokio_stream::StreamExt;
use tracing::{debug, warn};

use crate::errors::{AppError, AppResult};
use crate::llm::{prompts, ChatMessage, ChatRequest, ChatStream, LlmProvider, MessageRole};

/// Fixed bilingual greeting seeding every new session transcript
pub const GREETING: &str = "Hello! I am your AI Legal Assistant. Ask me about documents, stamp duty, or requirements.\n\nनमस्कार! मी तुमचा AI कायदेशीर मदतनीस आहे. मला कागदपत्रांबद्दल किंवा स्टॅम्प ड्युटीबद्दल विचारा.";

/// Fixed reply substituted when the assistant stream fails
pub const APOLOGY: &str = "I apologize, but I encountered a temporary issue. Please try again.";

/// A conversational session with the assistant.
///
/// Owns its transcript exclusively; all mutation goes through `&mut self`,
/// so at most one reply stream exists at a time. Dropping the session
/// abandons any in-flight reply.
pub struct AssistantSession {
    provider: Arc<dyn LlmProvider>,
    transcript: Vec<ChatMessage>,
    stream: Option<ChatStream>,
}

impl AssistantSession {
    /// Open a new session with the greeting already in the transcript
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            transcript: vec![ChatMessage::assistant(GREETING)],
            stream: None,
        }
    }

    /// The visible transcript, greeting first, in chronological order.
    /// The system instruction is not part of the transcript.
    #[must_use]
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Whether an assistant reply is currently streaming
    #[must_use]
    pub const fn is_replying(&self) -> bool {
        self.stream.is_some()
    }

    /// Send a user message and open the reply stream.
    ///
    /// The request carries the system instruction, the prior transcript, and
    /// the new message, so the assistant sees full conversational context.
    /// The user message and an empty assistant placeholder are appended to
    /// the transcript; if the stream fails to open, the placeholder becomes
    /// the fixed [`APOLOGY`] and the session stays usable.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty (whitespace-only) message, leaving the
    /// transcript untouched, or while a previous reply is still streaming.
    pub async fn send(&mut self, message: &str) -> AppResult<()> {
        if self.stream.is_some() {
            return Err(AppError::resource_locked(
                "A reply is already being generated",
            ));
        }
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::invalid_input("Message must not be empty"));
        }

        let mut messages = Vec::with_capacity(self.transcript.len() + 2);
        messages.push(ChatMessage::system(prompts::ASSISTANT_SYSTEM_PROMPT));
        messages.extend(self.transcript.iter().cloned());
        messages.push(ChatMessage::user(message));
        let request = ChatRequest::new(messages);

        self.transcript.push(ChatMessage::user(message));

        debug!(turns = self.transcript.len(), "Opening assistant reply stream");

        match self.provider.complete_stream(&request).await {
            Ok(stream) => {
                self.transcript.push(ChatMessage::assistant(""));
                self.stream = Some(stream);
            }
            Err(e) => {
                warn!(error = %e, "Assistant request failed to open");
                self.transcript.push(ChatMessage::assistant(APOLOGY));
            }
        }
        Ok(())
    }

    /// Apply the next reply chunk to the in-progress assistant message.
    ///
    /// Returns `true` while the reply is still streaming. A mid-stream error
    /// replaces the partial reply with the fixed [`APOLOGY`]; the session
    /// remains usable for further turns either way.
    pub async fn pump(&mut self) -> bool {
        let Some(stream) = self.stream.as_mut() else {
            return false;
        };

        match stream.next().await {
            Some(Ok(chunk)) => {
                if let Some(reply) = self.transcript.last_mut() {
                    reply.content.push_str(&chunk.delta);
                }
                true
            }
            Some(Err(e)) => {
                warn!(error = %e, "Assistant reply stream failed");
                if let Some(reply) = self.transcript.last_mut() {
                    reply.content = APOLOGY.to_owned();
                }
                self.stream = None;
                false
            }
            None => {
                self.stream = None;
                false
            }
        }
    }

    /// Drive the current reply to completion, applying every chunk
    pub async fn await_reply(&mut self) {
        while self.pump().await {}
    }

    /// The most recent assistant reply, if any
    #[must_use]
    pub fn last_reply(&self) -> Option<&str> {
        self.transcript
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::Assistant)
            .map(|m| m.content.as_str())
    }
}
