// ABOUTME: Shared test fixtures: a scripted LLM provider with canned streamed replies
// ABOUTME: Lets wizard and assistant tests run fully offline with deterministic chunks

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stampdesk

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use stampdesk::errors::AppError;
use stampdesk::llm::{ChatRequest, ChatStream, LlmProvider, StreamChunk};

/// One canned reply, consumed per `complete_stream` call in order
pub enum ScriptedReply {
    /// Deliver these deltas in order, then end the stream cleanly
    Chunks(Vec<&'static str>),
    /// Fail before any stream is opened
    OpenError(&'static str),
    /// Deliver the prefix deltas, then fail mid-stream
    MidStreamError {
        prefix: Vec<&'static str>,
        message: &'static str,
    },
}

/// Deterministic in-process stand-in for the Gemini provider
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<ScriptedReply>>,
    requests: AtomicUsize,
    last_request: Mutex<Option<ChatRequest>>,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<ScriptedReply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            requests: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        })
    }

    /// Shorthand for a provider that streams one reply of the given chunks
    pub fn with_chunks(chunks: Vec<&'static str>) -> Arc<Self> {
        Self::new(vec![ScriptedReply::Chunks(chunks)])
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// The most recent request, for asserting on prompt assembly
    pub fn last_request(&self) -> Option<ChatRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn display_name(&self) -> &'static str {
        "Scripted"
    }

    fn default_model(&self) -> &str {
        "scripted-1"
    }

    async fn complete_stream(&self, request: &ChatRequest) -> Result<ChatStream, AppError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AppError::internal("No scripted reply remaining"))?;

        match reply {
            ScriptedReply::Chunks(chunks) => Ok(chunk_stream(&chunks, None)),
            ScriptedReply::OpenError(message) => {
                Err(AppError::external_service("Scripted", message))
            }
            ScriptedReply::MidStreamError { prefix, message } => {
                Ok(chunk_stream(&prefix, Some(message)))
            }
        }
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}

fn chunk_stream(chunks: &[&'static str], trailing_error: Option<&'static str>) -> ChatStream {
    let last = chunks.len().saturating_sub(1);
    let mut items: Vec<Result<StreamChunk, AppError>> = chunks
        .iter()
        .enumerate()
        .map(|(i, delta)| {
            let is_final = trailing_error.is_none() && i == last;
            Ok(StreamChunk {
                delta: (*delta).to_owned(),
                is_final,
                finish_reason: is_final.then(|| "STOP".to_owned()),
            })
        })
        .collect();
    if let Some(message) = trailing_error {
        items.push(Err(AppError::external_service("Scripted", message)));
    }
    Box::pin(tokio_stream::iter(items))
}
