// ABOUTME: Line-buffering SSE parser for streamed generation responses
// ABOUTME: Handles partial lines across TCP boundaries and multiple events per chunk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stampdesk

//! # SSE Stream Parsing
//!
//! Server-Sent Events framing for the streaming Gemini endpoint. Two
//! correctness concerns are handled here so the provider only parses JSON:
//!
//! 1. Multiple events may arrive batched in a single TCP chunk; all of them
//!    must be emitted, not just the first.
//! 2. A JSON payload may be split across TCP chunks; partial lines are
//!    buffered until the terminating newline arrives.

use std::collections::VecDeque;
use std::mem;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::stream::unfold;
use futures_util::{Stream, StreamExt};

use super::{ChatStream, StreamChunk};
use crate::errors::AppError;

/// Line buffer extracting `data:` payloads from an SSE byte stream.
///
/// SSE streams are newline-delimited; TCP does not align chunks with event
/// boundaries. Incomplete lines stay buffered until a full line is available.
#[derive(Debug, Default)]
pub struct SseLineBuffer {
    buffer: String,
}

impl SseLineBuffer {
    /// Create a new empty line buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed raw bytes from a TCP chunk, returning any complete `data:` payloads
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<String> {
        self.buffer.push_str(&String::from_utf8_lossy(bytes));

        let mut payloads = Vec::new();
        while let Some(newline_pos) = self.buffer.find('\n') {
            let line = self.buffer[..newline_pos].trim_end_matches('\r').to_owned();
            self.buffer = self.buffer[newline_pos + 1..].to_owned();

            if let Some(payload) = Self::parse_line(&line) {
                payloads.push(payload);
            }
        }
        payloads
    }

    /// Flush a trailing partial line when the byte stream ends
    pub fn flush(&mut self) -> Option<String> {
        let remaining = mem::take(&mut self.buffer);
        Self::parse_line(&remaining)
    }

    // Non-data SSE fields (event:, id:, retry:, comments) are ignored.
    fn parse_line(line: &str) -> Option<String> {
        let trimmed = line.trim();
        let data = trimmed.strip_prefix("data: ")?;
        if data.trim().is_empty() {
            return None;
        }
        Some(data.to_owned())
    }
}

/// Wrap a raw byte stream with SSE line buffering, converting each `data:`
/// payload into a [`StreamChunk`] via the provider-specific `parse_data`
/// closure. Returning `None` from the closure skips metadata-only events.
pub fn into_chunk_stream<S, F>(
    byte_stream: S,
    parse_data: F,
    provider_name: &'static str,
) -> ChatStream
where
    S: Stream<Item = Result<Bytes, reqwest::Error>> + Send + 'static,
    F: Fn(&str) -> Option<Result<StreamChunk, AppError>> + Send + 'static,
{
    struct State {
        parser: SseLineBuffer,
        pending: VecDeque<Result<StreamChunk, AppError>>,
        ended: bool,
    }

    let state = State {
        parser: SseLineBuffer::new(),
        pending: VecDeque::new(),
        ended: false,
    };

    // unfold keeps the parser state across async iterations: each turn either
    // drains a pending event or reads the next TCP chunk.
    let stream = unfold(
        (
            Box::pin(byte_stream)
                as Pin<Box<dyn Stream<Item = Result<Bytes, reqwest::Error>> + Send>>,
            state,
            parse_data,
        ),
        move |(mut byte_stream, mut state, parse_data)| async move {
            loop {
                if let Some(item) = state.pending.pop_front() {
                    return Some((item, (byte_stream, state, parse_data)));
                }
                if state.ended {
                    return None;
                }

                match byte_stream.next().await {
                    Some(Ok(bytes)) => {
                        for payload in state.parser.feed(&bytes) {
                            if let Some(result) = parse_data(&payload) {
                                state.pending.push_back(result);
                            }
                        }
                    }
                    Some(Err(e)) => {
                        state.ended = true;
                        return Some((
                            Err(AppError::external_service(
                                provider_name,
                                format!("Stream read error: {e}"),
                            )),
                            (byte_stream, state, parse_data),
                        ));
                    }
                    None => {
                        state.ended = true;
                        if let Some(payload) = state.parser.flush() {
                            if let Some(result) = parse_data(&payload) {
                                state.pending.push_back(result);
                            }
                        }
                    }
                }
            }
        },
    );

    Box::pin(stream)
}
