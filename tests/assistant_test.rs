// ABOUTME: Integration tests for the assistant chat session
// ABOUTME: Covers greeting, turn serialization, streamed replies, and in-transcript failures

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stampdesk

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::{ScriptedProvider, ScriptedReply};
use stampdesk::assistant::{AssistantSession, APOLOGY, GREETING};
use stampdesk::errors::ErrorCode;
use stampdesk::llm::MessageRole;

#[tokio::test]
async fn test_new_session_starts_with_greeting() {
    // Opening and closing sessions without sending always yields exactly
    // the seeded greeting
    for _ in 0..3 {
        let provider = ScriptedProvider::with_chunks(vec![]);
        let session = AssistantSession::new(provider);

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].role, MessageRole::Assistant);
        assert_eq!(transcript[0].content, GREETING);
        assert!(transcript[0].content.contains("नमस्कार"));
    }
}

#[tokio::test]
async fn test_reply_streams_into_transcript_in_order() {
    let provider = ScriptedProvider::with_chunks(vec![
        "Stamp duty on a Gift Deed in Maharashtra ",
        "is 3% of the property value.",
    ]);
    let mut session = AssistantSession::new(provider);

    session.send("What is the stamp duty for a gift deed?").await.unwrap();
    assert!(session.is_replying());
    session.await_reply().await;
    assert!(!session.is_replying());

    let transcript = session.transcript();
    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript[1].role, MessageRole::User);
    assert_eq!(transcript[1].content, "What is the stamp duty for a gift deed?");
    assert_eq!(
        transcript[2].content,
        "Stamp duty on a Gift Deed in Maharashtra is 3% of the property value."
    );
    assert_eq!(session.last_reply(), Some(transcript[2].content.as_str()));
}

#[tokio::test]
async fn test_request_carries_system_prompt_and_history() {
    let provider = ScriptedProvider::new(vec![
        ScriptedReply::Chunks(vec!["First answer."]),
        ScriptedReply::Chunks(vec!["Second answer."]),
    ]);
    let mut session = AssistantSession::new(provider.clone());

    session.send("First question").await.unwrap();
    session.await_reply().await;
    session.send("Second question").await.unwrap();
    session.await_reply().await;

    let request = provider.last_request().unwrap();
    // System instruction first, then greeting, first exchange, and the new turn
    assert_eq!(request.messages[0].role, MessageRole::System);
    assert!(request.messages[0].content.contains("CHAVHAN STAMP VENDOR"));
    assert_eq!(request.messages[1].content, GREETING);
    assert_eq!(request.messages[2].content, "First question");
    assert_eq!(request.messages[3].content, "First answer.");
    assert_eq!(request.messages.last().unwrap().content, "Second question");
}

#[tokio::test]
async fn test_empty_message_rejected_without_transcript_change() {
    let provider = ScriptedProvider::with_chunks(vec![]);
    let mut session = AssistantSession::new(provider.clone());

    let error = session.send("   ").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(session.transcript().len(), 1);
    assert_eq!(provider.request_count(), 0);
}

#[tokio::test]
async fn test_send_rejected_while_reply_is_streaming() {
    let provider = ScriptedProvider::with_chunks(vec!["a", "b"]);
    let mut session = AssistantSession::new(provider.clone());

    session.send("first").await.unwrap();
    let len_before = session.transcript().len();
    let error = session.send("second").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceLocked);
    assert_eq!(session.transcript().len(), len_before);
    assert_eq!(provider.request_count(), 1);
}

#[tokio::test]
async fn test_open_failure_becomes_apology() {
    let provider = ScriptedProvider::new(vec![
        ScriptedReply::OpenError("boom"),
        ScriptedReply::Chunks(vec!["Recovered."]),
    ]);
    let mut session = AssistantSession::new(provider);

    session.send("hello").await.unwrap();
    assert!(!session.is_replying());
    assert_eq!(session.last_reply(), Some(APOLOGY));

    // The session stays usable for the next turn
    session.send("hello again").await.unwrap();
    session.await_reply().await;
    assert_eq!(session.last_reply(), Some("Recovered."));
}

#[tokio::test]
async fn test_mid_stream_failure_replaces_partial_reply() {
    let provider = ScriptedProvider::new(vec![ScriptedReply::MidStreamError {
        prefix: vec!["Partial ans"],
        message: "connection reset",
    }]);
    let mut session = AssistantSession::new(provider);

    session.send("question").await.unwrap();
    session.await_reply().await;

    assert_eq!(session.last_reply(), Some(APOLOGY));
    assert!(!session.is_replying());
    // User turn is still recorded before the apology
    let transcript = session.transcript();
    assert_eq!(transcript[1].content, "question");
}
