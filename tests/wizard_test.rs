// ABOUTME: Integration tests for the document generation wizard state machine
// ABOUTME: Covers the full happy path, transition guards, and contained stream failures

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stampdesk

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]

mod common;

use common::{ScriptedProvider, ScriptedReply};
use stampdesk::catalog;
use stampdesk::errors::ErrorCode;
use stampdesk::models::{DocumentKind, DocumentStatus};
use stampdesk::wizard::{DocumentWizard, WizardStep, GENERATION_FAILED_MESSAGE};

fn gift_deed_wizard(provider: std::sync::Arc<ScriptedProvider>) -> DocumentWizard {
    DocumentWizard::new(catalog::template(DocumentKind::GiftDeed), provider)
}

#[tokio::test(start_paused = true)]
async fn test_full_gift_deed_flow() {
    let provider = ScriptedProvider::with_chunks(vec![
        "# Gift Deed\n",
        "This deed of gift is made between **Asha Patil** and **Rohan Patil**.",
    ]);
    let mut wizard = gift_deed_wizard(provider.clone());

    assert_eq!(wizard.step(), WizardStep::Form);
    wizard.set_field("donorName", "Asha Patil").unwrap();
    wizard.set_field("doneeName", "Rohan Patil").unwrap();
    wizard.set_field("relationship", "Mother and son").unwrap();

    wizard.generate_draft().await.unwrap();
    assert_eq!(wizard.step(), WizardStep::Preview);
    assert!(wizard.is_generating());
    wizard.await_draft().await;
    assert!(!wizard.is_generating());
    assert_eq!(
        wizard.draft(),
        "# Gift Deed\nThis deed of gift is made between **Asha Patil** and **Rohan Patil**."
    );

    let breakdown = wizard.price_breakdown();
    assert!((breakdown.base_price - 29.99).abs() < 1e-9);
    assert!((breakdown.consultation_fee - 5.00).abs() < 1e-9);
    assert!((breakdown.total - 34.99).abs() < 1e-9);

    wizard.proceed_to_payment().unwrap();
    assert_eq!(wizard.step(), WizardStep::Payment);

    // Paused time: the 2s payment delay elapses instantly
    let document = wizard.pay().await.unwrap();
    assert_eq!(wizard.step(), WizardStep::Success);
    assert_eq!(document.kind, DocumentKind::GiftDeed);
    assert_eq!(document.status, DocumentStatus::Completed);
    assert!(document.title.starts_with("Gift Deed - "));
    assert_eq!(document.content, wizard.draft());

    let artifact = wizard.download().unwrap();
    assert_eq!(artifact.filename, "Gift_Deed.md");
    assert_eq!(artifact.media_type, "text/markdown");
    assert_eq!(artifact.content, wizard.draft());

    assert_eq!(provider.request_count(), 1);
}

#[tokio::test]
async fn test_drafting_prompt_carries_form_and_region() {
    let provider = ScriptedProvider::with_chunks(vec!["draft"]);
    let mut wizard = gift_deed_wizard(provider.clone());

    wizard.set_field("donorName", "Asha Patil").unwrap();
    wizard.set_region("Goa, India");
    wizard.generate_draft().await.unwrap();

    let request = provider.last_request().unwrap();
    assert_eq!(request.messages.len(), 1);
    let prompt = &request.messages[0].content;
    assert!(prompt.contains("Gift Deed"));
    assert!(prompt.contains("Goa, India"));
    assert!(prompt.contains("Asha Patil"));
}

#[tokio::test]
async fn test_unknown_field_rejected() {
    let provider = ScriptedProvider::with_chunks(vec![]);
    let mut wizard = gift_deed_wizard(provider);

    let error = wizard.set_field("sellerName", "x").unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(wizard.form().is_empty());
}

#[tokio::test]
async fn test_generation_allowed_with_missing_required_fields() {
    // Requiredness is advisory: generation proceeds with a partial form
    let provider = ScriptedProvider::with_chunks(vec!["partial draft"]);
    let mut wizard = gift_deed_wizard(provider);

    wizard.set_field("donorName", "Asha Patil").unwrap();
    wizard.generate_draft().await.unwrap();
    wizard.await_draft().await;
    assert_eq!(wizard.draft(), "partial draft");
}

#[tokio::test]
async fn test_second_generation_rejected_while_streaming() {
    let provider = ScriptedProvider::new(vec![
        ScriptedReply::Chunks(vec!["a", "b"]),
        ScriptedReply::Chunks(vec!["never reached"]),
    ]);
    let mut wizard = gift_deed_wizard(provider.clone());

    wizard.generate_draft().await.unwrap();
    assert!(wizard.is_generating());

    let error = wizard.generate_draft().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceLocked);
    assert_eq!(provider.request_count(), 1);
}

#[tokio::test]
async fn test_navigation_blocked_while_generating() {
    let provider = ScriptedProvider::with_chunks(vec!["a", "b"]);
    let mut wizard = gift_deed_wizard(provider);

    wizard.generate_draft().await.unwrap();
    assert_eq!(
        wizard.proceed_to_payment().unwrap_err().code,
        ErrorCode::ResourceLocked
    );
    assert_eq!(
        wizard.edit_details().unwrap_err().code,
        ErrorCode::ResourceLocked
    );
}

#[tokio::test]
async fn test_open_failure_is_contained() {
    let provider = ScriptedProvider::new(vec![ScriptedReply::OpenError("boom")]);
    let mut wizard = gift_deed_wizard(provider);

    // The call itself succeeds; the failure lands in the draft text
    wizard.generate_draft().await.unwrap();
    assert_eq!(wizard.step(), WizardStep::Preview);
    assert!(!wizard.is_generating());
    assert_eq!(wizard.draft(), GENERATION_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_mid_stream_failure_replaces_partial_draft() {
    let provider = ScriptedProvider::new(vec![ScriptedReply::MidStreamError {
        prefix: vec!["# Gift Deed\n", "This deed"],
        message: "connection reset",
    }]);
    let mut wizard = gift_deed_wizard(provider);

    wizard.generate_draft().await.unwrap();
    wizard.await_draft().await;

    assert_eq!(wizard.draft(), GENERATION_FAILED_MESSAGE);
    assert!(!wizard.is_generating());
    assert_eq!(wizard.step(), WizardStep::Preview);

    // Once generation has ended, even in failure, navigation unlocks
    wizard.proceed_to_payment().unwrap();
    assert_eq!(wizard.step(), WizardStep::Payment);
}

#[tokio::test]
async fn test_regeneration_after_failure_succeeds() {
    let provider = ScriptedProvider::new(vec![
        ScriptedReply::OpenError("boom"),
        ScriptedReply::Chunks(vec!["# Gift Deed\n"]),
    ]);
    let mut wizard = gift_deed_wizard(provider);

    wizard.generate_draft().await.unwrap();
    assert_eq!(wizard.draft(), GENERATION_FAILED_MESSAGE);

    wizard.edit_details().unwrap();
    wizard.generate_draft().await.unwrap();
    wizard.await_draft().await;
    assert_eq!(wizard.draft(), "# Gift Deed\n");
}

#[tokio::test]
async fn test_edit_details_preserves_form_and_regeneration_clears_draft() {
    let provider = ScriptedProvider::new(vec![
        ScriptedReply::Chunks(vec!["first draft"]),
        ScriptedReply::Chunks(vec!["second draft"]),
    ]);
    let mut wizard = gift_deed_wizard(provider);

    wizard.set_field("donorName", "Asha Patil").unwrap();
    wizard.generate_draft().await.unwrap();
    wizard.await_draft().await;
    assert_eq!(wizard.draft(), "first draft");

    wizard.edit_details().unwrap();
    assert_eq!(wizard.step(), WizardStep::Form);
    assert_eq!(wizard.form().get("donorName").unwrap(), "Asha Patil");

    wizard.generate_draft().await.unwrap();
    wizard.await_draft().await;
    assert_eq!(wizard.draft(), "second draft");
}

#[tokio::test(start_paused = true)]
async fn test_back_to_review_and_repay() {
    let provider = ScriptedProvider::with_chunks(vec!["draft"]);
    let mut wizard = gift_deed_wizard(provider);

    wizard.generate_draft().await.unwrap();
    wizard.await_draft().await;
    wizard.proceed_to_payment().unwrap();

    wizard.back_to_review().unwrap();
    assert_eq!(wizard.step(), WizardStep::Preview);
    // The draft survives the round trip
    assert_eq!(wizard.draft(), "draft");

    wizard.proceed_to_payment().unwrap();
    let document = wizard.pay().await.unwrap();
    assert_eq!(document.content, "draft");
}

#[tokio::test]
async fn test_transition_guards() {
    let provider = ScriptedProvider::with_chunks(vec!["draft"]);
    let mut wizard = gift_deed_wizard(provider);

    // Form step: only generation and field edits are legal
    assert_eq!(
        wizard.proceed_to_payment().unwrap_err().code,
        ErrorCode::InvalidTransition
    );
    assert_eq!(
        wizard.back_to_review().unwrap_err().code,
        ErrorCode::InvalidTransition
    );
    assert_eq!(wizard.pay().await.unwrap_err().code, ErrorCode::InvalidTransition);
    assert_eq!(wizard.download().unwrap_err().code, ErrorCode::InvalidTransition);

    wizard.generate_draft().await.unwrap();
    wizard.await_draft().await;

    // Preview step: no field edits, no generation restart, no payment yet
    assert_eq!(
        wizard.set_field("donorName", "x").unwrap_err().code,
        ErrorCode::InvalidTransition
    );
    assert_eq!(
        wizard.generate_draft().await.unwrap_err().code,
        ErrorCode::InvalidTransition
    );
    assert_eq!(wizard.pay().await.unwrap_err().code, ErrorCode::InvalidTransition);
}
