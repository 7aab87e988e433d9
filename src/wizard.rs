// ABOUTME: Four-step document generation wizard: form, streamed preview, mock payment, success
// ABOUTME: Owns the form data and draft buffer exclusively and enforces one in-flight stream
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stampdesk

//! # Document Generation Wizard
//!
//! A strictly linear `Form → Preview → Payment → Success` flow with backward
//! transitions `Preview → Form` and `Payment → Preview`. The wizard collects
//! field values, requests a streamed draft from the injected
//! [`LlmProvider`], simulates a payment step, and hands a
//! [`GeneratedDocument`] back to the caller.
//!
//! All mutation goes through `&mut self`, so at most one generation stream
//! exists per wizard and no second writer can touch the draft buffer while
//! chunks are being applied. Dropping the wizard mid-stream abandons the
//! subscription; the underlying request is not cancelled server-side.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tokio_stream::StreamExt;
use tracing::{debug, info, warn};

use crate::artifact::DraftArtifact;
use crate::errors::{AppError, AppResult};
use crate::llm::{prompts, ChatMessage, ChatRequest, ChatStream, LlmProvider};
use crate::models::{
    DocumentTemplate, FormData, GeneratedDocument, CONSULTATION_FEE,
};

/// Fixed draft text substituted when the drafting request fails.
/// No automatic retry is attempted; the user may regenerate manually.
pub const GENERATION_FAILED_MESSAGE: &str = "Error generating document. Please try again.";

/// Default jurisdiction/region string, user-editable per session
pub const DEFAULT_REGION: &str = "Maharashtra, India";

/// Fixed delay simulating payment authorization
const PAYMENT_PROCESSING_DELAY: Duration = Duration::from_secs(2);

/// Wizard step, strictly linear forward with two permitted backward moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Collecting field values
    Form,
    /// Reviewing the streamed draft
    Preview,
    /// Mock payment
    Payment,
    /// Terminal for the session
    Success,
}

/// Itemized charge for the payment step, sourced from the catalog entry only
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBreakdown {
    /// Template's fixed drafting price
    pub base_price: f64,
    /// Flat consultation fee
    pub consultation_fee: f64,
    /// Sum of the above
    pub total: f64,
}

/// One document-generation session.
///
/// Constructed from a catalog template and an injected provider; owns its
/// form data, region, and draft buffer exclusively. Exiting (dropping) the
/// wizard discards all in-progress state.
pub struct DocumentWizard {
    template: &'static DocumentTemplate,
    provider: Arc<dyn LlmProvider>,
    step: WizardStep,
    form: FormData,
    region: String,
    draft: String,
    stream: Option<ChatStream>,
    processing_payment: bool,
}

impl DocumentWizard {
    /// Start a new wizard session at the `Form` step
    #[must_use]
    pub fn new(template: &'static DocumentTemplate, provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            template,
            provider,
            step: WizardStep::Form,
            form: FormData::new(),
            region: DEFAULT_REGION.to_owned(),
            draft: String::new(),
            stream: None,
            processing_payment: false,
        }
    }

    /// The template this session drafts
    #[must_use]
    pub fn template(&self) -> &'static DocumentTemplate {
        self.template
    }

    /// Current wizard step
    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    /// Whether a drafting stream is currently open
    #[must_use]
    pub const fn is_generating(&self) -> bool {
        self.stream.is_some()
    }

    /// Whether the mock payment timer is running
    #[must_use]
    pub const fn is_processing_payment(&self) -> bool {
        self.processing_payment
    }

    /// The accumulated draft text so far
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Collected field values
    #[must_use]
    pub const fn form(&self) -> &FormData {
        &self.form
    }

    /// Current jurisdiction/region string
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Replace the jurisdiction/region string
    pub fn set_region(&mut self, region: impl Into<String>) {
        self.region = region.into();
    }

    /// Record a field value.
    ///
    /// Field requiredness is advisory only and never checked here; unknown
    /// field ids are rejected so form keys stay a subset of the template's
    /// field ids.
    ///
    /// # Errors
    ///
    /// Returns an error if `field_id` is not one of the template's fields or
    /// the wizard has left the `Form` step.
    pub fn set_field(&mut self, field_id: &str, value: impl Into<String>) -> AppResult<()> {
        if self.step != WizardStep::Form {
            return Err(AppError::invalid_transition(
                "Field values can only be edited in the Form step",
            ));
        }
        if !self.template.has_field(field_id) {
            return Err(AppError::invalid_input(format!(
                "Unknown field '{field_id}' for {}",
                self.template.kind
            )));
        }
        self.form.insert(field_id.to_owned(), value.into());
        Ok(())
    }

    /// "Generate draft": move `Form → Preview` and open the drafting stream.
    ///
    /// Any previously accumulated draft is cleared before the first chunk of
    /// the new generation can arrive. If the stream cannot be opened, the
    /// draft is replaced with [`GENERATION_FAILED_MESSAGE`] and the wizard is
    /// left in `Preview`, not generating — the failure stays contained.
    ///
    /// # Errors
    ///
    /// Returns an error if called outside the `Form` step or while a prior
    /// generation stream is still open.
    pub async fn generate_draft(&mut self) -> AppResult<()> {
        if self.stream.is_some() {
            return Err(AppError::resource_locked(
                "A draft generation is already in progress",
            ));
        }
        if self.step != WizardStep::Form {
            return Err(AppError::invalid_transition(
                "Draft generation starts from the Form step",
            ));
        }

        self.draft.clear();
        self.step = WizardStep::Preview;

        let prompt = prompts::drafting_prompt(self.template.kind, &self.form, &self.region);
        let request = ChatRequest::new(vec![ChatMessage::user(prompt)]);

        debug!(kind = %self.template.kind, region = %self.region, "Opening drafting stream");

        match self.provider.complete_stream(&request).await {
            Ok(stream) => {
                self.stream = Some(stream);
            }
            Err(e) => {
                warn!(error = %e, "Drafting request failed to open");
                self.draft = GENERATION_FAILED_MESSAGE.to_owned();
            }
        }
        Ok(())
    }

    /// Apply the next incoming chunk to the draft buffer.
    ///
    /// Returns `true` while the stream remains open. On stream end the
    /// generating flag clears; on stream error the whole draft is replaced
    /// with [`GENERATION_FAILED_MESSAGE`] and the flag clears. Chunks are
    /// applied strictly in arrival order.
    pub async fn pump_draft(&mut self) -> bool {
        let Some(stream) = self.stream.as_mut() else {
            return false;
        };

        match stream.next().await {
            Some(Ok(chunk)) => {
                self.draft.push_str(&chunk.delta);
                true
            }
            Some(Err(e)) => {
                warn!(error = %e, "Drafting stream failed");
                self.draft = GENERATION_FAILED_MESSAGE.to_owned();
                self.stream = None;
                false
            }
            None => {
                debug!(draft_len = self.draft.len(), "Drafting stream complete");
                self.stream = None;
                false
            }
        }
    }

    /// Drive the drafting stream to completion, applying every chunk
    pub async fn await_draft(&mut self) {
        while self.pump_draft().await {}
    }

    /// "Edit details": move `Preview → Form`, keeping entered field values
    ///
    /// # Errors
    ///
    /// Returns an error outside the `Preview` step or while generating.
    pub fn edit_details(&mut self) -> AppResult<()> {
        if self.step != WizardStep::Preview {
            return Err(AppError::invalid_transition(
                "Editing details is only available from the Preview step",
            ));
        }
        if self.stream.is_some() {
            return Err(AppError::resource_locked(
                "Cannot edit details while the draft is generating",
            ));
        }
        self.step = WizardStep::Form;
        Ok(())
    }

    /// "Proceed": move `Preview → Payment`. Pure navigation, no side effect.
    ///
    /// # Errors
    ///
    /// Returns an error outside the `Preview` step or while generating.
    pub fn proceed_to_payment(&mut self) -> AppResult<()> {
        if self.step != WizardStep::Preview {
            return Err(AppError::invalid_transition(
                "Payment is only reachable from the Preview step",
            ));
        }
        if self.stream.is_some() {
            return Err(AppError::resource_locked(
                "Cannot proceed to payment while the draft is generating",
            ));
        }
        self.step = WizardStep::Payment;
        Ok(())
    }

    /// "Back to review": move `Payment → Preview`
    ///
    /// # Errors
    ///
    /// Returns an error outside the `Payment` step.
    pub fn back_to_review(&mut self) -> AppResult<()> {
        if self.step != WizardStep::Payment {
            return Err(AppError::invalid_transition(
                "Back-to-review is only available from the Payment step",
            ));
        }
        self.step = WizardStep::Preview;
        Ok(())
    }

    /// Itemized charge for this session, from the catalog entry only
    #[must_use]
    pub fn price_breakdown(&self) -> PriceBreakdown {
        PriceBreakdown {
            base_price: self.template.price,
            consultation_fee: CONSULTATION_FEE,
            total: self.template.total_price(),
        }
    }

    /// "Pay": simulate payment with a fixed delay, then move to `Success`
    /// and hand the completed document to the caller.
    ///
    /// This is a deliberate stand-in for a real payment-authorization
    /// exchange; it always succeeds after the delay. The exclusive `&mut`
    /// borrow rules out cancellation while processing, so no orphaned
    /// completion is possible.
    ///
    /// # Errors
    ///
    /// Returns an error outside the `Payment` step.
    pub async fn pay(&mut self) -> AppResult<GeneratedDocument> {
        if self.step != WizardStep::Payment {
            return Err(AppError::invalid_transition(
                "Payment is only available from the Payment step",
            ));
        }

        self.processing_payment = true;
        sleep(PAYMENT_PROCESSING_DELAY).await;
        self.processing_payment = false;
        self.step = WizardStep::Success;

        let document = GeneratedDocument::completed(self.template.kind, self.draft.clone());
        info!(kind = %document.kind, id = %document.id, "Document finalized");
        Ok(document)
    }

    /// Package the draft as a downloadable artifact. `Success` step only.
    ///
    /// # Errors
    ///
    /// Returns an error outside the `Success` step.
    pub fn download(&self) -> AppResult<DraftArtifact> {
        if self.step != WizardStep::Success {
            return Err(AppError::invalid_transition(
                "Download is only available from the Success step",
            ));
        }
        Ok(DraftArtifact::markdown(self.template.kind, &self.draft))
    }

    /// "Cancel": discard all in-progress form data and draft text.
    ///
    /// Consumes the wizard; an open stream is abandoned locally without
    /// server-side cancellation.
    pub fn cancel(self) {
        debug!(kind = %self.template.kind, step = ?self.step, "Wizard session cancelled");
    }
}
