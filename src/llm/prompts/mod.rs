// ABOUTME: Prompt assembly for the drafting and assistant collaborators
// ABOUTME: Builds the drafting instruction and loads the assistant system prompt at compile time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stampdesk

//! # Prompts
//!
//! The drafting prompt is assembled per request from the document type, the
//! collected field values, and the jurisdiction. The assistant system
//! instruction is fixed and loaded at compile time from a markdown file.

use crate::models::{DocumentKind, FormData};

/// Behavioral system instruction for the conversational assistant.
///
/// Constrains the assistant to informational-only bilingual replies and
/// redirects drafting or pricing requests to phone/WhatsApp contact.
pub const ASSISTANT_SYSTEM_PROMPT: &str = include_str!("assistant_system.md");

/// Build the drafting prompt for one generation session.
///
/// The collaborator is instructed to use professional terminology for the
/// stated jurisdiction, emit Markdown with bolded titles, mark missing but
/// legally required information with bracketed placeholders, include the
/// standard clauses for the document type, and skip conversational preamble.
#[must_use]
pub fn drafting_prompt(kind: DocumentKind, form: &FormData, region: &str) -> String {
    let details = serde_json::to_string_pretty(form).unwrap_or_else(|_| "{}".to_owned());

    format!(
        "You are an expert legal document drafter.\n\
         Create a comprehensive and legally sound {kind} for the region/jurisdiction of {region}.\n\
         \n\
         Here are the specific details provided by the user:\n\
         {details}\n\
         \n\
         Requirements:\n\
         1. Use professional legal terminology suitable for {region}.\n\
         2. Format the output using Markdown. Use bolding for titles and important clauses.\n\
         3. Include placeholders [LIKE THIS] for any information that might be missing but is legally required.\n\
         4. Ensure all standard clauses for a {kind} (e.g., Indemnity, Termination, Jurisdiction) are included.\n\
         5. Do not include any conversational preamble. Start directly with the document title.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drafting_prompt_carries_kind_region_and_fields() {
        let mut form = FormData::new();
        form.insert("donorName".to_owned(), "Asha Patil".to_owned());

        let prompt = drafting_prompt(DocumentKind::GiftDeed, &form, "Maharashtra, India");
        assert!(prompt.contains("Gift Deed"));
        assert!(prompt.contains("Maharashtra, India"));
        assert!(prompt.contains("Asha Patil"));
        assert!(prompt.contains("Markdown"));
        assert!(prompt.contains("[LIKE THIS]"));
    }

    #[test]
    fn test_assistant_system_prompt_redirects_drafting_requests() {
        assert!(ASSISTANT_SYSTEM_PROMPT.contains("9422280256"));
        assert!(ASSISTANT_SYSTEM_PROMPT.contains("WhatsApp"));
    }
}
