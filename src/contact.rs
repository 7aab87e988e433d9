// ABOUTME: Office contact constants and WhatsApp deep-link construction
// ABOUTME: Builds wa.me links with a percent-encoded per-document inquiry message

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stampdesk

//! Contact details for the office and construction of WhatsApp inquiry
//! links. Links are plain `wa.me` URLs with the message percent-encoded in
//! the `text` query parameter; no messaging API is involved.

use crate::models::DocumentTemplate;

/// Primary office phone number, also the WhatsApp contact
pub const PRIMARY_PHONE: &str = "9422280256";

/// Secondary office phone number
pub const SECONDARY_PHONE: &str = "9422445252";

/// WhatsApp number in international format, used in `wa.me` links
const WHATSAPP_NUMBER: &str = "919422280256";

/// Build a WhatsApp deep link asking about a specific document type.
///
/// The message names the document in both English and Marathi so the office
/// sees exactly which catalog entry the inquiry concerns.
#[must_use]
pub fn whatsapp_link(template: &DocumentTemplate) -> String {
    let message = format!(
        "Hello, I need information about {} ({}).",
        template.kind.title(),
        template.marathi_label
    );
    format!(
        "https://wa.me/{WHATSAPP_NUMBER}?text={}",
        urlencoding::encode(&message)
    )
}
