// ABOUTME: Core domain types for legal document templates and generated documents
// ABOUTME: Defines document kinds, field descriptors, bilingual info blocks, and output records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stampdesk

//! # Domain Models
//!
//! Data structures shared across the catalog, wizard, and assistant modules.
//! Templates are immutable static data; [`GeneratedDocument`] is the only
//! record created at runtime and is never mutated after construction.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// The ten legal document types the service drafts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    /// Transfer of property ownership from seller to buyer
    #[serde(rename = "Sale Deed")]
    SaleDeed,
    /// Voluntary transfer of property without consideration
    #[serde(rename = "Gift Deed")]
    GiftDeed,
    /// Declaration of wishes for property disposal after death
    #[serde(rename = "Will")]
    Will,
    /// Authorization for another person to act on one's behalf
    #[serde(rename = "Power of Attorney")]
    PowerOfAttorney,
    /// Rental contract between landlord and tenant
    #[serde(rename = "Lease Agreement")]
    LeaseAgreement,
    /// Loan secured against real property
    #[serde(rename = "Mortgage Agreement")]
    MortgageAgreement,
    /// Sworn written statement of fact
    #[serde(rename = "Affidavit")]
    Affidavit,
    /// Agreement between business partners
    #[serde(rename = "Partnership Agreement")]
    PartnershipAgreement,
    /// Short-term occupancy agreement
    #[serde(rename = "Tenancy Agreement")]
    TenancyAgreement,
    /// Agreement to combine resources for a specific project
    #[serde(rename = "Joint Venture Agreement")]
    JointVentureAgreement,
}

impl DocumentKind {
    /// All document kinds, in catalog display order
    pub const ALL: [Self; 10] = [
        Self::SaleDeed,
        Self::GiftDeed,
        Self::Will,
        Self::PowerOfAttorney,
        Self::LeaseAgreement,
        Self::MortgageAgreement,
        Self::Affidavit,
        Self::PartnershipAgreement,
        Self::TenancyAgreement,
        Self::JointVentureAgreement,
    ];

    /// English display title, also the route-parameter spelling
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::SaleDeed => "Sale Deed",
            Self::GiftDeed => "Gift Deed",
            Self::Will => "Will",
            Self::PowerOfAttorney => "Power of Attorney",
            Self::LeaseAgreement => "Lease Agreement",
            Self::MortgageAgreement => "Mortgage Agreement",
            Self::Affidavit => "Affidavit",
            Self::PartnershipAgreement => "Partnership Agreement",
            Self::TenancyAgreement => "Tenancy Agreement",
            Self::JointVentureAgreement => "Joint Venture Agreement",
        }
    }

    /// Position in [`Self::ALL`], used for catalog table indexing
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::SaleDeed => 0,
            Self::GiftDeed => 1,
            Self::Will => 2,
            Self::PowerOfAttorney => 3,
            Self::LeaseAgreement => 4,
            Self::MortgageAgreement => 5,
            Self::Affidavit => 6,
            Self::PartnershipAgreement => 7,
            Self::TenancyAgreement => 8,
            Self::JointVentureAgreement => 9,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for DocumentKind {
    type Err = AppError;

    /// Case-insensitive parse from a decoded route parameter
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.title().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AppError::not_found(format!("Document template '{trimmed}'")))
    }
}

/// Value kind of a single wizard input field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Short free text
    Text,
    /// Numeric value
    Number,
    /// Multi-line free text
    Textarea,
    /// Calendar date
    Date,
    /// One of a fixed set of choices
    Select,
}

/// Descriptor for one input the user must supply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentField {
    /// Stable field identifier, key into the form data map
    pub id: String,
    /// Display label
    pub label: String,
    /// Value kind tag
    pub kind: FieldKind,
    /// Enumerated choices, for [`FieldKind::Select`] fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Placeholder hint shown before the user types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Whether the field is marked required. Advisory only: the wizard never
    /// blocks draft generation on missing required fields.
    pub required: bool,
}

impl DocumentField {
    /// Shorthand for a required field without options or placeholder
    pub(crate) fn required(id: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            id: id.to_owned(),
            label: label.to_owned(),
            kind,
            options: None,
            placeholder: None,
            required: true,
        }
    }

    /// Attach a placeholder hint
    pub(crate) fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_owned());
        self
    }
}

/// Bilingual legal definition and required-paperwork checklist for a template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// Legal definition in Marathi
    pub marathi_definition: String,
    /// Legal definition in English
    pub english_definition: String,
    /// Checklist of paperwork required at the registrar's office
    pub requirements: Vec<String>,
}

/// Static descriptor for one document type: labels, pricing, input fields,
/// and the legal-requirements info block. Loaded once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentTemplate {
    /// The document type this template describes
    pub kind: DocumentKind,
    /// Marathi display label, e.g. "बक्षीस पत्र (Gift Deed)"
    pub marathi_label: String,
    /// Short English description
    pub description: String,
    /// Short Marathi description
    pub marathi_description: String,
    /// Fixed drafting price in dollars
    pub price: f64,
    /// Ordered input field descriptors
    pub fields: Vec<DocumentField>,
    /// Bilingual definition and requirements checklist
    pub info: DocumentInfo,
}

/// Flat consultation fee added to every document, in dollars
pub const CONSULTATION_FEE: f64 = 5.00;

impl DocumentTemplate {
    /// Total charge for this document: fixed price plus the flat
    /// consultation fee. Centralized here so no caller duplicates the fee.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.price + CONSULTATION_FEE
    }

    /// Whether `field_id` names one of this template's input fields
    #[must_use]
    pub fn has_field(&self, field_id: &str) -> bool {
        self.fields.iter().any(|f| f.id == field_id)
    }
}

/// User-entered field values, keyed by field id.
///
/// Keys are always a subset of the owning template's field ids; the wizard
/// enforces this on insert.
pub type FormData = BTreeMap<String, String>;

/// Lifecycle status of a generated document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentStatus {
    /// Draft text produced, payment not yet made
    Draft,
    /// Payment made, document not yet finalized
    Paid,
    /// Payment made and document finalized
    Completed,
}

/// The output record of one completed wizard session.
///
/// Created only at the moment the mock payment completes; immutable after
/// creation. Ownership passes to the caller, which may log or discard it —
/// no durable store exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedDocument {
    /// Generated identifier
    pub id: Uuid,
    /// Originating document type
    pub kind: DocumentKind,
    /// Display title, "<kind> - <date>"
    pub title: String,
    /// Full draft text (Markdown)
    pub content: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Lifecycle status
    pub status: DocumentStatus,
}

impl GeneratedDocument {
    /// Construct a completed document from an accumulated draft
    #[must_use]
    pub fn completed(kind: DocumentKind, content: String) -> Self {
        let created_at = Utc::now();
        Self {
            id: Uuid::new_v4(),
            kind,
            title: format!("{kind} - {}", created_at.format("%d/%m/%Y")),
            content,
            created_at,
            status: DocumentStatus::Completed,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_kind_parse_is_case_insensitive() {
        assert_eq!(
            "gift deed".parse::<DocumentKind>().unwrap(),
            DocumentKind::GiftDeed
        );
        assert_eq!(
            " Power of Attorney ".parse::<DocumentKind>().unwrap(),
            DocumentKind::PowerOfAttorney
        );
    }

    #[test]
    fn test_kind_parse_rejects_unknown() {
        assert!("Nonsense Deed".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn test_kind_serializes_as_display_title() {
        let json = serde_json::to_string(&DocumentKind::SaleDeed).unwrap();
        assert_eq!(json, "\"Sale Deed\"");
    }

    #[test]
    fn test_completed_document_carries_kind_and_status() {
        let doc = GeneratedDocument::completed(DocumentKind::Will, "# Will\n".to_owned());
        assert_eq!(doc.kind, DocumentKind::Will);
        assert_eq!(doc.status, DocumentStatus::Completed);
        assert!(doc.title.starts_with("Will - "));
    }

    #[test]
    fn test_index_matches_all_order() {
        for (position, kind) in DocumentKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.index(), position);
        }
    }
}
