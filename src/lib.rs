// ABOUTME: Library root for stampdesk, a bilingual legal-document drafting service
// ABOUTME: Catalog, generation wizard, assistant chat, Gemini streaming, and contact links

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stampdesk

//! # Stampdesk
//!
//! Core library for a legal-documentation service: a bilingual
//! (English/Marathi) catalog of document templates, a four-step document
//! generation wizard that streams AI-assisted drafts, a conversational
//! assistant for informational questions, and WhatsApp contact links for
//! everything the software deliberately does not do itself.
//!
//! ## Architecture
//!
//! - **[`catalog`]**: static template catalog, search and lookup
//! - **[`wizard`]**: `Form → Preview → Payment → Success` generation flow
//! - **[`assistant`]**: streamed conversational assistant sessions
//! - **[`llm`]**: provider trait, Gemini implementation, SSE parsing, prompts
//! - **[`artifact`]**: packaging finished drafts for download
//! - **[`contact`]**: office phone numbers and WhatsApp deep links
//!
//! The wizard and assistant receive their [`llm::LlmProvider`] by injection,
//! so tests drive them with scripted fakes and never touch the network.

pub mod artifact;
pub mod assistant;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod errors;
pub mod llm;
pub mod logging;
pub mod models;
pub mod wizard;

pub use artifact::DraftArtifact;
pub use assistant::AssistantSession;
pub use config::ServiceConfig;
pub use errors::{AppError, AppResult, ErrorCode};
pub use llm::{GeminiProvider, LlmProvider};
pub use models::{
    DocumentKind, DocumentTemplate, FormData, GeneratedDocument, CONSULTATION_FEE,
};
pub use wizard::{DocumentWizard, WizardStep};
