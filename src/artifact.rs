// ABOUTME: Downloadable draft artifact: markdown payload with a derived filename
// ABOUTME: Filename derives from the document title with spaces replaced by underscores

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stampdesk

//! Packaging of a finished draft for download. The artifact carries the raw
//! Markdown exactly as generated, a filename derived from the document
//! title, and a media type for delivery.

use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::models::DocumentKind;

/// Media type for Markdown draft downloads
pub const MARKDOWN_MEDIA_TYPE: &str = "text/markdown";

/// A finished draft packaged for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftArtifact {
    /// Derived file name, e.g. `Gift_Deed.md`
    pub filename: String,
    /// Raw Markdown content, byte-for-byte the generated draft
    pub content: String,
    /// MIME type for delivery
    pub media_type: &'static str,
}

impl DraftArtifact {
    /// Package a draft as a Markdown artifact. The filename is the document
    /// title with spaces replaced by underscores plus the `.md` extension.
    #[must_use]
    pub fn markdown(kind: DocumentKind, content: &str) -> Self {
        Self {
            filename: format!("{}.md", kind.title().replace(' ', "_")),
            content: content.to_owned(),
            media_type: MARKDOWN_MEDIA_TYPE,
        }
    }

    /// Write the artifact into `dir` under its derived filename, returning
    /// the full path written.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be written.
    pub fn save_to(&self, dir: &Path) -> AppResult<std::path::PathBuf> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.content).map_err(|e| {
            AppError::storage(format!("Failed to write {}", path.display())).with_source(e)
        })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_save_to_writes_derived_filename() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = DraftArtifact::markdown(DocumentKind::Will, "# Will\n");
        let path = artifact.save_to(dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "Will.md");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "# Will\n");
    }

    #[test]
    fn test_filename_replaces_spaces_with_underscores() {
        let artifact = DraftArtifact::markdown(DocumentKind::PowerOfAttorney, "# Draft");
        assert_eq!(artifact.filename, "Power_of_Attorney.md");
        assert_eq!(artifact.media_type, "text/markdown");
    }

    #[test]
    fn test_content_is_preserved_verbatim() {
        let draft = "# Gift Deed\n\n**THIS DEED** is made...";
        let artifact = DraftArtifact::markdown(DocumentKind::GiftDeed, draft);
        assert_eq!(artifact.content, draft);
    }
}
