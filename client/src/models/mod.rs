//! Domain models for the SnareShare upload workflow.
//!
//! - [`SelectedFile`] - Local file picked by the user (name, MIME type, bytes)
//! - [`UploadCredentials`] - Presigned upload/download URL pair
//! - [`AdFormData`] - Event-advertising form fields
//! - [`AdSubmission`] - Ad form plus the uploaded creative's URL

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_CONTENT_TYPE;

// =============================================================================
// Selected File
// =============================================================================

/// A file picked by the user.
///
/// The MIME type is whatever the picker reported; browsers report an
/// empty string for unknown types, which is treated as absent.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.filter(|m| !m.trim().is_empty()),
            bytes,
        }
    }

    /// Override the reported MIME type.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        let mime_type = mime_type.into();
        self.mime_type = Some(mime_type).filter(|m| !m.trim().is_empty());
        self
    }

    /// `Content-Type` for the storage PUT.
    pub fn content_type(&self) -> &str {
        self.mime_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Read a file from disk. No MIME type is guessed; the CLI passes
    /// `--content-type` explicitly or the default applies.
    #[cfg(feature = "native")]
    pub async fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, crate::error::SelectError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| crate::error::SelectError::NoFileName(path.display().to_string()))?
            .to_string();
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::new(name, None, bytes))
    }
}

// Bytes are left out so logs stay readable.
impl std::fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

// =============================================================================
// Upload Credentials
// =============================================================================

/// Presigned URL pair returned by `GET /api/get-presigned-url`.
///
/// Fetched fresh for every attempt and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadCredentials {
    /// Time-bounded write URL for the PUT
    pub upload_url: String,
    /// Read URL shown to the user once the PUT succeeds
    pub download_url: String,
}

// =============================================================================
// Ad Form
// =============================================================================

/// Event-advertising form fields.
///
/// Filled field by field from user input. Dates are kept as the
/// `YYYY-MM-DD` strings a date input yields; only the numeric fields
/// are typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdFormData {
    pub event_name: String,
    pub event_date: String,
    pub ticket_link: String,
    pub budget: Option<f64>,
    pub location: String,
    /// Targeting radius around `location`
    pub radius: Option<u32>,
    pub start_date: String,
    pub end_date: String,
    pub audience_tags: Vec<String>,
    pub audience_types: Vec<String>,
    pub conversion_type: String,
    pub page_source: String,
}

impl AdFormData {
    /// Attach the uploaded creative's URL.
    pub fn into_submission(self, creative_url: impl Into<String>) -> AdSubmission {
        AdSubmission {
            form: self,
            creative_url: creative_url.into(),
        }
    }
}

/// Body of `POST /api/ad-form`: the flattened form plus `creativeUrl`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdSubmission {
    #[serde(flatten)]
    pub form: AdFormData,
    pub creative_url: String,
}

/// Split a comma-separated input into trimmed, non-empty entries.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
