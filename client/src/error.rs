//! Error types for the SnareShare upload workflow.
//!
//! - [`TransportError`] - what a [`crate::api::Backend`] reports for one HTTP call
//! - [`UploadError`] - which workflow step failed (credentials, transfer, submission)
//! - [`TriggerError`] - why a trigger was ignored without touching state
//! - [`SelectError`] - reading a local file failed (CLI only)
//!
//! `UploadError` keeps the step apart for logs and tests; the user only
//! ever sees [`crate::config::GENERIC_FAILURE_MESSAGE`].

use thiserror::Error;

use crate::config::GENERIC_FAILURE_MESSAGE;

// =============================================================================
// Transport Errors
// =============================================================================

/// Errors from a single HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Request could not be built or sent (DNS, connection, CORS...).
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// Server answered with a non-success status.
    #[error("Server error ({status}): {body}")]
    Status { status: u16, body: String },

    /// Response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

// =============================================================================
// Workflow Errors
// =============================================================================

/// The workflow step an [`UploadError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStep {
    Credentials,
    Transfer,
    Submission,
}

impl UploadStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadStep::Credentials => "credentials",
            UploadStep::Transfer => "transfer",
            UploadStep::Submission => "submission",
        }
    }
}

/// A failed upload attempt, tagged with the step that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Fetching the presigned URL pair failed.
    #[error("Credential request failed: {0}")]
    Credential(#[source] TransportError),

    /// PUT to object storage failed.
    #[error("Storage transfer failed: {0}")]
    Transfer(#[source] TransportError),

    /// POST of the ad form failed.
    #[error("Ad form submission failed: {0}")]
    Submission(#[source] TransportError),
}

impl UploadError {
    /// Step that produced this error.
    pub fn step(&self) -> UploadStep {
        match self {
            UploadError::Credential(_) => UploadStep::Credentials,
            UploadError::Transfer(_) => UploadStep::Transfer,
            UploadError::Submission(_) => UploadStep::Submission,
        }
    }

    /// Underlying transport failure.
    pub fn transport(&self) -> &TransportError {
        match self {
            UploadError::Credential(e) | UploadError::Transfer(e) | UploadError::Submission(e) => e,
        }
    }

    /// Text shown to the user, whatever the step.
    pub fn user_message(&self) -> &'static str {
        GENERIC_FAILURE_MESSAGE
    }
}

// =============================================================================
// Trigger Errors
// =============================================================================

/// Reasons a trigger was a no-op. State is untouched in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TriggerError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("An upload is already in progress")]
    AlreadyInFlight,
}

// =============================================================================
// Selection Errors
// =============================================================================

/// Errors while reading a local file into a [`crate::models::SelectedFile`].
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path has no file name: {0}")]
    NoFileName(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for backend calls.
pub type TransportResult<T> = Result<T, TransportError>;

/// Result type for a full workflow run.
pub type UploadResult<T> = Result<T, UploadError>;
