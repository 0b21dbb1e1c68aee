//! # SnareShare - presigned-URL uploads
//!
//! Picks a local file, asks the backend for a presigned upload/download
//! URL pair, PUTs the bytes straight to object storage and hands back
//! the shareable link. The ad-campaign flow also posts an event form
//! with the link as its `creativeUrl`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ SelectedFile│────▶│ Orchestrator │────▶│   Backend   │────▶│  presign /  │
//! │  (+ form)   │     │ (state, 1 in │     │ (reqwest or │     │  storage /  │
//! │             │     │   flight)    │     │  gloo-net)  │     │  ad-form    │
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Build-time constants (API origin, paths, messages)
//! - [`error`] - Transport, step and trigger errors
//! - [`models`] - File, credentials and ad form types
//! - [`state`] - Upload session and phase machine
//! - [`api`] - `Backend` trait
//! - [`workflow`] - The credentials → PUT → POST sequence
//! - [`orchestrator`] - Session owner and reentrancy guard
//! - `http` - reqwest backend (`native` feature)

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Workflow
pub mod state;
pub mod api;
pub mod workflow;
pub mod orchestrator;

// HTTP client
#[cfg(feature = "native")]
pub mod http;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{
    API_BASE_URL,
    AD_FORM_PATH,
    PRESIGN_PATH,
    DEFAULT_CONTENT_TYPE,
    GENERIC_FAILURE_MESSAGE,
};

pub use error::{
    TransportError,
    UploadError,
    UploadStep,
    TriggerError,
    SelectError,
    TransportResult,
    UploadResult,
};

pub use models::{
    SelectedFile,
    UploadCredentials,
    AdFormData,
    AdSubmission,
};

pub use state::{UploadJob, UploadPhase, UploadSession};
pub use api::Backend;
pub use orchestrator::Orchestrator;

#[cfg(feature = "native")]
pub use http::HttpBackend;
