//! Application configuration.
//!
//! Hardcoded per build, like the CLI defaults. The API origin is shared
//! with the `snareshare` crate so both surfaces talk to the same backend.

/// Backend API base URL.
pub use snareshare::config::API_BASE_URL;

/// Application name, shown in the page title.
pub const APP_NAME: &str = "SnareShare";

/// Tagline under the title.
pub const TAGLINE: &str = "Upload your Ableton project & drop it like a snare";

/// File types offered by the creative picker.
pub const CREATIVE_ACCEPT: &str = "image/*,video/*";
