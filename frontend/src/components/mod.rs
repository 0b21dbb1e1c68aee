//! UI Components for SnareShare.
//!
//! # Layout Components
//! - [`Hero`] - Title and tagline
//! - [`Footer`] - Navigation and "coming soon" note
//!
//! # Feature Components
//! - [`UploadPanel`] - File picker, upload button, link and error
//! - [`ShareLink`] - Shareable download link
//! - [`AdFormFields`] - Event-advertising form

mod hero;
mod upload;
mod ad_form;
mod footer;

pub use hero::*;
pub use upload::*;
pub use ad_form::*;
pub use footer::*;
