//! Browser services.
//!
//! # Services
//!
//! - [`backend`] - gloo-net implementation of the upload `Backend`
//! - [`file`] - Reading picked files into memory

pub mod backend;
pub mod file;

pub use backend::*;
pub use file::*;
