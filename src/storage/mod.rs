//! Read-only content storage.
//!
//! The whole portfolio lives in one JSON document that is loaded once at
//! startup. Loading is atomic: the caller gets a fully validated
//! [`ContentStore`] or an error, never a partial document.
//!
//! ## Required top-level keys
//!
//! `personal`, `skills`, `education`, `certifications`, `experience`,
//! `projects`, `social`. `publications` is optional.
//!
//! ## Components
//!
//! - [`ContentStore`]: load, validate and query the document
//! - [`SAMPLE_CONTENT`]: starter document written by `folio init`

mod content_store;

pub use content_store::{ContentStore, REQUIRED_KEYS};

/// Starter document written by `folio init`.
pub const SAMPLE_CONTENT: &str = include_str!("sample_content.json");
