//! Quip API - HTTP client for the Quip platform REST API.
//!
//! This crate provides a typed async client covering threads and documents,
//! blobs, messages, folders, and users. Every call carries the bearer token,
//! honours the configured timeout, and returns the platform's JSON payload
//! untouched as a `serde_json::Value` (or raw bytes for blob downloads).

pub mod client;
pub mod endpoints;
pub mod form;

// Re-export key types
pub use client::ApiClient;
pub use endpoints::folders::NewFolderOptions;
pub use endpoints::threads::{
    DocumentFormat, EditDocumentOptions, EditLocation, NewDocumentOptions,
};
pub use form::{join_ids, FormFields};
pub use quip_core::{ClientConfig, QuipError, QuipResult};
