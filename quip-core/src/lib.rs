//! Quip Core - Foundation types shared by the Quip client crates.
//!
//! This crate provides:
//! - Client configuration (access token, base URL, timeout)
//! - The unified error type returned by every client operation
//! - Optional console logging setup with tracing
//! - Common constants

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

// Re-export commonly used items at the crate root
pub use config::ClientConfig;
pub use error::{QuipError, QuipResult};
pub use logging::init_console_logging;
