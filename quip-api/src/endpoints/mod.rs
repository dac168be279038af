//! API endpoint modules organized by resource.
//!
//! Each module adds typed methods on `ApiClient` for a group of related endpoints.

pub mod blobs;
pub mod folders;
pub mod messages;
pub mod threads;
pub mod users;
