//! Data models
//!
//! Wire (JSON) representations exchanged over the HTTP API.
//! IDs are MongoDB ObjectIds rendered as 24-char lowercase hex strings.

pub mod employee;

// Re-exports
pub use employee::*;
