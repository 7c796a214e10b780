//! Shared types for the hrms service
//!
//! Wire models and the unified error/response types used by the
//! HTTP layer.

pub mod error;
pub mod models;

// Re-exports
pub use http;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
