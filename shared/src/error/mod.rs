//! Unified error system for the hrms service
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`ErrorCategory`]: Classification of errors by code range
//! - [`AppError`]: Error type carrying a code, message and optional details
//! - [`ApiResponse`]: JSON envelope used for error bodies
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors (malformed input)
//! - 8xxx: Employee errors
//! - 9xxx: System errors (storage, internal)
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::with_message(ErrorCode::EmployeeNotFound, "no employee deleted");
//! assert_eq!(err.http_status(), shared::http::StatusCode::NOT_FOUND);
//!
//! let err = AppError::invalid_format("invalid ObjectId: abc")
//!     .with_detail("id", "abc");
//! let body = ApiResponse::error(&err);
//! assert_eq!(body.message, "invalid ObjectId: abc");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::ErrorCode;
pub use types::{ApiResponse, AppError, AppResult};
