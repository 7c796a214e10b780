//! Error codes for the hrms service
//!
//! Codes are grouped by range:
//! - 0xxx: General errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors

use std::fmt;

/// Unified error code enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Request body or path parameter could not be parsed
    InvalidFormat = 6,

    // ==================== 8xxx: Employee ====================
    /// No employee with the given identifier
    EmployeeNotFound = 8001,
    /// Update filter matched no employee document
    EmployeeNoMatch = 8002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Storage operation failed
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Numeric value of this code, as sent in the `code` field
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
