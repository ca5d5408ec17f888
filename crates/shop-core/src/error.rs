//! # Error Types
//!
//! Domain-specific error types for shop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shop-core errors (this file)                                          │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input and catalog validation failures          │
//! │                                                                         │
//! │  shop-console errors (app crate)                                       │
//! │  └── ShopError        - Terminal I/O and closed input                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ShopError → main()                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors are enum variants, never `String`, and carry the offending field
//! so the message can be shown as-is.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while building a catalog and when the session checks a quantity
/// typed by the shopper.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. an item id with spaces).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g. two catalog items sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
