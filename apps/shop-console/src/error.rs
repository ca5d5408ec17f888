//! # Console Error Type
//!
//! Everything that can stop the session loop early.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shopper mistakes (bad number, unknown id, qty 0, bad menu choice)      │
//! │      → handled on screen, never become a ShopError                      │
//! │                                                                         │
//! │  ShopError::InputClosed  → session ends quietly, exit code 0            │
//! │  ShopError::Io           → session aborts, exit code 1                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use thiserror::Error;

/// Errors raised by the console front end.
#[derive(Debug, Error)]
pub enum ShopError {
    /// Reading from or writing to the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The input stream ended while a prompt was waiting.
    #[error("Input closed")]
    InputClosed,
}

/// Convenience type alias for Results with ShopError.
pub type ShopResult<T> = Result<T, ShopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let err: ShopError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, ShopError::Io(_)));
        assert_eq!(err.to_string(), "Terminal I/O failed: pipe closed");
    }
}
