//! Error types for termsurface.
//!
//! Query paths (cell resolution, run encoding, word scans) are infallible
//! by design and degrade to filler cells; the only fallible operations are
//! the ones that establish dimensions.

use std::fmt;

/// Result type alias for termsurface operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for termsurface operations.
#[derive(Debug)]
pub enum Error {
    /// Session dimension error (zero rows or columns).
    InvalidDimensions { rows: u16, cols: u16 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "invalid dimensions: {rows}x{cols}")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions { rows: 0, cols: 80 };
        assert!(err.to_string().contains("0x80"));
    }
}
