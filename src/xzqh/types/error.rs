//! Error types for the xzqh-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum XzqhError {
    /// An error originating from I/O operations (loading the data file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The buffer does not start with the expected schema tag.
    #[error("Bad magic: expected {expected:?}, found {found:?}")]
    BadMagic { expected: [u8; 4], found: [u8; 4] },

    /// The buffer was written by a newer, unknown encoder.
    #[error("Unsupported format version: {0}")]
    UnsupportedVersion(u16),

    /// An offset or length points outside the buffer.
    #[error("Out of bounds reading {context}: offset {offset} + {len} bytes exceeds buffer of {buffer_len} bytes")]
    OutOfBounds {
        context: &'static str,
        offset: u64,
        len: u64,
        buffer_len: u64,
    },

    /// A string field does not hold valid UTF-8.
    #[error("Invalid UTF-8 in string at offset {offset}")]
    InvalidUtf8 { offset: u64 },

    /// A region table has an empty name.
    #[error("Region at offset {offset} has an empty name")]
    EmptyName { offset: u64 },

    /// A declared count of items does not match the actual number of items found.
    #[error("Count mismatch for {item_type}: expected {expected}, but found {found}")]
    CountMismatch {
        item_type: &'static str,
        expected: u64,
        found: u64,
    },

    /// The buffer is structurally invalid in a way not covered above.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Encoding a binding record as JSON failed.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl XzqhError {
    /// Returns `true` if the error means the buffer failed verification.
    pub fn is_structural(&self) -> bool {
        !matches!(self, XzqhError::Io(_) | XzqhError::Json(_))
    }
}

/// A convenience `Result` type alias using the crate's `XzqhError` type.
pub type Result<T> = std::result::Result<T, XzqhError>;
