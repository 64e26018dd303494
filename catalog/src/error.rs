//! Error types for the catalog.

use crate::BookId;
use thiserror::Error;

/// All possible errors from the catalog manager.
#[derive(Debug, Error)]
pub enum Error {
    /// The operation target id is absent from the catalog. The store is
    /// left untouched.
    #[error("book not found: {0}")]
    BookNotFound(BookId),

    /// Unrecognized search field label. Distinct from a search that
    /// matched nothing.
    #[error("invalid search field: {0}")]
    InvalidSearchField(String),

    /// Non-numeric text where a book id is required.
    #[error("invalid book id: {0}")]
    InvalidId(String),

    /// The store file exists, is non-empty, and could not be decoded.
    #[error("malformed catalog store: {0}")]
    Parse(String),

    /// The store file could not be read or written.
    #[error("catalog store io: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::BookNotFound(42);
        assert_eq!(err.to_string(), "book not found: 42");

        let err = Error::InvalidSearchField("publisher".into());
        assert_eq!(err.to_string(), "invalid search field: publisher");

        let err = Error::InvalidId("abc".into());
        assert_eq!(err.to_string(), "invalid book id: abc");

        let err = Error::Parse("expected value at line 1".into());
        assert_eq!(
            err.to_string(),
            "malformed catalog store: expected value at line 1"
        );
    }
}
