//! Book record types.

use crate::BookId;
use serde::{Deserialize, Serialize};

/// Status value for a book that is on the shelf.
pub const STATUS_AVAILABLE: &str = "available";

/// Status value for a book that has been lent out.
pub const STATUS_CHECKED_OUT: &str = "checked-out";

/// One entry in the catalog.
///
/// The store holds exactly these five fields per book. `year` is free-form
/// text, not validated as numeric. `status` is an open string: the two
/// recognized values are [`STATUS_AVAILABLE`] and [`STATUS_CHECKED_OUT`],
/// but anything written by a caller round-trips untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Book {
    /// Unique identifier, assigned as max existing id + 1
    pub id: BookId,
    /// Book title
    pub title: String,
    /// Book author
    pub author: String,
    /// Publication year, stored as free-form text
    pub year: String,
    /// Availability status
    pub status: String,
}

impl Book {
    /// Create a new book with status [`STATUS_AVAILABLE`].
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year: year.into(),
            status: STATUS_AVAILABLE.to_string(),
        }
    }

    /// Check whether the book carries the recognized "available" status.
    pub fn is_available(&self) -> bool {
        self.status == STATUS_AVAILABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_book() {
        let book = Book::new(1, "Dune", "Herbert", "1965");

        assert_eq!(book.id, 1);
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Herbert");
        assert_eq!(book.year, "1965");
        assert_eq!(book.status, STATUS_AVAILABLE);
        assert!(book.is_available());
    }

    #[test]
    fn serialization_roundtrip() {
        let book = Book::new(3, "Dune", "Herbert", "1965");

        let json = serde_json::to_string(&book).unwrap();
        let parsed: Book = serde_json::from_str(&json).unwrap();

        assert_eq!(book, parsed);
    }

    #[test]
    fn unrecognized_status_roundtrips() {
        let json = r#"{"id":1,"title":"Dune","author":"Herbert","year":"1965","status":"lost"}"#;

        let parsed: Book = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status, "lost");
        assert!(!parsed.is_available());

        let back = serde_json::to_string(&parsed).unwrap();
        let again: Book = serde_json::from_str(&back).unwrap();
        assert_eq!(parsed, again);
    }

    #[test]
    fn missing_field_is_rejected() {
        let json = r#"{"id":1,"title":"Dune","author":"Herbert","year":"1965"}"#;
        assert!(serde_json::from_str::<Book>(json).is_err());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let json = r#"{"id":1,"title":"Dune","author":"Herbert","year":"1965","status":"available","publisher":"Chilton"}"#;
        assert!(serde_json::from_str::<Book>(json).is_err());
    }
}
