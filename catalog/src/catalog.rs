//! Catalog - the manager mediating all reads and writes to the store.
//!
//! The Catalog holds nothing but the store path. Every operation reloads
//! the full record set from the file, applies one mutation or query, and
//! (for writers) persists the full set back. There is no cached state
//! across calls.

use crate::error::Result;
use crate::{store, Book, BookId, Error};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Field selector for [`Catalog::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Case-insensitive substring match on the title
    Title,
    /// Case-insensitive substring match on the author
    Author,
    /// Exact string match on the year
    Year,
}

impl FromStr for SearchField {
    type Err = Error;

    /// Parse a user-facing field label. Unrecognized labels are an
    /// [`Error::InvalidSearchField`], not an empty result.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "year" => Ok(Self::Year),
            other => Err(Error::InvalidSearchField(other.to_string())),
        }
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Title => write!(f, "title"),
            Self::Author => write!(f, "author"),
            Self::Year => write!(f, "year"),
        }
    }
}

/// The catalog manager.
///
/// Each operation is a one-shot read-modify-write (or read-only)
/// transaction against the store file. Concurrent invocations against the
/// same store are not guarded: last writer wins.
#[derive(Debug, Clone)]
pub struct Catalog {
    path: PathBuf,
}

impl Catalog {
    /// Create a manager for the store at `path`. The file is not touched
    /// until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full record set from the store.
    pub fn load(&self) -> Result<Vec<Book>> {
        store::load(&self.path)
    }

    /// Persist the full record set, overwriting the store.
    pub fn save(&self, books: &[Book]) -> Result<()> {
        store::save(&self.path, books)
    }

    /// Add a book with the next free id and status "available".
    ///
    /// The id is `max existing id + 1`, or 1 for an empty catalog. Ids are
    /// never renumbered, so removing the highest-id book makes its numeric
    /// successor eligible again.
    pub fn add(
        &self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> Result<Book> {
        let mut books = self.load()?;

        let id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        let book = Book::new(id, title, author, year);

        books.push(book.clone());
        self.save(&books)?;

        Ok(book)
    }

    /// Remove the book with the given id and return it.
    ///
    /// A missing id is an [`Error::BookNotFound`] and leaves the store
    /// untouched.
    pub fn remove(&self, id: BookId) -> Result<Book> {
        let mut books = self.load()?;

        let index = books
            .iter()
            .position(|b| b.id == id)
            .ok_or(Error::BookNotFound(id))?;

        let removed = books.remove(index);
        self.save(&books)?;

        Ok(removed)
    }

    /// Filter the catalog by one field. Read-only.
    ///
    /// Title and author match case-insensitively on substrings; year
    /// matches the stored text exactly.
    pub fn search(&self, field: SearchField, query: &str) -> Result<Vec<Book>> {
        let books = self.load()?;
        let needle = query.to_lowercase();

        let results = books
            .into_iter()
            .filter(|book| match field {
                SearchField::Title => book.title.to_lowercase().contains(&needle),
                SearchField::Author => book.author.to_lowercase().contains(&needle),
                SearchField::Year => book.year == query,
            })
            .collect();

        Ok(results)
    }

    /// Return the full record set unmodified. Read-only.
    pub fn list(&self) -> Result<Vec<Book>> {
        self.load()
    }

    /// Overwrite the status of the book with the given id and return the
    /// updated book.
    ///
    /// The new status is stored verbatim; the caller is trusted to use a
    /// recognized value. A missing id is an [`Error::BookNotFound`] and
    /// leaves the store byte-for-byte unchanged.
    pub fn change_status(&self, id: BookId, new_status: impl Into<String>) -> Result<Book> {
        let mut books = self.load()?;

        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(Error::BookNotFound(id))?;

        book.status = new_status.into();
        let updated = book.clone();
        self.save(&books)?;

        Ok(updated)
    }
}
