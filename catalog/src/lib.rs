//! # Shelf Catalog
//!
//! A file-backed catalog manager for a single-user book inventory.
//!
//! This crate provides the core logic for keeping a book catalog in a flat
//! JSON file: adding, removing, searching, listing, and changing the
//! availability status of books. Every operation is a one-shot
//! read-modify-write (or read-only) transaction against the store file -
//! no state is cached between calls.
//!
//! ## Design Principles
//!
//! - **No interactive IO**: the crate touches nothing but the store file
//! - **Stateless handle**: [`Catalog`] carries only the store path
//! - **Full rewrite per mutation**: the store is rewritten in its entirety
//! - **Testable**: all behavior is observable through the store file
//!
//! ## Core Concepts
//!
//! ### Books
//!
//! Data is stored as [`Book`] records with:
//! - Unique numeric ID, assigned as `max existing id + 1` (starting at 1)
//! - Title, author, and publication year (year is free-form text)
//! - An availability status string
//!
//! ### The Store
//!
//! The store is a single JSON file holding an array of books, written
//! pretty-printed with non-ASCII text preserved literally. An absent or
//! empty file is a logically empty catalog.
//!
//! ### Searching
//!
//! [`Catalog::search`] filters by one [`SearchField`]: title and author
//! are case-insensitive substring matches, year is an exact string match.
//! Field labels parse through [`SearchField`]'s `FromStr`; an unrecognized
//! label is an error distinct from an empty result.
//!
//! ## Quick Start
//!
//! ```rust
//! use shelf_catalog::{Catalog, SearchField};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let catalog = Catalog::new(dir.path().join("books.json"));
//!
//! let book = catalog.add("Dune", "Herbert", "1965").unwrap();
//! assert_eq!(book.id, 1);
//! assert_eq!(book.status, shelf_catalog::STATUS_AVAILABLE);
//!
//! let hits = catalog.search(SearchField::Title, "dune").unwrap();
//! assert_eq!(hits.len(), 1);
//!
//! catalog.change_status(1, "checked-out").unwrap();
//! assert_eq!(catalog.list().unwrap()[0].status, "checked-out");
//! ```

pub mod book;
pub mod catalog;
pub mod error;
pub mod store;

// Re-export main types at crate root
pub use book::{Book, STATUS_AVAILABLE, STATUS_CHECKED_OUT};
pub use catalog::{Catalog, SearchField};
pub use error::{Error, Result};

/// Type alias for book identifiers.
pub type BookId = u64;
