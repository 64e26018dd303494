//! Whole-file persistence for the catalog store.
//!
//! The store is the bridge between catalog operations and disk. It is read
//! and written in full: no incremental updates, no partial-write
//! protection. File handles are scoped to each call and released on every
//! exit path.

use crate::error::Result;
use crate::{Book, Error};
use std::fs;
use std::path::Path;

/// Read the full record set from the store file.
///
/// An absent or empty file is a logically empty catalog. Content that
/// exists but cannot be decoded into the expected record shape is a
/// [`Error::Parse`].
pub fn load(path: &Path) -> Result<Vec<Book>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    if content.is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&content).map_err(|e| Error::Parse(e.to_string()))
}

/// Persist the full record set, overwriting the store file.
///
/// Output is pretty-printed JSON; non-ASCII text is written literally.
pub fn save(path: &Path, books: &[Book]) -> Result<()> {
    let json =
        serde_json::to_string_pretty(books).map_err(|e| Error::Parse(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}
