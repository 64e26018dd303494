//! Interactive numbered menu loop over the catalog.
//!
//! The loop is pure glue: it prompts, parses, dispatches one catalog
//! operation, and renders the outcome. Every catalog error is caught here
//! and reported as a message; the loop always continues. IO goes through
//! generic `BufRead`/`Write` parameters so sessions can be scripted in
//! tests.

use shelf_catalog::{Book, BookId, Catalog, Error, SearchField};
use std::io::{self, BufRead, Write};

const MENU: &str = "\
\nShelf book catalog
1. Add a book
2. Remove a book
3. Search books
4. List books
5. Change book status
6. Exit";

/// Run the menu loop until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(
    catalog: &Catalog,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    loop {
        writeln!(output, "{MENU}")?;
        let Some(choice) = prompt(&mut input, &mut output, "Enter your choice: ")? else {
            break;
        };

        match choice.trim() {
            "1" => add_book(catalog, &mut input, &mut output)?,
            "2" => remove_book(catalog, &mut input, &mut output)?,
            "3" => search_books(catalog, &mut input, &mut output)?,
            "4" => list_books(catalog, &mut output)?,
            "5" => change_status(catalog, &mut input, &mut output)?,
            "6" => break,
            _ => writeln!(output, "Invalid choice. Please try again.")?,
        }
    }

    Ok(())
}

fn add_book<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(title) = prompt(input, output, "Title: ")? else {
        return Ok(());
    };
    let Some(author) = prompt(input, output, "Author: ")? else {
        return Ok(());
    };
    let Some(year) = prompt(input, output, "Year: ")? else {
        return Ok(());
    };

    match catalog.add(title, author, year) {
        Ok(book) => {
            tracing::debug!(id = book.id, "added book");
            writeln!(output, "Added '{}' (id {}).", book.title, book.id)
        }
        Err(err) => report(output, &err),
    }
}

fn remove_book<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(raw) = prompt(input, output, "Id of the book to remove: ")? else {
        return Ok(());
    };

    let result = parse_id(&raw).and_then(|id| catalog.remove(id));
    match result {
        Ok(book) => {
            tracing::debug!(id = book.id, "removed book");
            writeln!(output, "Removed '{}' (id {}).", book.title, book.id)
        }
        Err(err) => report(output, &err),
    }
}

fn search_books<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(label) = prompt(input, output, "Search by (title/author/year): ")? else {
        return Ok(());
    };
    let Some(query) = prompt(input, output, "Search query: ")? else {
        return Ok(());
    };

    let result = label
        .parse::<SearchField>()
        .and_then(|field| catalog.search(field, query.trim()));
    match result {
        Ok(hits) if hits.is_empty() => writeln!(output, "No books matched the query."),
        Ok(hits) => render_books(output, &hits),
        Err(err) => report(output, &err),
    }
}

fn list_books<W: Write>(catalog: &Catalog, output: &mut W) -> io::Result<()> {
    match catalog.list() {
        Ok(books) if books.is_empty() => writeln!(output, "The catalog is empty."),
        Ok(books) => render_books(output, &books),
        Err(err) => report(output, &err),
    }
}

fn change_status<R: BufRead, W: Write>(
    catalog: &Catalog,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    let Some(raw) = prompt(input, output, "Book id: ")? else {
        return Ok(());
    };
    let Some(status) = prompt(input, output, "New status (available/checked-out): ")? else {
        return Ok(());
    };

    let result = parse_id(&raw).and_then(|id| catalog.change_status(id, status.trim()));
    match result {
        Ok(book) => {
            tracing::debug!(id = book.id, status = %book.status, "changed status");
            writeln!(output, "Book {} is now '{}'.", book.id, book.status)
        }
        Err(err) => report(output, &err),
    }
}

/// Write a prompt, flush, and read one line. `None` means end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }

    Ok(Some(line))
}

fn parse_id(raw: &str) -> shelf_catalog::Result<BookId> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| Error::InvalidId(trimmed.to_string()))
}

fn render_books<W: Write>(output: &mut W, books: &[Book]) -> io::Result<()> {
    for book in books {
        writeln!(
            output,
            "{}: {} by {} ({}) - {}",
            book.id, book.title, book.author, book.year, book.status
        )?;
    }
    Ok(())
}

fn report<W: Write>(output: &mut W, err: &Error) -> io::Result<()> {
    tracing::warn!("operation failed: {err}");
    writeln!(output, "Error: {err}")
}
