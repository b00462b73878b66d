//! Console rendering of library records.

use std::io::{self, Write};

use literalura_core::{Author, Book, Registration};

const RULE: &str = "=================================";

pub fn write_book<W: Write>(out: &mut W, book: &Book) -> io::Result<()> {
    writeln!(out, "----- BOOK -----")?;
    writeln!(out, "Title: {}", book.title)?;
    writeln!(out, "Author: {}", book.author.name)?;
    writeln!(out, "Language: {}", book.language)?;
    writeln!(out, "Downloads: {}", book.download_count)?;
    writeln!(out, "----------------")
}

pub fn write_author<W: Write>(out: &mut W, author: &Author, books: &[Book]) -> io::Result<()> {
    writeln!(out, "Author: {}", author.name)?;
    writeln!(out, "Born: {}", year_or_unknown(author.birth_year))?;
    writeln!(out, "Died: {}", year_or_unknown(author.death_year))?;
    let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
    writeln!(out, "Books: [{}]", titles.join(", "))?;
    writeln!(out)
}

/// Everything the catalog returned for the chosen record, then what was saved.
pub fn write_registration<W: Write>(out: &mut W, registration: &Registration) -> io::Result<()> {
    let record = &registration.resolution.record;

    writeln!(out)?;
    writeln!(out, "=== BOOK FOUND ({}) ===", registration.resolution.resolved_by)?;
    writeln!(out, "Catalog id: {}", record.id)?;
    writeln!(out, "Title: {}", record.title.as_deref().unwrap_or_default())?;
    for author in &record.authors {
        write!(out, "Author: {}", author.name.as_deref().unwrap_or_default())?;
        if let Some(birth) = author.birth_year {
            write!(out, " (born {})", birth)?;
        }
        if let Some(death) = author.death_year {
            write!(out, " - died {}", death)?;
        }
        writeln!(out)?;
    }
    writeln!(out, "Languages: [{}]", record.languages.join(", "))?;
    match record.download_count {
        Some(count) => writeln!(out, "Downloads: {}", count)?,
        None => writeln!(out, "Downloads: unknown")?,
    }
    if !record.formats.is_empty() {
        writeln!(out, "Available formats:")?;
        for (format, url) in &record.formats {
            writeln!(out, " - {}: {}", format, url)?;
        }
    }
    for summary in &record.summaries {
        writeln!(out, "Summary: {}", summary)?;
    }
    writeln!(out, "{}", RULE)?;

    if registration.reused_author {
        writeln!(out, "Linked to existing author: {}", registration.book.author)?;
    }
    writeln!(out, "Book registered: {}", registration.book)
}

fn year_or_unknown(year: Option<i32>) -> String {
    year.map(|y| y.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
