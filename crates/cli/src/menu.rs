//! Interactive numbered menu.

use std::io::Write;

use anyhow::Result;
use tracing::warn;

use literalura_core::LibraryService;

use crate::display;
use crate::prompt::Prompter;

/// A menu entry chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    SearchAndRegister,
    ListBooks,
    ListAuthors,
    AuthorsAliveInYear,
    BooksByLanguage,
    ClearBooks,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(MenuChoice::SearchAndRegister),
            2 => Some(MenuChoice::ListBooks),
            3 => Some(MenuChoice::ListAuthors),
            4 => Some(MenuChoice::AuthorsAliveInYear),
            5 => Some(MenuChoice::BooksByLanguage),
            6 => Some(MenuChoice::ClearBooks),
            0 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "
=== LITERALURA ===
1 - Search book by title
2 - List registered books
3 - List registered authors
4 - List authors alive in a given year
5 - List books in a given language
6 - Delete all registered books
0 - Exit";

/// Run the menu until the user picks 0 or input ends.
pub async fn run<P, W>(service: &LibraryService, prompter: &mut P, out: &mut W) -> Result<()>
where
    P: Prompter,
    W: Write,
{
    loop {
        writeln!(out, "{}", MENU)?;
        out.flush()?;
        let Some(line) = prompter.text("Choose an option")? else {
            writeln!(out)?;
            break;
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            writeln!(out, "Invalid option. Try again.")?;
            continue;
        };

        match choice {
            MenuChoice::SearchAndRegister => search_and_register(service, prompter, out).await?,
            MenuChoice::ListBooks => list_books(service, out)?,
            MenuChoice::ListAuthors => list_authors(service, out)?,
            MenuChoice::AuthorsAliveInYear => authors_alive_in(service, prompter, out)?,
            MenuChoice::BooksByLanguage => books_by_language(service, prompter, out)?,
            MenuChoice::ClearBooks => clear_books(service, prompter, out)?,
            MenuChoice::Exit => break,
        }
    }

    writeln!(out, "Shutting down.")?;
    out.flush()?;
    Ok(())
}

async fn search_and_register<P: Prompter, W: Write>(
    service: &LibraryService,
    prompter: &mut P,
    out: &mut W,
) -> Result<()> {
    let Some(title) = prompter.text("Enter the title")? else {
        return Ok(());
    };
    if title.trim().is_empty() {
        writeln!(out, "Please type a title.")?;
        return Ok(());
    }

    match service.register_by_title(&title).await {
        Ok(Some(registration)) => display::write_registration(out, &registration)?,
        Ok(None) => writeln!(out, "No book found in the catalog.")?,
        Err(e) => {
            warn!("Failed to save '{}': {}", title, e);
            writeln!(out, "Could not save the book: {}", e)?;
        }
    }
    Ok(())
}

fn list_books<W: Write>(service: &LibraryService, out: &mut W) -> Result<()> {
    writeln!(out, "\n-- Registered books --")?;
    match service.list_all_books() {
        Ok(books) if books.is_empty() => writeln!(out, "No books registered yet.")?,
        Ok(books) => books.iter().try_for_each(|book| display::write_book(out, book))?,
        Err(e) => writeln!(out, "Could not list books: {}", e)?,
    }
    Ok(())
}

fn list_authors<W: Write>(service: &LibraryService, out: &mut W) -> Result<()> {
    writeln!(out, "\n-- Registered authors --")?;
    let authors = match service.list_all_authors() {
        Ok(authors) => authors,
        Err(e) => {
            writeln!(out, "Could not list authors: {}", e)?;
            return Ok(());
        }
    };
    if authors.is_empty() {
        writeln!(out, "No authors registered yet.")?;
        return Ok(());
    }

    for author in &authors {
        match service.books_by_author(author) {
            Ok(books) => display::write_author(out, author, &books)?,
            Err(e) => writeln!(out, "Could not list books of {}: {}", author.name, e)?,
        }
    }
    Ok(())
}

fn authors_alive_in<P: Prompter, W: Write>(
    service: &LibraryService,
    prompter: &mut P,
    out: &mut W,
) -> Result<()> {
    let Some(year) = prompter.year("Enter the year")? else {
        return Ok(());
    };

    writeln!(out, "\n-- Authors alive in {} --", year)?;
    match service.authors_alive_in(year) {
        Ok(authors) if authors.is_empty() => writeln!(out, "No authors alive in {}.", year)?,
        Ok(authors) => authors
            .iter()
            .try_for_each(|author| writeln!(out, "{}", author))?,
        Err(e) => writeln!(out, "Could not list authors: {}", e)?,
    }
    Ok(())
}

fn books_by_language<P: Prompter, W: Write>(
    service: &LibraryService,
    prompter: &mut P,
    out: &mut W,
) -> Result<()> {
    let Some(input) = prompter.text("Enter the language (pt, en, es, fr)")? else {
        return Ok(());
    };
    let code = input.trim().to_lowercase();
    if code.is_empty() {
        writeln!(out, "Please type a language code.")?;
        return Ok(());
    }

    writeln!(out, "\n-- Books in '{}' --", code)?;
    let books = match service.books_by_language(&code) {
        Ok(books) => books,
        Err(e) => {
            writeln!(out, "Could not list books: {}", e)?;
            return Ok(());
        }
    };
    if books.is_empty() {
        writeln!(out, "No books found in that language.")?;
        return Ok(());
    }
    for book in &books {
        display::write_book(out, book)?;
    }

    match service.count_books_by_language(&code) {
        Ok(count) => writeln!(out, "{} book(s) in '{}'.", count, code)?,
        Err(e) => writeln!(out, "Could not count books: {}", e)?,
    }
    Ok(())
}

fn clear_books<P: Prompter, W: Write>(
    service: &LibraryService,
    prompter: &mut P,
    out: &mut W,
) -> Result<()> {
    match prompter.confirm("Delete every registered book?")? {
        Some(true) => {}
        Some(false) => {
            writeln!(out, "Nothing deleted.")?;
            return Ok(());
        }
        None => return Ok(()),
    }

    match service.clear_books() {
        Ok(deleted) => writeln!(out, "Deleted {} book(s). Authors were kept.", deleted)?,
        Err(e) => writeln!(out, "Could not delete books: {}", e)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Arc;

    use crate::prompt::LinePrompter;

    use literalura_core::{
        testing::{fixtures, MockCatalogClient},
        CatalogClient, LibraryStore, Resolver, SqliteLibrary,
    };

    async fn service() -> LibraryService {
        let catalog = Arc::new(MockCatalogClient::new());
        catalog
            .set_search_results(
                "Dom Casmurro",
                vec![fixtures::record(55752, "Dom Casmurro", "Assis, Machado de", "pt")],
            )
            .await;
        catalog
            .add_record(fixtures::record_with_years(
                98,
                "A Tale of Two Cities",
                "Dickens, Charles",
                1812,
                1870,
            ))
            .await;

        let store: Arc<dyn LibraryStore> = Arc::new(SqliteLibrary::in_memory().unwrap());
        LibraryService::new(Resolver::new(catalog as Arc<dyn CatalogClient>), store)
    }

    async fn run_with(service: &LibraryService, input: &str) -> String {
        let mut prompter = LinePrompter::new(input.as_bytes(), io::sink());
        let mut out = Vec::new();
        run(service, &mut prompter, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(MenuChoice::parse(" 1 "), Some(MenuChoice::SearchAndRegister));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse("abc"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[tokio::test]
    async fn test_exit_option() {
        let service = service().await;
        let text = run_with(&service, "0\n").await;
        assert!(text.contains("1 - Search book by title"));
        assert!(text.ends_with("Shutting down.\n"));
    }

    #[tokio::test]
    async fn test_end_of_input_exits() {
        let service = service().await;
        let text = run_with(&service, "").await;
        assert!(text.contains("Shutting down."));
    }

    #[tokio::test]
    async fn test_invalid_option_redisplays_menu() {
        let service = service().await;
        let text = run_with(&service, "9\nhello\n0\n").await;
        assert_eq!(text.matches("Invalid option. Try again.").count(), 2);
        assert_eq!(text.matches("=== LITERALURA ===").count(), 3);
    }

    #[tokio::test]
    async fn test_register_then_list_books_and_authors() {
        let service = service().await;
        let text = run_with(&service, "1\nDom Casmurro\n2\n3\n0\n").await;

        assert!(text.contains("=== BOOK FOUND (title search) ==="));
        assert!(text.contains("Book registered: Dom Casmurro by Assis, Machado de [pt]"));
        assert!(text.contains("-- Registered books --"));
        assert!(text.contains("Title: Dom Casmurro"));
        assert!(text.contains("Books: [Dom Casmurro]"));
    }

    #[tokio::test]
    async fn test_register_by_id() {
        let service = service().await;
        let text = run_with(&service, "1\n98\n0\n").await;
        assert!(text.contains("=== BOOK FOUND (direct id lookup) ==="));
    }

    #[tokio::test]
    async fn test_search_without_result() {
        let service = service().await;
        let text = run_with(&service, "1\nUlysses\n2\n0\n").await;
        assert!(text.contains("No book found in the catalog."));
        assert!(text.contains("No books registered yet."));
    }

    #[tokio::test]
    async fn test_blank_title_is_rejected() {
        let service = service().await;
        let text = run_with(&service, "1\n   \n0\n").await;
        assert!(text.contains("Please type a title."));
    }

    #[tokio::test]
    async fn test_authors_alive_in_year() {
        let service = service().await;
        let text = run_with(&service, "1\n98\n1\nDom Casmurro\n4\n1850\n4\n1700\n0\n").await;

        assert!(text.contains("-- Authors alive in 1850 --"));
        assert!(text.contains("Dickens, Charles (1812-1870)"));
        assert!(!text.contains("Assis, Machado de ("));
        assert!(text.contains("No authors alive in 1700."));
    }

    #[tokio::test]
    async fn test_invalid_year_is_asked_again() {
        let service = service().await;
        let text = run_with(&service, "4\nlast year\n1900\n0\n").await;
        assert!(text.contains("-- Authors alive in 1900 --"));
        assert!(!text.contains("Invalid option"));
    }

    #[tokio::test]
    async fn test_books_by_language_with_count() {
        let service = service().await;
        let text = run_with(&service, "1\nDom Casmurro\n5\nPT\n5\nfr\n0\n").await;

        assert!(text.contains("-- Books in 'pt' --"));
        assert!(text.contains("1 book(s) in 'pt'."));
        assert!(text.contains("No books found in that language."));
    }

    #[tokio::test]
    async fn test_clear_books_requires_confirmation() {
        let service = service().await;
        let text = run_with(&service, "1\nDom Casmurro\n6\nn\n6\n\n6\ny\n2\n0\n").await;

        assert_eq!(text.matches("Nothing deleted.").count(), 2);
        assert!(text.contains("Deleted 1 book(s). Authors were kept."));
        assert!(text.contains("No books registered yet."));
        assert_eq!(service.list_all_authors().unwrap().len(), 1);
    }
}
