//! Book management service

use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};

use crate::{
    error::AppResult,
    models::book::{Book, BookFilter, BookPayload, BookSummary},
    repository::Repository,
};

/// Length of generated book identifiers
pub const BOOK_ID_LENGTH: usize = 16;

/// Generate a random alphanumeric book identifier
pub fn generate_book_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(BOOK_ID_LENGTH)
        .map(char::from)
        .collect()
}

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Validate and store a new book, returning its ID
    pub async fn create_book(&self, payload: BookPayload) -> AppResult<String> {
        payload.validate("add")?;

        let now = Utc::now();
        let book = self
            .repository
            .books
            .insert_unique(generate_book_id, |id| Book::new(id, payload, now))
            .await?;

        tracing::info!("Book {} added", book.id);
        Ok(book.id)
    }

    /// Replace the fields of an existing book
    pub async fn update_book(&self, id: &str, payload: BookPayload) -> AppResult<Book> {
        payload.validate("update")?;

        let book = self.repository.books.update(id, payload, Utc::now()).await?;
        tracing::info!("Book {} updated", id);
        Ok(book)
    }

    pub async fn delete_book(&self, id: &str) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!("Book {} deleted", id);
        Ok(())
    }

    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// List book summaries, optionally narrowed by a filter
    pub async fn list_books(&self, filter: Option<&BookFilter>) -> Vec<BookSummary> {
        tracing::debug!("Listing books with filter {:?}", filter);
        self.repository
            .books
            .list(filter)
            .await
            .iter()
            .map(Book::to_summary)
            .collect()
    }

    /// Number of stored books
    pub async fn count(&self) -> usize {
        self.repository.books.count().await
    }
}
