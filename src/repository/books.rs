//! In-memory book storage

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFilter, BookPayload},
};

/// Ordered book collection shared between requests.
///
/// Every operation holds the lock for its full read-modify-write.
#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// List books in insertion order, optionally filtered
    pub async fn list(&self, filter: Option<&BookFilter>) -> Vec<Book> {
        let books = self.books.read().await;
        books
            .iter()
            .filter(|book| filter.map_or(true, |f| f.matches(book)))
            .cloned()
            .collect()
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: &str) -> AppResult<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    pub async fn count(&self) -> usize {
        self.books.read().await.len()
    }

    // =========================================================================
    // WRITE
    // =========================================================================

    /// Append a book under a freshly generated ID.
    ///
    /// `generate_id` is called until it yields an ID not already stored; the
    /// check, the append and the read-back share one write guard.
    pub async fn insert_unique<G, B>(&self, mut generate_id: G, build: B) -> AppResult<Book>
    where
        G: FnMut() -> String,
        B: FnOnce(String) -> Book,
    {
        let mut books = self.books.write().await;

        let id = loop {
            let candidate = generate_id();
            if !books.iter().any(|book| book.id == candidate) {
                break candidate;
            }
            tracing::debug!("Book ID {} already taken, generating another", candidate);
        };

        books.push(build(id.clone()));
        tracing::debug!("Stored book {}", id);

        books
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(|| AppError::Internal("Failed to add book".to_string()))
    }

    /// Replace the mutable fields of an existing book
    pub async fn update(&self, id: &str, payload: BookPayload, now: DateTime<Utc>) -> AppResult<Book> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(|| AppError::NotFound("Failed to update book. Id not found".to_string()))?;

        book.apply(payload, now);
        Ok(book.clone())
    }

    /// Remove a book, keeping the relative order of the others
    pub async fn delete(&self, id: &str) -> AppResult<Book> {
        let mut books = self.books.write().await;
        let index = books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| AppError::NotFound("Failed to delete book. Id not found".to_string()))?;

        Ok(books.remove(index))
    }
}
