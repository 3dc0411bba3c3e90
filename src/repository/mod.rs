//! Repository layer for book storage

pub mod books;

/// Main repository struct holding the in-memory stores
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository with empty stores
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::new(),
        }
    }
}
