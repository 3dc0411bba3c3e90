//! Data models for Bookshelf

pub mod book;
pub mod response;

// Re-export commonly used types
pub use book::{Book, BookFilter, BookPayload, BookSummary};
pub use response::{ApiResponse, ResponseStatus};
