//! JSON response envelope shared by the book endpoints

use serde::Serialize;
use utoipa::ToSchema;

use super::book::{Book, BookSummary};

/// Outcome flag carried by every response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Fail,
}

/// `{status, message?, data?}` envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Only set on creation, always `false`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<bool>,
    pub status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            error: None,
            status: ResponseStatus::Success,
            message: None,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Success without a `data` member
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            error: None,
            status: ResponseStatus::Success,
            message: Some(message.into()),
            data: None,
        }
    }
}

impl ApiResponse<CreatedBook> {
    pub fn created(book_id: String, message: impl Into<String>) -> Self {
        Self {
            error: Some(false),
            status: ResponseStatus::Success,
            message: Some(message.into()),
            data: Some(CreatedBook { book_id }),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBook {
    pub book_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookData {
    pub book: Book,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookListData {
    pub books: Vec<BookSummary>,
}
