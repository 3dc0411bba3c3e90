//! Book endpoints

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};

use crate::{
    error::AppResult,
    models::{
        book::{BookFilter, BookPayload},
        response::{ApiResponse, BookData, BookListData, CreatedBook},
    },
};

use super::{JsonPayload, OrderedQuery};

/// List books, optionally filtered by one query parameter
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(
        ("reading" = Option<String>, Query, description = "`1` for books being read, anything else for the rest"),
        ("finished" = Option<String>, Query, description = "`1` for finished books, anything else for the rest"),
        ("name" = Option<String>, Query, description = "Case-insensitive substring of the book name")
    ),
    responses(
        (status = 200, description = "Book summaries in `data.books`", body = BookListData),
        (status = 400, description = "Unsupported query parameter", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    OrderedQuery(query): OrderedQuery,
) -> AppResult<Json<ApiResponse<BookListData>>> {
    let filter = BookFilter::from_query(&query)?;
    let books = state.services.books.list_books(filter.as_ref()).await;
    Ok(Json(ApiResponse::success(BookListData { books })))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details in `data.book`", body = BookData),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<BookData>>> {
    let book = state.services.books.get_book(&id).await?;
    Ok(Json(ApiResponse::success(BookData { book })))
}

/// Add a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book added, new ID in `data.bookId`", body = CreatedBook),
        (status = 400, description = "Missing name or readPage greater than pageCount", body = crate::error::ErrorResponse),
        (status = 500, description = "Book could not be stored", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    JsonPayload(payload): JsonPayload<BookPayload>,
) -> AppResult<(
    StatusCode,
    [(header::HeaderName, &'static str); 1],
    Json<ApiResponse<CreatedBook>>,
)> {
    let id = state.services.books.create_book(payload).await?;
    Ok((
        StatusCode::CREATED,
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(ApiResponse::created(id, "Book added successfully")),
    ))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated"),
        (status = 400, description = "Missing name or readPage greater than pageCount", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    JsonPayload(payload): JsonPayload<BookPayload>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.services.books.update_book(&id, payload).await?;
    Ok(Json(ApiResponse::message("Book updated successfully")))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.services.books.delete_book(&id).await?;
    Ok(Json(ApiResponse::message("Book deleted successfully")))
}
