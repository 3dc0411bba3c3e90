//! Book model and related types

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Stored book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Opaque 16 character identifier
    pub id: String,
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: u32,
    pub read_page: u32,
    /// True when `read_page == page_count` at the last write
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Book projection used by list views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: Option<String>,
}

/// Create / update book request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub read_page: u32,
    #[serde(default)]
    pub reading: bool,
}

impl BookPayload {
    /// Check the payload before a write.
    ///
    /// `action` names the operation in the error message ("add", "update").
    /// The page check runs first, so it wins over a blank name.
    pub fn validate(&self, action: &str) -> AppResult<()> {
        if self.read_page > self.page_count {
            return Err(AppError::Validation(format!(
                "Failed to {} book. readPage cannot be greater than pageCount",
                action
            )));
        }

        let has_name = self
            .name
            .as_deref()
            .map(|name| !name.trim().is_empty())
            .unwrap_or(false);
        if !has_name {
            return Err(AppError::Validation(format!(
                "Failed to {} book. Please provide the book name",
                action
            )));
        }

        Ok(())
    }
}

impl Book {
    /// Build a new record from a validated payload
    pub fn new(id: String, payload: BookPayload, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: payload.name.unwrap_or_default(),
            year: payload.year,
            author: payload.author,
            summary: payload.summary,
            publisher: payload.publisher,
            page_count: payload.page_count,
            read_page: payload.read_page,
            finished: payload.page_count == payload.read_page,
            reading: payload.reading,
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Replace every mutable field, keeping `id` and `inserted_at`
    pub fn apply(&mut self, payload: BookPayload, now: DateTime<Utc>) {
        self.name = payload.name.unwrap_or_default();
        self.year = payload.year;
        self.author = payload.author;
        self.summary = payload.summary;
        self.publisher = payload.publisher;
        self.page_count = payload.page_count;
        self.read_page = payload.read_page;
        self.finished = payload.page_count == payload.read_page;
        self.reading = payload.reading;
        self.updated_at = now;
    }

    pub fn to_summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

/// Interpret a query flag: `"1"` is true, any other value is false.
pub fn parse_flag(value: &str) -> bool {
    value == "1"
}

/// Filter applied by the book list endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookFilter {
    Reading(bool),
    Finished(bool),
    /// Case-insensitive substring of the book name
    Name(String),
}

impl BookFilter {
    /// Build the filter from the request query.
    ///
    /// Only the first parameter, in query-string order, is considered.
    pub fn from_query(query: &IndexMap<String, String>) -> AppResult<Option<Self>> {
        let Some((key, value)) = query.first() else {
            return Ok(None);
        };

        let filter = match key.as_str() {
            "reading" => BookFilter::Reading(parse_flag(value)),
            "finished" => BookFilter::Finished(parse_flag(value)),
            "name" => BookFilter::Name(value.clone()),
            _ => return Err(AppError::Validation("invalid parameter".to_string())),
        };

        Ok(Some(filter))
    }

    pub fn matches(&self, book: &Book) -> bool {
        match self {
            BookFilter::Reading(reading) => book.reading == *reading,
            BookFilter::Finished(finished) => book.finished == *finished,
            BookFilter::Name(needle) => book
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        }
    }
}
