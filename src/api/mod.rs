//! API handlers for Bookshelf REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    routing::get,
    Json, Router,
};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON body extractor that reports malformed input with the fail envelope
pub struct JsonPayload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(JsonPayload(value))
    }
}

/// Query parameters in the order they appear in the query string
pub struct OrderedQuery(pub IndexMap<String, String>);

#[async_trait]
impl<S> FromRequestParts<S> for OrderedQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<IndexMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(OrderedQuery(params))
    }
}

async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed("Method not allowed".to_string())
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = if state.config.cors.allow_any_origin {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check).fallback(method_not_allowed))
        .route("/ready", get(health::readiness_check).fallback(method_not_allowed))
        // Books
        .route(
            "/books",
            get(books::list_books)
                .post(books::create_book)
                .fallback(method_not_allowed),
        )
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book)
                .fallback(method_not_allowed),
        )
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .merge(routes)
        .merge(openapi)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
