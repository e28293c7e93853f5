//! Book endpoints

use axum::{extract::State, http::StatusCode, Json};

use super::{EntityId, JsonBody, TargetId};
use crate::{
    error::AppResult,
    models::{Book, BookData},
    AppState,
};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    security(("token" = [])),
    responses(
        (status = 200, description = "All books", body = Vec<Book>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list().await?;
    Ok(Json(books))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    security(("token" = [])),
    request_body = BookData,
    responses(
        (status = 200, description = "Book created", body = Book),
        (status = 400, description = "Malformed body")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<BookData>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.create(data).await?;
    Ok(Json(book))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_by_id(id).await?;
    Ok(Json(book))
}

/// Replace a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Book ID")),
    request_body = BookData,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Malformed body")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    TargetId(id): TargetId,
    JsonBody(data): JsonBody<BookData>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.update(id, data).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 204, description = "Book deleted")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    TargetId(id): TargetId,
) -> AppResult<StatusCode> {
    state.services.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
