//! Author/book relation endpoints

use axum::{extract::State, http::StatusCode, Json};

use super::{EntityId, JsonBody, TargetId};
use crate::{
    error::{AppResult, ErrorResponse},
    models::{AuthorBook, AuthorBookData},
    AppState,
};

/// List all author/book links
#[utoipa::path(
    get,
    path = "/authorbooks",
    tag = "authorbooks",
    security(("token" = [])),
    responses(
        (status = 200, description = "All links", body = Vec<AuthorBook>)
    )
)]
pub async fn list_author_books(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AuthorBook>>> {
    let links = state.services.author_books.list().await?;
    Ok(Json(links))
}

/// Link an existing author to an existing book
#[utoipa::path(
    post,
    path = "/authorbooks",
    tag = "authorbooks",
    security(("token" = [])),
    request_body = AuthorBookData,
    responses(
        (status = 200, description = "Link created", body = AuthorBook),
        (status = 400, description = "Unknown author or book", body = ErrorResponse)
    )
)]
pub async fn create_author_book(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<AuthorBookData>,
) -> AppResult<Json<AuthorBook>> {
    let link = state.services.author_books.create(data).await?;
    Ok(Json(link))
}

/// Get an author/book link by ID
#[utoipa::path(
    get,
    path = "/authorbooks/{id}",
    tag = "authorbooks",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Link ID")),
    responses(
        (status = 200, description = "Link details", body = AuthorBook),
        (status = 404, description = "Link not found")
    )
)]
pub async fn get_author_book(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<AuthorBook>> {
    let link = state.services.author_books.get_by_id(id).await?;
    Ok(Json(link))
}

/// Re-point an author/book link
#[utoipa::path(
    put,
    path = "/authorbooks/{id}",
    tag = "authorbooks",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Link ID")),
    request_body = AuthorBookData,
    responses(
        (status = 200, description = "Link updated", body = AuthorBook),
        (status = 400, description = "Unknown author or book", body = ErrorResponse)
    )
)]
pub async fn update_author_book(
    State(state): State<AppState>,
    TargetId(id): TargetId,
    JsonBody(data): JsonBody<AuthorBookData>,
) -> AppResult<Json<AuthorBook>> {
    let link = state.services.author_books.update(id, data).await?;
    Ok(Json(link))
}

/// Remove an author/book link
#[utoipa::path(
    delete,
    path = "/authorbooks/{id}",
    tag = "authorbooks",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Link ID")),
    responses(
        (status = 204, description = "Link deleted")
    )
)]
pub async fn delete_author_book(
    State(state): State<AppState>,
    TargetId(id): TargetId,
) -> AppResult<StatusCode> {
    state.services.author_books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
