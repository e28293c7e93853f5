//! Author endpoints

use axum::{extract::State, http::StatusCode, Json};

use super::{EntityId, JsonBody, TargetId};
use crate::{
    error::AppResult,
    models::{Author, AuthorData},
    AppState,
};

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    security(("token" = [])),
    responses(
        (status = 200, description = "All authors", body = Vec<Author>)
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> AppResult<Json<Vec<Author>>> {
    let authors = state.services.authors.list().await?;
    Ok(Json(authors))
}

/// Create an author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    security(("token" = [])),
    request_body = AuthorData,
    responses(
        (status = 200, description = "Author created", body = Author)
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<AuthorData>,
) -> AppResult<Json<Author>> {
    let author = state.services.authors.create(data).await?;
    Ok(Json(author))
}

/// Get an author by ID
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author details", body = Author),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> AppResult<Json<Author>> {
    let author = state.services.authors.get_by_id(id).await?;
    Ok(Json(author))
}

/// Replace an author
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Author ID")),
    request_body = AuthorData,
    responses(
        (status = 200, description = "Author updated", body = Author)
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    TargetId(id): TargetId,
    JsonBody(data): JsonBody<AuthorData>,
) -> AppResult<Json<Author>> {
    let author = state.services.authors.update(id, data).await?;
    Ok(Json(author))
}

/// Delete an author
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Author ID")),
    responses(
        (status = 204, description = "Author deleted")
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    TargetId(id): TargetId,
) -> AppResult<StatusCode> {
    state.services.authors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
