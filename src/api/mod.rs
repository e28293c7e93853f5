//! API handlers for the catalog REST endpoints

pub mod auth;
pub mod author_books;
pub mod authors;
pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body. Any content type is accepted. A body that is not
/// JSON, or whose fields have the wrong types, is a bad request; missing
/// fields and a literal `null` take their zero values.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(format!("Unreadable body: {}", e)))?;

        serde_json::from_slice::<Option<T>>(&bytes)
            .map(|value| JsonBody(value.unwrap_or_default()))
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))
    }
}

async fn raw_id<S>(parts: &mut Parts, state: &S) -> Result<String, AppError>
where
    S: Send + Sync,
{
    let Path(raw) = Path::<String>::from_request_parts(parts, state)
        .await
        .map_err(|e| AppError::Internal(format!("Missing id segment: {}", e)))?;
    Ok(raw)
}

/// Row id for lookups, taken from the `:id` path segment.
/// A segment that is not an integer cannot match any row, so it is not found.
pub struct EntityId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = raw_id(parts, state).await?;
        raw.parse()
            .map(EntityId)
            .map_err(|_| AppError::NotFound(format!("No row with id {:?}", raw)))
    }
}

/// Row id for updates and deletes, taken from the `:id` path segment.
///
/// These writes never fail on a non-matching id, so a segment that is not an
/// integer becomes 0, which the store never assigns.
pub struct TargetId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for TargetId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = raw_id(parts, state).await?;
        Ok(TargetId(raw.parse().unwrap_or(0)))
    }
}
