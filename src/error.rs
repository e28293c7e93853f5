//! Error types for the catalog server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
///
/// Every variant except [`AppError::MissingReference`] is answered with a
/// bare status code and an empty body.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A join row points at an author or book that does not exist
    #[error("{0}")]
    MissingReference(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error body returned for rejected author/book references
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::BadRequest(_) | AppError::MissingReference(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::MissingReference(error) => {
                (status, Json(ErrorResponse { error })).into_response()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                status.into_response()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                status.into_response()
            }
            AppError::Unauthorized(msg) => {
                tracing::debug!("Rejected request: {}", msg);
                status.into_response()
            }
            AppError::BadRequest(msg) | AppError::NotFound(msg) => {
                tracing::debug!("{}: {}", status, msg);
                status.into_response()
            }
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_missing_reference_carries_json_body() {
        let response = AppError::MissingReference("Author does not exist".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Author does not exist" }));
    }

    #[tokio::test]
    async fn test_other_errors_have_empty_body() {
        let cases = [
            (AppError::Unauthorized("no token".into()), StatusCode::UNAUTHORIZED),
            (AppError::BadRequest("bad json".into()), StatusCode::BAD_REQUEST),
            (AppError::NotFound("book 3".into()), StatusCode::NOT_FOUND),
            (AppError::Database(sqlx::Error::RowNotFound), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::Internal("signing".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected);
            assert!(body_bytes(response).await.is_empty());
        }
    }
}
