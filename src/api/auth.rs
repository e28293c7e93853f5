//! Login endpoint and the token gate for protected routes

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::JsonBody;
use crate::{error::AppResult, AppState};

/// Missing fields are empty and fail the credential check
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

/// Exchange credentials for a bearer token
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Malformed body"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let token = state
        .services
        .auth
        .login(&request.username, &request.password)?;
    Ok(Json(LoginResponse { token }))
}

/// Reject the request unless its `Authorization` header holds a valid token.
///
/// The header value is the raw token, without a `Bearer ` scheme prefix.
pub async fn require_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> AppResult<Response> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    let username = state.services.auth.verify_token(token)?;
    tracing::debug!(username = %username, "Token accepted");

    Ok(next.run(request).await)
}
