//! Login and token checks

use std::collections::HashMap;
use std::sync::Arc;

use super::tokens::TokenService;
use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
};

/// Fixed set of accepted credentials, loaded once at startup
#[derive(Debug, Clone)]
pub struct CredentialStore {
    users: Arc<HashMap<String, String>>,
}

impl CredentialStore {
    pub fn new(users: HashMap<String, String>) -> Self {
        Self { users: Arc::new(users) }
    }

    /// Plain-text, case-sensitive comparison
    pub fn check(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|expected| expected == password)
    }
}

#[derive(Clone)]
pub struct AuthService {
    credentials: CredentialStore,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            credentials: CredentialStore::new(config.users.clone()),
            tokens: TokenService::new(&config.jwt_secret, config.jwt_expiration_hours),
        }
    }

    /// Authenticate a user and return a signed token
    pub fn login(&self, username: &str, password: &str) -> AppResult<String> {
        if !self.credentials.check(username, password) {
            tracing::warn!(username, "Login failed");
            return Err(AppError::Unauthorized("Invalid username or password".to_string()));
        }

        let token = self.tokens.issue(username)?;
        tracing::info!(username, "Login succeeded");
        Ok(token)
    }

    /// Validate a presented token, returning its username
    pub fn verify_token(&self, token: &str) -> AppResult<String> {
        self.tokens.verify(token)
    }
}
