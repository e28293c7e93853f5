//! Bearer token issuance and verification

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Claims carried by every issued token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Only present when an expiration is configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

/// Signs and checks HS256 tokens with a single shared secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration_hours: Option<u64>,
}

impl TokenService {
    pub fn new(secret: &str, expiration_hours: Option<u64>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens are time-unbounded unless they carry `exp`, which is then enforced.
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expiration_hours,
        }
    }

    /// Issue a signed token for `username`
    pub fn issue(&self, username: &str) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            username: username.to_string(),
            iat: Some(now),
            exp: self.expiration_hours.map(|hours| now + hours as i64 * 3600),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Check the token signature and return the username it was issued for
    pub fn verify(&self, token: &str) -> AppResult<String> {
        if token.is_empty() {
            return Err(AppError::Unauthorized("Missing token".to_string()));
        }

        let data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

        Ok(data.claims.username)
    }
}
