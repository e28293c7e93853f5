//! Author model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Author record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub country: String,
}

/// Author fields accepted on create and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(default)]
pub struct AuthorData {
    pub name: String,
    pub country: String,
}

impl AuthorData {
    pub fn into_author(self, id: i32) -> Author {
        Author {
            id,
            name: self.name,
            country: self.country,
        }
    }
}
