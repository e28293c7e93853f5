//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    /// Free-form, not validated as a year
    pub published_year: String,
    pub isbn: i64,
}

/// Book fields accepted on create and update. Any `id` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(default)]
pub struct BookData {
    pub title: String,
    pub published_year: String,
    pub isbn: i64,
}

impl BookData {
    pub fn into_book(self, id: i32) -> Book {
        Book {
            id,
            title: self.title,
            published_year: self.published_year,
            isbn: self.isbn,
        }
    }
}
