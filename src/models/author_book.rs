//! Author/book relation model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Links one author to one book. The same pair may be linked more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AuthorBook {
    pub author_book_id: i32,
    pub author_id: i32,
    pub book_id: i32,
}

/// Relation fields accepted on create and update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(default)]
pub struct AuthorBookData {
    pub author_id: i32,
    pub book_id: i32,
}

impl AuthorBookData {
    pub fn into_author_book(self, author_book_id: i32) -> AuthorBook {
        AuthorBook {
            author_book_id,
            author_id: self.author_id,
            book_id: self.book_id,
        }
    }
}
