//! Author/book relations repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::AuthorBookStore;
use crate::{
    error::AppResult,
    models::{AuthorBook, AuthorBookData},
};

#[derive(Clone)]
pub struct AuthorBooksRepository {
    pool: Pool<Postgres>,
}

impl AuthorBooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorBookStore for AuthorBooksRepository {
    async fn list(&self) -> AppResult<Vec<AuthorBook>> {
        let rows = sqlx::query_as::<_, AuthorBook>(
            "SELECT author_book_id, author_id, book_id FROM author_books",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<AuthorBook>> {
        let row = sqlx::query_as::<_, AuthorBook>(
            r#"
            SELECT author_book_id, author_id, book_id
            FROM author_books
            WHERE author_book_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn create(&self, data: &AuthorBookData) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO author_books (author_id, book_id)
            VALUES ($1, $2)
            RETURNING author_book_id
            "#,
        )
        .bind(data.author_id)
        .bind(data.book_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update(&self, id: i32, data: &AuthorBookData) -> AppResult<()> {
        sqlx::query(
            "UPDATE author_books SET author_id = $1, book_id = $2 WHERE author_book_id = $3",
        )
        .bind(data.author_id)
        .bind(data.book_id)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM author_books WHERE author_book_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
