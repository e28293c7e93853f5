//! Authors repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::AuthorStore;
use crate::{
    error::AppResult,
    models::{Author, AuthorData},
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorStore for AuthorsRepository {
    async fn list(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, Author>("SELECT id, name, country FROM authors")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Author>> {
        let row = sqlx::query_as::<_, Author>("SELECT id, name, country FROM authors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, data: &AuthorData) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO authors (name, country) VALUES ($1, $2) RETURNING id",
        )
        .bind(&data.name)
        .bind(&data.country)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update(&self, id: i32, data: &AuthorData) -> AppResult<()> {
        sqlx::query("UPDATE authors SET name = $1, country = $2 WHERE id = $3")
            .bind(&data.name)
            .bind(&data.country)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM authors WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }
}
