//! Authors service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Author, AuthorData},
    repository::AuthorStore,
};

#[derive(Clone)]
pub struct AuthorsService {
    store: Arc<dyn AuthorStore>,
}

impl AuthorsService {
    pub fn new(store: Arc<dyn AuthorStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Author>> {
        self.store.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Author> {
        match self.store.get_by_id(id).await {
            Ok(Some(author)) => Ok(author),
            Ok(None) => Err(AppError::NotFound(format!("Author {} not found", id))),
            Err(e) => {
                tracing::warn!("Lookup of author {} failed: {}", id, e);
                Err(AppError::NotFound(format!("Author {} not found", id)))
            }
        }
    }

    pub async fn create(&self, data: AuthorData) -> AppResult<Author> {
        let id = self.store.create(&data).await?;
        tracing::debug!("Created author {}", id);
        Ok(data.into_author(id))
    }

    pub async fn update(&self, id: i32, data: AuthorData) -> AppResult<Author> {
        self.store.update(id, &data).await?;
        Ok(data.into_author(id))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.store.delete(id).await
    }
}
