//! Books service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookData},
    repository::BookStore,
};

#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn BookStore>,
}

impl BooksService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.store.list().await
    }

    /// Store failures are reported as not found, like a missing row
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        match self.store.get_by_id(id).await {
            Ok(Some(book)) => Ok(book),
            Ok(None) => Err(AppError::NotFound(format!("Book {} not found", id))),
            Err(e) => {
                tracing::warn!("Lookup of book {} failed: {}", id, e);
                Err(AppError::NotFound(format!("Book {} not found", id)))
            }
        }
    }

    pub async fn create(&self, data: BookData) -> AppResult<Book> {
        let id = self.store.create(&data).await?;
        tracing::debug!("Created book {}", id);
        Ok(data.into_book(id))
    }

    /// Replace all fields of book `id`, whether or not it exists
    pub async fn update(&self, id: i32, data: BookData) -> AppResult<Book> {
        self.store.update(id, &data).await?;
        Ok(data.into_book(id))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.store.delete(id).await
    }
}
