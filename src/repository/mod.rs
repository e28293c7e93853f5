//! Repository layer for database operations
//!
//! Each table is reached through its own store trait so that services can be
//! built on top of Postgres in production and on test doubles elsewhere.

pub mod author_books;
pub mod authors;
pub mod books;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Author, AuthorBook, AuthorBookData, AuthorData, Book, BookData},
};

pub use author_books::AuthorBooksRepository;
pub use authors::AuthorsRepository;
pub use books::BooksRepository;

/// Access to the `books` table
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Book>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Option<Book>>;
    /// Insert a row and return the id assigned by the store
    async fn create(&self, data: &BookData) -> AppResult<i32>;
    /// Unconditional update; succeeds even when no row matches
    async fn update(&self, id: i32, data: &BookData) -> AppResult<()>;
    /// Unconditional delete; succeeds even when no row matches
    async fn delete(&self, id: i32) -> AppResult<()>;
    async fn exists(&self, id: i32) -> AppResult<bool>;
}

/// Access to the `authors` table
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Author>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Option<Author>>;
    async fn create(&self, data: &AuthorData) -> AppResult<i32>;
    async fn update(&self, id: i32, data: &AuthorData) -> AppResult<()>;
    async fn delete(&self, id: i32) -> AppResult<()>;
    async fn exists(&self, id: i32) -> AppResult<bool>;
}

/// Access to the `author_books` join table
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorBookStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<AuthorBook>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Option<AuthorBook>>;
    async fn create(&self, data: &AuthorBookData) -> AppResult<i32>;
    async fn update(&self, id: i32, data: &AuthorBookData) -> AppResult<()>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Postgres-backed stores sharing one connection pool
#[derive(Clone)]
pub struct Repository {
    pub books: BooksRepository,
    pub authors: AuthorsRepository,
    pub author_books: AuthorBooksRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: BooksRepository::new(pool.clone()),
            authors: AuthorsRepository::new(pool.clone()),
            author_books: AuthorBooksRepository::new(pool),
        }
    }
}
