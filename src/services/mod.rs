//! Business logic services

pub mod auth;
pub mod author_books;
pub mod authors;
pub mod books;
pub mod tokens;

use std::sync::Arc;

use crate::{
    config::AuthConfig,
    repository::{AuthorBookStore, AuthorStore, BookStore, Repository},
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub books: books::BooksService,
    pub authors: authors::AuthorsService,
    pub author_books: author_books::AuthorBooksService,
}

impl Services {
    /// Create all services backed by the Postgres repository
    pub fn new(repository: Repository, auth_config: &AuthConfig) -> Self {
        Self::with_stores(
            Arc::new(repository.books),
            Arc::new(repository.authors),
            Arc::new(repository.author_books),
            auth_config,
        )
    }

    /// Create all services on top of arbitrary store implementations
    pub fn with_stores(
        books: Arc<dyn BookStore>,
        authors: Arc<dyn AuthorStore>,
        author_books: Arc<dyn AuthorBookStore>,
        auth_config: &AuthConfig,
    ) -> Self {
        Self {
            auth: auth::AuthService::new(auth_config),
            books: books::BooksService::new(books.clone()),
            authors: authors::AuthorsService::new(authors.clone()),
            author_books: author_books::AuthorBooksService::new(author_books, authors, books),
        }
    }
}
