//! Author/book relations service
//!
//! Both referenced rows are checked with separate queries before the write.
//! The check and the write are not wrapped in a transaction, so a concurrent
//! delete of the author or book can still slip in between them.

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{AuthorBook, AuthorBookData},
    repository::{AuthorBookStore, AuthorStore, BookStore},
};

#[derive(Clone)]
pub struct AuthorBooksService {
    store: Arc<dyn AuthorBookStore>,
    authors: Arc<dyn AuthorStore>,
    books: Arc<dyn BookStore>,
}

impl AuthorBooksService {
    pub fn new(
        store: Arc<dyn AuthorBookStore>,
        authors: Arc<dyn AuthorStore>,
        books: Arc<dyn BookStore>,
    ) -> Self {
        Self { store, authors, books }
    }

    pub async fn list(&self) -> AppResult<Vec<AuthorBook>> {
        self.store.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<AuthorBook> {
        match self.store.get_by_id(id).await {
            Ok(Some(author_book)) => Ok(author_book),
            Ok(None) => Err(AppError::NotFound(format!("Author book {} not found", id))),
            Err(e) => {
                tracing::warn!("Lookup of author book {} failed: {}", id, e);
                Err(AppError::NotFound(format!("Author book {} not found", id)))
            }
        }
    }

    pub async fn create(&self, data: AuthorBookData) -> AppResult<AuthorBook> {
        self.check_references(&data).await?;
        let id = self.store.create(&data).await?;
        tracing::debug!(
            "Linked author {} to book {} as {}",
            data.author_id,
            data.book_id,
            id
        );
        Ok(data.into_author_book(id))
    }

    pub async fn update(&self, id: i32, data: AuthorBookData) -> AppResult<AuthorBook> {
        self.check_references(&data).await?;
        self.store.update(id, &data).await?;
        Ok(data.into_author_book(id))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.store.delete(id).await
    }

    /// Author first, then book; the first missing one is reported
    async fn check_references(&self, data: &AuthorBookData) -> AppResult<()> {
        if !self.authors.exists(data.author_id).await? {
            return Err(AppError::MissingReference("Author does not exist".to_string()));
        }
        if !self.books.exists(data.book_id).await? {
            return Err(AppError::MissingReference("Book does not exist".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MockAuthorBookStore, MockAuthorStore, MockBookStore};
    use mockall::predicate::eq;

    fn link(author_id: i32, book_id: i32) -> AuthorBookData {
        AuthorBookData { author_id, book_id }
    }

    fn service(
        store: MockAuthorBookStore,
        authors: MockAuthorStore,
        books: MockBookStore,
    ) -> AuthorBooksService {
        AuthorBooksService::new(Arc::new(store), Arc::new(authors), Arc::new(books))
    }

    #[tokio::test]
    async fn test_missing_author_blocks_insert() {
        let mut authors = MockAuthorStore::new();
        authors.expect_exists().with(eq(1)).returning(|_| Ok(false));
        let mut books = MockBookStore::new();
        books.expect_exists().never();
        let mut store = MockAuthorBookStore::new();
        store.expect_create().never();

        let err = service(store, authors, books).create(link(1, 2)).await.unwrap_err();
        assert!(matches!(err, AppError::MissingReference(ref msg) if msg == "Author does not exist"));
    }

    #[tokio::test]
    async fn test_missing_book_blocks_insert() {
        let mut authors = MockAuthorStore::new();
        authors.expect_exists().returning(|_| Ok(true));
        let mut books = MockBookStore::new();
        books.expect_exists().with(eq(2)).returning(|_| Ok(false));
        let mut store = MockAuthorBookStore::new();
        store.expect_create().never();

        let err = service(store, authors, books).create(link(1, 2)).await.unwrap_err();
        assert!(matches!(err, AppError::MissingReference(ref msg) if msg == "Book does not exist"));
    }

    #[tokio::test]
    async fn test_existence_query_failure_is_internal() {
        let mut authors = MockAuthorStore::new();
        authors
            .expect_exists()
            .returning(|_| Err(AppError::Database(sqlx::Error::PoolTimedOut)));
        let mut store = MockAuthorBookStore::new();
        store.expect_create().never();

        let err = service(store, authors, MockBookStore::new())
            .create(link(1, 2))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }

    #[tokio::test]
    async fn test_create_after_both_checks_pass() {
        let mut authors = MockAuthorStore::new();
        authors.expect_exists().returning(|_| Ok(true));
        let mut books = MockBookStore::new();
        books.expect_exists().returning(|_| Ok(true));
        let mut store = MockAuthorBookStore::new();
        store
            .expect_create()
            .with(eq(link(1, 2)))
            .times(1)
            .returning(|_| Ok(3));

        let created = service(store, authors, books).create(link(1, 2)).await.unwrap();
        assert_eq!(
            created,
            AuthorBook {
                author_book_id: 3,
                author_id: 1,
                book_id: 2
            }
        );
    }

    #[tokio::test]
    async fn test_update_checks_references_too() {
        let mut authors = MockAuthorStore::new();
        authors.expect_exists().returning(|_| Ok(true));
        let mut books = MockBookStore::new();
        books.expect_exists().returning(|_| Ok(false));
        let mut store = MockAuthorBookStore::new();
        store.expect_update().never();

        let err = service(store, authors, books).update(7, link(1, 2)).await.unwrap_err();
        assert!(matches!(err, AppError::MissingReference(_)));
    }
}
