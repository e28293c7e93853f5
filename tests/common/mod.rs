//! Shared helpers for router tests: an in-memory store and request plumbing

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header::AUTHORIZATION, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot`

use catalog_server::{
    build_router,
    config::AuthConfig,
    models::{Author, AuthorBook, AuthorBookData, AuthorData, Book, BookData},
    repository::{AuthorBookStore, AuthorStore, BookStore},
    services::Services,
    AppResult, AppState,
};

#[derive(Default)]
struct Tables {
    next_id: i32,
    books: BTreeMap<i32, Book>,
    authors: BTreeMap<i32, Author>,
    author_books: BTreeMap<i32, AuthorBook>,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

/// All three tables behind one lock, counting every store call
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    calls: AtomicUsize,
}

impl MemoryStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn tables(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.tables.lock().unwrap()
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.tables().books.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        Ok(self.tables().books.get(&id).cloned())
    }

    async fn create(&self, data: &BookData) -> AppResult<i32> {
        let mut tables = self.tables();
        let id = tables.next_id();
        tables.books.insert(id, data.clone().into_book(id));
        Ok(id)
    }

    async fn update(&self, id: i32, data: &BookData) -> AppResult<()> {
        let mut tables = self.tables();
        if let Some(book) = tables.books.get_mut(&id) {
            *book = data.clone().into_book(id);
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.tables().books.remove(&id);
        Ok(())
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        Ok(self.tables().books.contains_key(&id))
    }
}

#[async_trait]
impl AuthorStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Author>> {
        Ok(self.tables().authors.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Author>> {
        Ok(self.tables().authors.get(&id).cloned())
    }

    async fn create(&self, data: &AuthorData) -> AppResult<i32> {
        let mut tables = self.tables();
        let id = tables.next_id();
        tables.authors.insert(id, data.clone().into_author(id));
        Ok(id)
    }

    async fn update(&self, id: i32, data: &AuthorData) -> AppResult<()> {
        let mut tables = self.tables();
        if let Some(author) = tables.authors.get_mut(&id) {
            *author = data.clone().into_author(id);
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.tables().authors.remove(&id);
        Ok(())
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        Ok(self.tables().authors.contains_key(&id))
    }
}

#[async_trait]
impl AuthorBookStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<AuthorBook>> {
        Ok(self.tables().author_books.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<AuthorBook>> {
        Ok(self.tables().author_books.get(&id).cloned())
    }

    async fn create(&self, data: &AuthorBookData) -> AppResult<i32> {
        let mut tables = self.tables();
        let id = tables.next_id();
        tables.author_books.insert(id, data.into_author_book(id));
        Ok(id)
    }

    async fn update(&self, id: i32, data: &AuthorBookData) -> AppResult<()> {
        let mut tables = self.tables();
        if let Some(link) = tables.author_books.get_mut(&id) {
            *link = data.into_author_book(id);
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.tables().author_books.remove(&id);
        Ok(())
    }
}

/// Router over a fresh in-memory store with the default credentials
pub fn setup_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let services = Services::with_stores(
        store.clone(),
        store.clone(),
        store.clone(),
        &AuthConfig::default(),
    );
    (build_router(AppState::new(services)), store)
}

/// Send one request through the router, returning status and parsed body
/// (`Value::Null` when the body is empty)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, token);
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Should parse JSON")
    };
    (status, body)
}

/// Log in as the built-in admin and return the token
pub async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/login",
        None,
        Some(json!({ "username": "admin", "password": "password" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().expect("No token in response").to_string()
}
