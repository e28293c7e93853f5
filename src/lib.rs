//! Library catalog server
//!
//! A REST JSON API over books, authors and the links between them, guarded by
//! a token issued at login.

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(services: services::Services) -> Self {
        Self {
            services: Arc::new(services),
        }
    }
}

/// Create the application router with all routes
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Every route here requires a valid token
    let protected = Router::new()
        .route(
            "/books",
            get(api::books::list_books).post(api::books::create_book),
        )
        .route(
            "/books/:id",
            get(api::books::get_book)
                .put(api::books::update_book)
                .delete(api::books::delete_book),
        )
        .route(
            "/authors",
            get(api::authors::list_authors).post(api::authors::create_author),
        )
        .route(
            "/authors/:id",
            get(api::authors::get_author)
                .put(api::authors::update_author)
                .delete(api::authors::delete_author),
        )
        .route(
            "/authorbooks",
            get(api::author_books::list_author_books).post(api::author_books::create_author_book),
        )
        .route(
            "/authorbooks/:id",
            get(api::author_books::get_author_book)
                .put(api::author_books::update_author_book)
                .delete(api::author_books::delete_author_book),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            api::auth::require_token,
        ));

    let public = Router::new()
        .route("/login", post(api::auth::login))
        .route("/health", get(api::health::health_check));

    Router::new()
        .merge(protected)
        .merge(public)
        .with_state(state)
        .merge(api::openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
