//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, author_books, authors, books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Catalog API",
        version = "0.1.0",
        description = "Books, authors and the links between them"
    ),
    paths(
        health::health_check,
        auth::login,
        books::list_books,
        books::create_book,
        books::get_book,
        books::update_book,
        books::delete_book,
        authors::list_authors,
        authors::create_author,
        authors::get_author,
        authors::update_author,
        authors::delete_author,
        author_books::list_author_books,
        author_books::create_author_book,
        author_books::get_author_book,
        author_books::update_author_book,
        author_books::delete_author_book,
    ),
    components(
        schemas(
            auth::LoginRequest,
            auth::LoginResponse,
            crate::models::Book,
            crate::models::BookData,
            crate::models::Author,
            crate::models::AuthorData,
            crate::models::AuthorBook,
            crate::models::AuthorBookData,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&TokenSecurity),
    tags(
        (name = "health", description = "Health check"),
        (name = "auth", description = "Login"),
        (name = "books", description = "Book catalog"),
        (name = "authors", description = "Authors"),
        (name = "authorbooks", description = "Author/book links")
    )
)]
pub struct ApiDoc;

/// Raw token in the `Authorization` header
struct TokenSecurity;

impl Modify for TokenSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("Authorization"))),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
