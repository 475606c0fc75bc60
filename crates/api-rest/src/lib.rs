//! # API REST
//!
//! REST API implementation for the article manager.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON bodies, status codes, CORS)
//!
//! Uses `api-shared` for wire types and `articles-core` for the operations themselves.

#![warn(rust_2018_idioms)]

pub mod error;
mod handlers;

use api_shared::{
    ArticleRes, CreateArticleReq, DeleteArticleReq, HealthRes, ListArticlesRes, MessageRes,
    UpdateArticleReq,
};
use articles_core::ArticleService;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state for the REST API server
///
/// Holds the article service, which in turn shares the single in-memory store.
#[derive(Clone)]
pub struct AppState {
    pub service: ArticleService,
}

impl AppState {
    pub fn new(service: ArticleService) -> Self {
        Self { service }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::list_articles,
        handlers::create_article,
        handlers::delete_article,
        handlers::get_article,
        handlers::update_article,
    ),
    components(schemas(
        HealthRes,
        MessageRes,
        ArticleRes,
        ListArticlesRes,
        CreateArticleReq,
        UpdateArticleReq,
        DeleteArticleReq,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router with Swagger UI and permissive CORS.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/articles",
            get(handlers::list_articles)
                .post(handlers::create_article)
                .delete(handlers::delete_article),
        )
        .route(
            "/articles/",
            get(handlers::get_article_without_id).put(handlers::update_article_without_id),
        )
        .route(
            "/articles/:id",
            get(handlers::get_article).put(handlers::update_article),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(handlers::not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
