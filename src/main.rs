use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{build_router, AppState};
use articles_core::{
    config::{page_limit_from_env_value, rest_addr_from_env_value, seed_from_env_value},
    constants::DEFAULT_PAGE_LIMIT,
    ArticleService, CoreConfig,
};

/// Main entry point for the articles application
///
/// Starts the REST server (configurable via ARTICLES_REST_ADDR) over a fresh in-memory store.
///
/// # Environment Variables
/// - `ARTICLES_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `ARTICLES_SEED`: load the three startup articles (default: "true")
/// - `ARTICLES_DEFAULT_PAGE_LIMIT`: page size when a request gives none (default: 10)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - any configuration value is malformed,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("articles_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("articles_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = rest_addr_from_env_value(std::env::var("ARTICLES_REST_ADDR").ok());
    let seed_articles = seed_from_env_value(std::env::var("ARTICLES_SEED").ok())?;
    let default_page_limit = page_limit_from_env_value(
        std::env::var("ARTICLES_DEFAULT_PAGE_LIMIT").ok(),
        DEFAULT_PAGE_LIMIT,
    )?;

    let cfg = Arc::new(CoreConfig::new(seed_articles, default_page_limit)?);
    let service = ArticleService::from_config(cfg);

    tracing::info!(
        "++ Loaded {} articles into the store",
        service.store().len()
    );
    tracing::info!("++ Starting articles REST on {}", rest_addr);

    let app = build_router(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Articles REST stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
        std::future::pending::<()>().await;
    }
}
