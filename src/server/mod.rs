use crate::config::Config;
use crate::fetch::Fetcher;
use crate::metadata::{DetailAggregator, SearchService, TmdbClient};
use crate::scrape::{ImdbScraper, RottenTomatoesScraper};
use anyhow::{Context, Result};
use axum::{
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub mod error;
pub mod routes_api;

pub use error::AppError;

/// Shared application context
#[derive(Clone, Debug)]
pub struct AppContext {
    pub config: Arc<Config>,
    pub search: SearchService,
    pub details: DetailAggregator,
}

impl AppContext {
    /// Wire the TMDB client and scrapers from configuration.
    ///
    /// The HTTP clients created here live for the whole process and are
    /// shared by every request.
    pub fn from_config(config: Config) -> screenscore_common::Result<Self> {
        let tmdb = Arc::new(TmdbClient::new(&config.tmdb)?);
        if !tmdb.is_available() {
            tracing::warn!("TMDB API key missing; search and detail requests will be rejected upstream");
        }
        let fetcher = Fetcher::new(&config.scrape)?;

        let search = SearchService::new(tmdb.clone(), config.tmdb.search_poster_base.clone());
        let details = DetailAggregator::new(
            tmdb,
            Arc::new(ImdbScraper::new(fetcher.clone(), config.scrape.imdb_base_url.clone())),
            Arc::new(RottenTomatoesScraper::new(fetcher, config.scrape.rt_base_url.clone())),
            config.tmdb.detail_poster_base.clone(),
        );

        Ok(Self {
            config: Arc::new(config),
            search,
            details,
        })
    }
}

/// Create the Axum router with all routes
pub fn create_router(ctx: AppContext, static_dir: Option<PathBuf>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let mut app = Router::new()
        // Health check
        .route("/health", get(health_check))
        .nest("/api", routes_api::api_routes());

    // Poster placeholder and other assets live under /static
    if let Some(dir) = static_dir {
        if dir.exists() {
            tracing::info!("Serving static files from {:?}", dir);
            app = app.nest_service("/static", ServeDir::new(dir));
        } else {
            tracing::warn!("Static directory {:?} not found, not serving /static", dir);
        }
    }

    app.layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Start the HTTP server
pub async fn start_server(config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;

    let static_dir = config.server.static_dir.clone();
    let ctx = AppContext::from_config(config)?;
    let app = create_router(ctx, static_dir);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
