//! API Server - HTTP server for the spam REST API

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::{self, AppState};
use crate::error::{DetectorError, Result};

/// API Server configuration
pub struct ApiServer {
    state: Arc<AppState>,
    addr: String,
    cors_origin: Option<HeaderValue>,
}

impl ApiServer {
    /// Create a new API server, rejecting a CORS origin that does not parse
    /// as a header value
    pub fn new(state: AppState, addr: String, cors_origin: Option<String>) -> Result<Self> {
        let cors_origin = match cors_origin {
            Some(origin) => {
                let value = origin.parse::<HeaderValue>().map_err(|_| {
                    DetectorError::Config(format!("Invalid cors_origin: {:?}", origin))
                })?;
                Some(value)
            }
            None => None,
        };

        Ok(Self {
            state: Arc::new(state),
            addr,
            cors_origin,
        })
    }

    /// CORS restricted to the configured origin, or permissive without one
    fn cors_layer(&self) -> CorsLayer {
        match &self.cors_origin {
            Some(origin) => CorsLayer::new()
                .allow_origin(origin.clone())
                .allow_methods(Any)
                .allow_headers(Any),
            None => CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        }
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        let spam_routes = Router::new()
            .route("/spam", get(handlers::list_scores))
            .route("/spam/accuracy", get(handlers::get_accuracy))
            .route("/spam/precision", get(handlers::get_precision))
            .route("/spam/stats", get(handlers::get_stats))
            .route("/spam/score", post(handlers::score_message));

        Router::new()
            .route("/health", get(handlers::health))
            .nest("/api", spam_routes)
            .layer(TraceLayer::new_for_http())
            .layer(self.cors_layer())
            .with_state(self.state.clone())
    }

    /// Start the API server
    pub async fn run(&self) -> std::io::Result<()> {
        let router = self.router();

        info!("Starting API server on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
