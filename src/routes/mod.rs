use axum::{http::StatusCode, middleware, routing::get, Json, Router};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{
    catalog::Catalog,
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::recommendations::DEFAULT_RECOMMENDATION_COUNT,
};

pub mod genres;
pub mod movies;
pub mod recommendations;

/// Shared, read-only application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub recommendation_count: usize,
    /// Directory served for `/` and static assets, if any
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            recommendation_count: DEFAULT_RECOMMENDATION_COUNT,
            static_dir: None,
        }
    }

    pub fn with_recommendation_count(mut self, count: usize) -> Self {
        self.recommendation_count = count;
        self
    }

    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::sample())
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.static_dir.clone();

    let mut router = Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .with_state(Arc::new(state));

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
}

/// API routes under /api
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/movies", get(movies::list))
        .route("/movies/:id", get(movies::get))
        .route("/genres", get(genres::list))
        .route("/recommend/:id", get(recommendations::recommend))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
