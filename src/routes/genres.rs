use axum::{extract::State, Json};
use std::sync::Arc;

use crate::routes::AppState;

/// Sorted distinct genre names across the catalog
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.catalog.genres())
}
