use axum::{
    extract::{Path, State},
    Extension, Json,
};
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{Movie, MovieId},
    routes::AppState,
    services::recommendations,
};

/// Handler for the recommendations endpoint
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<u32>,
) -> AppResult<Json<Vec<Movie>>> {
    let target_id = MovieId(id);

    let movies = recommendations::recommend(&state.catalog, target_id, state.recommendation_count)
        .map_err(|e| {
            tracing::info!(
                request_id = %request_id,
                target_id = %target_id,
                error = %e,
                "Recommendation failed"
            );
            e
        })?;

    tracing::info!(
        request_id = %request_id,
        target_id = %target_id,
        count = movies.len(),
        "Served recommendations"
    );

    Ok(Json(movies))
}
