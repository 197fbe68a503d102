use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{Movie, MovieId},
    routes::AppState,
};

#[derive(Debug, Deserialize)]
pub struct MovieQuery {
    genre: Option<String>,
}

/// Lists the catalog, optionally filtered by genre
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MovieQuery>,
) -> Json<Vec<Movie>> {
    let movies = state
        .catalog
        .filter_by_genre(params.genre.as_deref())
        .into_iter()
        .cloned()
        .collect();
    Json(movies)
}

/// Fetches a single movie by id
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> AppResult<Json<Movie>> {
    let movie = state.catalog.lookup(MovieId(id))?;
    Ok(Json(movie.clone()))
}
