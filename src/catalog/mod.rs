//! Read-only movie catalog.
//!
//! The catalog is built once at start-up and never mutated afterwards, so it is
//! shared between request handlers behind a plain `Arc` with no locking.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    models::{Movie, MovieId},
};

mod sample;

pub use sample::sample_movies;

/// Ordered collection of movies, unique by id
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
    index: HashMap<MovieId, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting zero or duplicate ids
    pub fn new(movies: Vec<Movie>) -> AppResult<Self> {
        let mut index = HashMap::with_capacity(movies.len());

        for (position, movie) in movies.iter().enumerate() {
            if movie.id.0 == 0 {
                return Err(AppError::InvalidInput(format!(
                    "Movie '{}' has id 0; ids must be positive",
                    movie.title
                )));
            }
            if index.insert(movie.id, position).is_some() {
                return Err(AppError::InvalidInput(format!(
                    "Duplicate movie id {}",
                    movie.id
                )));
            }
        }

        Ok(Self { movies, index })
    }

    /// The built-in twenty-movie catalog
    pub fn sample() -> Self {
        let movies = sample_movies();
        let index = movies
            .iter()
            .enumerate()
            .map(|(position, movie)| (movie.id, position))
            .collect();
        Self { movies, index }
    }

    /// Loads a catalog from a JSON array of movies
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Catalog(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let movies: Vec<Movie> = serde_json::from_str(&contents)?;

        tracing::info!(
            path = %path.display(),
            movie_count = movies.len(),
            "Loaded catalog file"
        );

        Self::new(movies)
    }

    /// Finds a movie by id
    pub fn lookup(&self, id: MovieId) -> AppResult<&Movie> {
        self.index
            .get(&id)
            .map(|&position| &self.movies[position])
            .ok_or_else(AppError::movie_not_found)
    }

    /// All movies in catalog order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Movies carrying `genre` (case-insensitive); `None`, `""` or `"all"` selects everything
    pub fn filter_by_genre(&self, genre: Option<&str>) -> Vec<&Movie> {
        match genre {
            None | Some("") => self.movies.iter().collect(),
            Some(genre) if genre.eq_ignore_ascii_case("all") => self.movies.iter().collect(),
            Some(genre) => self.movies.iter().filter(|m| m.has_genre(genre)).collect(),
        }
    }

    /// Sorted distinct genre names as spelled in the data
    pub fn genres(&self) -> Vec<String> {
        self.movies
            .iter()
            .flat_map(|m| m.genres.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
