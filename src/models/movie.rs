use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt::Display};

/// Stable identity key of a catalog movie
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u32);

impl Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MovieId {
    fn from(id: u32) -> Self {
        MovieId(id)
    }
}

/// A movie as served by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Genre names as spelled in the source data; compared case-insensitively
    pub genres: Vec<String>,
    pub year: i32,
    pub rating: f64,
}

impl Movie {
    pub fn new(id: u32, title: &str, genres: &[&str], year: i32, rating: f64) -> Self {
        Self {
            id: MovieId(id),
            title: title.to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            year,
            rating,
        }
    }

    /// Lower-cased, de-duplicated genres
    pub fn genre_set(&self) -> HashSet<String> {
        self.genres.iter().map(|g| g.to_lowercase()).collect()
    }

    /// Case-insensitive genre membership
    pub fn has_genre(&self, genre: &str) -> bool {
        let genre = genre.to_lowercase();
        self.genres.iter().any(|g| g.to_lowercase() == genre)
    }
}
