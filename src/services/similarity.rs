//! Hand-weighted movie similarity.
//!
//! The score combines three components, each in `[0, 1]`:
//!
//! - genre overlap (Jaccard index over lower-cased genre sets), weight 0.6
//! - rating closeness `1 / (1 + |Δrating|)`, weight 0.3
//! - year closeness `1 / (1 + |Δyear| / 10)`, weight 0.1
//!
//! These weights define the user-visible ranking and must not drift.

use crate::models::Movie;

pub const GENRE_WEIGHT: f64 = 0.6;
pub const RATING_WEIGHT: f64 = 0.3;
pub const YEAR_WEIGHT: f64 = 0.1;

/// Year gaps are divided by this before the decay is applied
pub const YEAR_SCALE: f64 = 10.0;

/// Score given to a movie compared with itself; below any real score
pub const SELF_SCORE: f64 = -1.0;

/// Scores how good a recommendation `candidate` is for someone who picked `selected`
pub fn score(selected: &Movie, candidate: &Movie) -> f64 {
    if selected.id == candidate.id {
        return SELF_SCORE;
    }

    GENRE_WEIGHT * genre_similarity(selected, candidate)
        + RATING_WEIGHT * rating_similarity(selected.rating, candidate.rating)
        + YEAR_WEIGHT * year_similarity(selected.year, candidate.year)
}

/// Jaccard index of the case-insensitive genre sets; 0 when both are empty
pub fn genre_similarity(a: &Movie, b: &Movie) -> f64 {
    let a = a.genre_set();
    let b = b.genre_set();

    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }

    a.intersection(&b).count() as f64 / union as f64
}

/// `1 / (1 + |a - b|)`: 1 for equal ratings, decaying toward 0
pub fn rating_similarity(a: f64, b: f64) -> f64 {
    1.0 / (1.0 + (a - b).abs())
}

/// Like [`rating_similarity`], with the year gap divided by [`YEAR_SCALE`]
pub fn year_similarity(a: i32, b: i32) -> f64 {
    let gap = (i64::from(a) - i64::from(b)).abs() as f64;
    1.0 / (1.0 + gap / YEAR_SCALE)
}
