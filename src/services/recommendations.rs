use std::cmp::Ordering;
use std::collections::HashSet;

use crate::{
    catalog::Catalog,
    error::AppResult,
    models::{Movie, MovieId},
    services::similarity,
};

/// Number of recommendations returned when the caller does not ask for a count
pub const DEFAULT_RECOMMENDATION_COUNT: usize = 5;

/// Recommends up to `k` movies similar to `target_id`
///
/// Every other catalog movie is scored against the target and the list is ordered by
/// score descending; equal scores are ordered by ascending id. If fewer than `k`
/// candidates exist the list is topped up by [`backfill`].
///
/// Returns `NotFound` when `target_id` is not in the catalog.
pub fn recommend(catalog: &Catalog, target_id: MovieId, k: usize) -> AppResult<Vec<Movie>> {
    let target = catalog.lookup(target_id)?;

    let mut scored: Vec<(&Movie, f64)> = catalog
        .movies()
        .iter()
        .filter(|m| m.id != target_id)
        .map(|m| (m, similarity::score(target, m)))
        .collect();

    scored.sort_by(|(a, a_score), (b, b_score)| {
        b_score.total_cmp(a_score).then_with(|| a.id.cmp(&b.id))
    });

    let candidate_count = scored.len();
    let recommendations: Vec<Movie> = scored
        .into_iter()
        .take(k)
        .map(|(m, _)| m.clone())
        .collect();

    let recommendations = backfill(recommendations, catalog, target_id, k);

    tracing::debug!(
        target_id = %target_id,
        candidate_count,
        recommended = recommendations.len(),
        "Computed recommendations"
    );

    Ok(recommendations)
}

/// Tops up a short list with the highest-rated movies not already present
///
/// The target is never added. Equal ratings are ordered by ascending id. The result
/// may still be shorter than `k` when the catalog runs out of movies.
pub fn backfill(
    mut recommendations: Vec<Movie>,
    catalog: &Catalog,
    target_id: MovieId,
    k: usize,
) -> Vec<Movie> {
    if recommendations.len() >= k {
        return recommendations;
    }

    let mut chosen: HashSet<MovieId> = recommendations.iter().map(|m| m.id).collect();

    let mut popular: Vec<&Movie> = catalog
        .movies()
        .iter()
        .filter(|m| m.id != target_id)
        .collect();
    popular.sort_by(|a, b| by_rating_desc(a, b));

    for movie in popular {
        if recommendations.len() >= k {
            break;
        }
        if chosen.insert(movie.id) {
            recommendations.push(movie.clone());
        }
    }

    recommendations
}

fn by_rating_desc(a: &Movie, b: &Movie) -> Ordering {
    b.rating.total_cmp(&a.rating).then_with(|| a.id.cmp(&b.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn ids(movies: &[Movie]) -> Vec<u32> {
        movies.iter().map(|m| m.id.0).collect()
    }

    fn small_catalog(count: usize) -> Catalog {
        let movies = Catalog::sample().movies()[..count].to_vec();
        Catalog::new(movies).unwrap()
    }

    #[test]
    fn test_shawshank_top_five() {
        let catalog = Catalog::sample();
        let recs = recommend(&catalog, MovieId(1), DEFAULT_RECOMMENDATION_COUNT).unwrap();
        assert_eq!(ids(&recs), vec![4, 2, 8, 3, 12]);
    }

    #[test]
    fn test_inception_top_five() {
        let catalog = Catalog::sample();
        let recs = recommend(&catalog, MovieId(5), 5).unwrap();
        assert_eq!(ids(&recs), vec![20, 6, 15, 10, 9]);
    }

    #[test]
    fn test_equal_scores_break_ties_by_ascending_id() {
        // The Prestige (13) and The Departed (14) score identically against
        // The Social Network: same rating, year, and genre overlap.
        let catalog = Catalog::sample();
        let target = catalog.lookup(MovieId(16)).unwrap();
        assert_eq!(
            similarity::score(target, catalog.lookup(MovieId(13)).unwrap()),
            similarity::score(target, catalog.lookup(MovieId(14)).unwrap())
        );

        let recs = recommend(&catalog, MovieId(16), 6).unwrap();
        assert_eq!(ids(&recs), vec![11, 19, 17, 18, 13, 14]);

        let recs = recommend(&catalog, MovieId(16), 5).unwrap();
        assert_eq!(ids(&recs), vec![11, 19, 17, 18, 13]);
    }

    #[test]
    fn test_unknown_target_is_not_found() {
        let catalog = Catalog::sample();
        let err = recommend(&catalog, MovieId(9999), 5).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_never_includes_target_or_duplicates() {
        let catalog = Catalog::sample();
        for movie in catalog.movies() {
            let recs = recommend(&catalog, movie.id, 5).unwrap();
            assert_eq!(recs.len(), 5);
            assert!(recs.iter().all(|m| m.id != movie.id));
            let unique: HashSet<MovieId> = recs.iter().map(|m| m.id).collect();
            assert_eq!(unique.len(), recs.len());
        }
    }

    #[test]
    fn test_k_larger_than_catalog() {
        let catalog = Catalog::sample();
        let recs = recommend(&catalog, MovieId(1), 50).unwrap();
        assert_eq!(recs.len(), 19);
    }

    #[test]
    fn test_zero_k_is_empty() {
        let catalog = Catalog::sample();
        assert!(recommend(&catalog, MovieId(1), 0).unwrap().is_empty());
    }

    #[test]
    fn test_tiny_catalog_returns_all_others() {
        let catalog = small_catalog(3);
        let recs = recommend(&catalog, MovieId(1), 5).unwrap();
        assert_eq!(recs.len(), 2);
        let unique: HashSet<MovieId> = recs.iter().map(|m| m.id).collect();
        assert_eq!(unique.len(), 2);
        assert!(!unique.contains(&MovieId(1)));
    }

    #[test]
    fn test_single_movie_catalog_is_empty() {
        let catalog = small_catalog(1);
        assert!(recommend(&catalog, MovieId(1), 5).unwrap().is_empty());
    }

    #[test]
    fn test_backfill_appends_by_rating_descending() {
        let catalog = Catalog::sample();
        let start = vec![catalog.lookup(MovieId(16)).unwrap().clone()];

        let filled = backfill(start, &catalog, MovieId(1), 5);
        // Highest rated after the target (9.3): 2 (9.2), then 3 and 8 tie at 9.0
        assert_eq!(ids(&filled), vec![16, 2, 3, 8, 4]);
    }

    #[test]
    fn test_backfill_skips_movies_already_chosen() {
        let catalog = Catalog::sample();
        let start = vec![catalog.lookup(MovieId(2)).unwrap().clone()];

        let filled = backfill(start, &catalog, MovieId(1), 3);
        assert_eq!(ids(&filled), vec![2, 3, 8]);
    }

    #[test]
    fn test_backfill_stops_when_catalog_exhausted() {
        let catalog = small_catalog(3);
        let filled = backfill(vec![], &catalog, MovieId(2), 5);
        assert_eq!(ids(&filled), vec![1, 3]);
    }

    #[test]
    fn test_backfill_leaves_full_list_untouched() {
        let catalog = Catalog::sample();
        let full = recommend(&catalog, MovieId(1), 5).unwrap();
        let filled = backfill(full.clone(), &catalog, MovieId(1), 5);
        assert_eq!(filled, full);
    }
}
