use crate::models::Movie;

/// The built-in catalog served when no catalog file is configured
pub fn sample_movies() -> Vec<Movie> {
    vec![
        Movie::new(1, "The Shawshank Redemption", &["Drama", "Crime"], 1994, 9.3),
        Movie::new(2, "The Godfather", &["Crime", "Drama"], 1972, 9.2),
        Movie::new(3, "The Dark Knight", &["Action", "Crime", "Drama"], 2008, 9.0),
        Movie::new(4, "Pulp Fiction", &["Crime", "Drama"], 1994, 8.9),
        Movie::new(5, "Inception", &["Sci-Fi", "Action", "Adventure"], 2010, 8.8),
        Movie::new(6, "The Matrix", &["Sci-Fi", "Action"], 1999, 8.7),
        Movie::new(7, "Parasite", &["Drama", "Thriller", "Comedy"], 2019, 8.6),
        Movie::new(8, "The Godfather: Part II", &["Crime", "Drama"], 1974, 9.0),
        Movie::new(9, "Interstellar", &["Sci-Fi", "Adventure", "Drama"], 2014, 8.6),
        Movie::new(
            10,
            "The Lord of the Rings: The Return of the King",
            &["Adventure", "Fantasy", "Action"],
            2003,
            8.9,
        ),
        Movie::new(11, "Fight Club", &["Drama"], 1999, 8.8),
        Movie::new(12, "The Silence of the Lambs", &["Crime", "Thriller", "Drama"], 1991, 8.6),
        Movie::new(13, "The Prestige", &["Drama", "Mystery", "Thriller"], 2006, 8.5),
        Movie::new(14, "The Departed", &["Crime", "Drama", "Thriller"], 2006, 8.5),
        Movie::new(15, "The Dark Knight Rises", &["Action", "Adventure"], 2012, 8.4),
        Movie::new(16, "The Social Network", &["Biography", "Drama"], 2010, 7.8),
        Movie::new(17, "The Grand Budapest Hotel", &["Adventure", "Comedy", "Drama"], 2014, 8.1),
        Movie::new(18, "Whiplash", &["Drama", "Music"], 2014, 8.5),
        Movie::new(19, "The Martian", &["Adventure", "Drama", "Sci-Fi"], 2015, 8.0),
        Movie::new(20, "Mad Max: Fury Road", &["Action", "Adventure", "Sci-Fi"], 2015, 8.1),
    ]
}
