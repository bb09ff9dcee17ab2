use tmdb::models::Movie;

use crate::session::Session;

const IMG_BASE: &str = "https://image.tmdb.org/t/p/w500";
const PLACEHOLDER_POSTER: &str =
    "https://via.placeholder.com/300x450/667eea/ffffff?text=No+Image";

pub const EMPTY_RESULTS_MESSAGE: &str = "No movies found. Try a different search.";

/// Display-ready projection of a movie result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCard {
    pub title: String,
    pub year: String,
    pub rating: String,
    pub genres: Vec<String>,
    pub poster_url: String,
}

impl MovieCard {
    pub fn from_movie(movie: &Movie, session: &Session) -> Self {
        // get() instead of indexing: a malformed date whose fourth byte is
        // not a char boundary degrades to "N/A" rather than panicking.
        let year = movie
            .release_date
            .as_deref()
            .and_then(|d| d.get(..4))
            .map(str::to_string)
            .unwrap_or_else(|| "N/A".to_string());

        let rating = movie
            .vote_average
            .map(|v| format!("{:.1}", v))
            .unwrap_or_else(|| "N/A".to_string());

        // The first two genre ids, with unresolved ids silently dropped; a
        // movie may therefore render fewer than two tags.
        let genres = movie
            .genre_ids
            .iter()
            .take(2)
            .filter_map(|id| session.genre_name(*id))
            .map(str::to_string)
            .collect();

        let poster_url = match &movie.poster_path {
            Some(path) => format!("{}{}", IMG_BASE, path),
            None => PLACEHOLDER_POSTER.to_string(),
        };

        Self {
            title: movie.title.clone(),
            year,
            rating,
            genres,
            poster_url,
        }
    }
}

pub fn render_cards(movies: &[Movie], session: &Session) -> Vec<MovieCard> {
    movies
        .iter()
        .map(|movie| MovieCard::from_movie(movie, session))
        .collect()
}

/// Status line shown above the result grid.
pub fn results_summary(count: usize) -> String {
    if count == 0 {
        EMPTY_RESULTS_MESSAGE.to_string()
    } else {
        format!("Found {} movies", count)
    }
}
