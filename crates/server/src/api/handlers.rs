mod genres;
mod health;
mod movies;

use serde::Deserialize;
use tmdb::MovieQuery;
use utoipa::IntoParams;

/// Raw query parameters for movie listing/search.
///
/// `genre` and `page` arrive as free-form strings and parse leniently:
/// unparseable values fall back to their defaults instead of rejecting the
/// request.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct MoviesParams {
    /// Free-text search query
    #[serde(default)]
    pub query: String,
    /// Genre id filter
    #[serde(default)]
    pub genre: String,
    /// Result page, 1-based
    #[serde(default)]
    pub page: String,
}

impl MoviesParams {
    pub fn to_movie_query(&self) -> MovieQuery {
        let query = Some(self.query.clone()).filter(|q| !q.trim().is_empty());
        let genre_id = self.genre.trim().parse::<i64>().ok();
        let page = self
            .page
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|p| *p >= 1)
            .unwrap_or(1);
        MovieQuery {
            query,
            genre_id,
            page,
        }
    }
}

// Re-export all handlers
pub use genres::list_genres;
pub use health::{health_check, HealthResponse};
pub use movies::list_movies;
pub use test::{test_upstream, UpstreamTestResponse};

// Re-export utoipa path structs for OpenAPI routing
#[doc(hidden)]
pub use genres::__path_list_genres;
#[doc(hidden)]
pub use health::__path_health_check;
#[doc(hidden)]
pub use movies::__path_list_movies;
#[doc(hidden)]
pub use test::__path_test_upstream;

#[cfg(test)]
mod tests {
    use tmdb::MovieEndpoint;

    use super::*;

    #[test]
    fn test_params_parse_leniently() {
        let params = MoviesParams {
            query: String::new(),
            genre: "abc".to_string(),
            page: "zero".to_string(),
        };
        let query = params.to_movie_query();
        assert_eq!(query.genre_id, None);
        assert_eq!(query.page, 1);
        assert_eq!(query.endpoint(), MovieEndpoint::Popular);
    }

    #[test]
    fn test_empty_genre_is_absent() {
        let params = MoviesParams {
            query: String::new(),
            genre: String::new(),
            page: "2".to_string(),
        };
        let query = params.to_movie_query();
        assert_eq!(query.genre_id, None);
        assert_eq!(query.page, 2);
    }

    #[test]
    fn test_query_precedence_survives_translation() {
        let params = MoviesParams {
            query: "batman".to_string(),
            genre: "18".to_string(),
            page: String::new(),
        };
        let query = params.to_movie_query();
        assert_eq!(query.endpoint(), MovieEndpoint::Search);
        assert_eq!(query.genre_id, Some(18));
    }

    #[test]
    fn test_negative_page_defaults_to_one() {
        let params = MoviesParams {
            page: "-2".to_string(),
            ..MoviesParams::default()
        };
        assert_eq!(params.to_movie_query().page, 1);
    }
}
