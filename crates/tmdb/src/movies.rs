use crate::client::LANGUAGE;
use crate::models::{Movie, PaginatedResponse};
use crate::TmdbClient;

/// Parameters for a movie listing/search request.
#[derive(Debug, Clone)]
pub struct MovieQuery {
    pub query: Option<String>,
    pub genre_id: Option<i64>,
    pub page: i64,
}

/// Upstream endpoint selected for a [`MovieQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieEndpoint {
    Search,
    DiscoverByGenre,
    Popular,
}

impl Default for MovieQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieQuery {
    pub fn new() -> Self {
        Self {
            query: None,
            genre_id: None,
            page: 1,
        }
    }

    /// The effective search text: trimmed, `None` when empty.
    pub fn text(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Endpoint precedence: text search wins over genre discovery, which wins
    /// over the popular listing.
    pub fn endpoint(&self) -> MovieEndpoint {
        if self.text().is_some() {
            MovieEndpoint::Search
        } else if self.genre_id.is_some() {
            MovieEndpoint::DiscoverByGenre
        } else {
            MovieEndpoint::Popular
        }
    }

    /// The effective page number, clamped to 1 or above.
    pub fn page(&self) -> i64 {
        self.page.max(1)
    }
}

impl TmdbClient {
    /// List or search movies, selecting the upstream endpoint from the query.
    pub async fn movies(&self, query: &MovieQuery) -> crate::Result<PaginatedResponse<Movie>> {
        let mut params = vec![
            ("api_key".to_string(), self.api_key().to_string()),
            ("language".to_string(), LANGUAGE.to_string()),
            ("page".to_string(), query.page().to_string()),
            ("include_adult".to_string(), "false".to_string()),
        ];

        let path = match query.endpoint() {
            MovieEndpoint::Search => {
                // endpoint() only selects Search when text() is present
                let text = query.text().unwrap_or_default();
                params.push(("query".to_string(), text.to_string()));
                "/search/movie"
            }
            MovieEndpoint::DiscoverByGenre => {
                let genre_id = query.genre_id.unwrap_or_default();
                params.push(("with_genres".to_string(), genre_id.to_string()));
                params.push(("sort_by".to_string(), "popularity.desc".to_string()));
                "/discover/movie"
            }
            MovieEndpoint::Popular => "/movie/popular",
        };

        self.get_json(path, &params).await
    }
}
