use async_trait::async_trait;
use serde_json::Value;

use tmdb::models::{Genre, GenreListResponse, Movie, PaginatedResponse};
use tmdb::{MovieQuery, TmdbClient};

use crate::error::SourceError;

/// One search interaction as issued by the user. Constructed per interaction
/// and discarded once the result is rendered.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: Option<String>,
    pub genre_id: Option<i64>,
    pub page: i64,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchRequest {
    pub fn new() -> Self {
        Self {
            query: None,
            genre_id: None,
            page: 1,
        }
    }

    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::new()
        }
    }

    pub fn with_genre(genre_id: i64) -> Self {
        Self {
            genre_id: Some(genre_id),
            ..Self::new()
        }
    }

    /// The effective search text: trimmed, `None` when empty.
    pub fn text(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn page(&self) -> i64 {
        self.page.max(1)
    }

    fn to_movie_query(&self) -> MovieQuery {
        MovieQuery {
            query: self.query.clone(),
            genre_id: self.genre_id,
            page: self.page,
        }
    }
}

/// One tier in the ordered fallback chain.
#[async_trait]
pub trait MovieSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn search(&self, request: &SearchRequest) -> crate::Result<Vec<Movie>>;

    async fn genres(&self) -> crate::Result<Vec<Genre>>;
}

/// Tier 1: the proxy gateway. Success means a 2xx response with parseable
/// JSON and no embedded error field.
pub struct GatewaySource {
    client: reqwest::Client,
    base_url: String,
}

impl GatewaySource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn get_checked(&self, path: &str, query: &[(String, String)]) -> crate::Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let body: Value =
            serde_json::from_str(&text).map_err(|e| SourceError::Malformed(e.to_string()))?;
        if let Some(error) = body.get("error") {
            return Err(SourceError::Gateway(error.to_string()));
        }
        Ok(body)
    }
}

#[async_trait]
impl MovieSource for GatewaySource {
    fn name(&self) -> &'static str {
        "gateway"
    }

    async fn search(&self, request: &SearchRequest) -> crate::Result<Vec<Movie>> {
        let mut query = vec![("page".to_string(), request.page().to_string())];
        if let Some(text) = request.text() {
            query.push(("query".to_string(), text.to_string()));
        }
        if let Some(genre_id) = request.genre_id {
            query.push(("genre".to_string(), genre_id.to_string()));
        }

        let body = self.get_checked("/api/movies", &query).await?;
        let page: PaginatedResponse<Movie> =
            serde_json::from_value(body).map_err(|e| SourceError::Malformed(e.to_string()))?;
        Ok(page.results)
    }

    async fn genres(&self) -> crate::Result<Vec<Genre>> {
        let body = self.get_checked("/api/genres", &[]).await?;
        let list: GenreListResponse =
            serde_json::from_value(body).map_err(|e| SourceError::Malformed(e.to_string()))?;
        Ok(list.genres)
    }
}

/// Tier 2: direct upstream calls with a fallback credential. Only constructed
/// when that credential is explicitly provided; there is no bundled key.
pub struct UpstreamSource {
    client: TmdbClient,
}

impl UpstreamSource {
    pub fn new(client: TmdbClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MovieSource for UpstreamSource {
    fn name(&self) -> &'static str {
        "direct-upstream"
    }

    async fn search(&self, request: &SearchRequest) -> crate::Result<Vec<Movie>> {
        let page = self.client.movies(&request.to_movie_query()).await?;
        Ok(page.results)
    }

    async fn genres(&self) -> crate::Result<Vec<Genre>> {
        let list = self.client.genres().await?;
        Ok(list.genres)
    }
}
