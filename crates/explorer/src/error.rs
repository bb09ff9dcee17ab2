#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("gateway returned status {0}")]
    Status(u16),

    #[error("gateway reported an error: {0}")]
    Gateway(String),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("upstream error: {0}")]
    Upstream(#[from] tmdb::TmdbError),
}
