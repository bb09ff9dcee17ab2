#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("TMDB API error (status {status_code}): {message}")]
    Api { status_code: u16, message: String },
}

impl TmdbError {
    /// Whether the error is worth retrying: network-level failures and
    /// upstream 5xx/429 responses. Body decode failures are permanent.
    pub fn is_transient(&self) -> bool {
        match self {
            TmdbError::Request(e) => !e.is_decode(),
            TmdbError::Api { status_code, .. } => *status_code >= 500 || *status_code == 429,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_errors_are_transient() {
        let err = TmdbError::Api {
            status_code: 503,
            message: String::new(),
        };
        assert!(err.is_transient());

        let err = TmdbError::Api {
            status_code: 429,
            message: String::new(),
        };
        assert!(err.is_transient());
    }

    #[test]
    fn test_client_errors_are_permanent() {
        let err = TmdbError::Api {
            status_code: 404,
            message: "not found".to_string(),
        };
        assert!(!err.is_transient());

        let err = TmdbError::Api {
            status_code: 401,
            message: "invalid key".to_string(),
        };
        assert!(!err.is_transient());
    }
}
