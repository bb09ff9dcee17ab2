use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::TmdbError;
use crate::retry::RetryPolicy;

const BASE_URL: &str = "https://api.themoviedb.org/3";
pub(crate) const LANGUAGE: &str = "en-US";

pub struct TmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
    retry: RetryPolicy,
}

impl TmdbClient {
    /// Create a TmdbClient with the given reqwest Client and API key.
    /// Request timeouts are the client's responsibility; no retry by default.
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            retry: RetryPolicy::none(),
        }
    }

    /// Override the base URL, mainly for tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Wrap every request in the given retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> crate::Result<T> {
        let url = self.url(path);
        self.retry
            .run(|| async {
                let response = self.client.get(&url).query(query).send().await?;
                let status = response.status();
                if !status.is_success() {
                    let message = response.text().await.unwrap_or_default();
                    return Err(TmdbError::Api {
                        status_code: status.as_u16(),
                        message,
                    });
                }
                Ok(response.json().await?)
            })
            .await
    }
}
