use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tmdb::{RetryPolicy, TmdbClient};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::services::{RateLimitConfig, RateLimiter};

const USER_AGENT: &str = "MovieExplorer/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tmdb: Option<Arc<TmdbClient>>,
    pub limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let tmdb = match &config.tmdb_api_key {
            Some(key) => {
                let client = reqwest::Client::builder()
                    .timeout(REQUEST_TIMEOUT)
                    .connect_timeout(CONNECT_TIMEOUT)
                    .user_agent(USER_AGENT)
                    .build()?;
                Some(Arc::new(
                    TmdbClient::new(client, key.clone()).with_retry(RetryPolicy::default()),
                ))
            }
            None => None,
        };

        Ok(Self {
            config: Arc::new(config),
            tmdb,
            limiter: Arc::new(RateLimiter::new(RateLimitConfig::default())),
        })
    }

    /// The upstream client, or `ConfigMissing` when no credential is set.
    pub fn tmdb(&self) -> AppResult<&TmdbClient> {
        self.tmdb.as_deref().ok_or(AppError::ConfigMissing)
    }

    /// Enforce the per-client rate limit without contacting upstream.
    pub fn check_rate_limit(&self, addr: &SocketAddr) -> AppResult<()> {
        if self.limiter.allow(&addr.ip().to_string()) {
            Ok(())
        } else {
            Err(AppError::TooManyRequests)
        }
    }
}
