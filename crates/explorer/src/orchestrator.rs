use std::sync::atomic::{AtomicU64, Ordering};

use tmdb::models::{Genre, Movie};

use crate::source::{MovieSource, SearchRequest};

/// Identifies one issued search; completions are applied only while their
/// token is still the latest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchToken(u64);

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub movies: Vec<Movie>,
    /// Name of the tier that answered; `None` when every tier failed.
    pub tier: Option<&'static str>,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

/// Resolves each search through an ordered fallback chain and enforces the
/// sequence-token staleness discipline.
pub struct Orchestrator {
    tiers: Vec<Box<dyn MovieSource>>,
    latest: AtomicU64,
}

impl Orchestrator {
    pub fn new(tiers: Vec<Box<dyn MovieSource>>) -> Self {
        Self {
            tiers,
            latest: AtomicU64::new(0),
        }
    }

    pub fn issue_token(&self) -> SearchToken {
        SearchToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: SearchToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }

    /// Try each tier in order; first success wins. All tiers failing yields an
    /// empty outcome rather than an error.
    pub async fn search(&self, request: &SearchRequest) -> SearchOutcome {
        for tier in &self.tiers {
            match tier.search(request).await {
                Ok(movies) => {
                    tracing::debug!("{} tier answered with {} results", tier.name(), movies.len());
                    return SearchOutcome {
                        movies,
                        tier: Some(tier.name()),
                    };
                }
                Err(e) => {
                    tracing::warn!("{} tier failed: {}", tier.name(), e);
                }
            }
        }
        SearchOutcome {
            movies: Vec::new(),
            tier: None,
        }
    }

    /// Run a search under a fresh token; returns `None` when a newer search
    /// was issued while this one was in flight.
    pub async fn search_latest(&self, request: &SearchRequest) -> Option<SearchOutcome> {
        let token = self.issue_token();
        let outcome = self.search(request).await;
        self.is_current(token).then_some(outcome)
    }

    /// Resolve the genre list through the same chain; exhaustion yields an
    /// empty list.
    pub async fn genres(&self) -> Vec<Genre> {
        for tier in &self.tiers {
            match tier.genres().await {
                Ok(genres) => return genres,
                Err(e) => {
                    tracing::warn!("{} tier failed to list genres: {}", tier.name(), e);
                }
            }
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::error::SourceError;
    use crate::local::{demo_movies, LocalSource};

    use super::*;

    struct FailingSource;

    #[async_trait]
    impl MovieSource for FailingSource {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn search(&self, _request: &SearchRequest) -> crate::Result<Vec<Movie>> {
            Err(SourceError::Status(502))
        }

        async fn genres(&self) -> crate::Result<Vec<Genre>> {
            Err(SourceError::Status(502))
        }
    }

    struct StaticSource {
        name: &'static str,
        movies: Vec<Movie>,
        delay: Duration,
    }

    impl StaticSource {
        fn new(name: &'static str, movies: Vec<Movie>) -> Self {
            Self {
                name,
                movies,
                delay: Duration::ZERO,
            }
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }
    }

    #[async_trait]
    impl MovieSource for StaticSource {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn search(&self, _request: &SearchRequest) -> crate::Result<Vec<Movie>> {
            tokio::time::sleep(self.delay).await;
            Ok(self.movies.clone())
        }

        async fn genres(&self) -> crate::Result<Vec<Genre>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_first_successful_tier_wins() {
        let direct = demo_movies()[..2].to_vec();
        let orchestrator = Orchestrator::new(vec![
            Box::new(FailingSource),
            Box::new(StaticSource::new("direct-upstream", direct.clone())),
            Box::new(LocalSource),
        ]);

        let outcome = orchestrator.search(&SearchRequest::new()).await;
        assert_eq!(outcome.tier, Some("direct-upstream"));
        assert_eq!(outcome.movies, direct);
    }

    #[tokio::test]
    async fn test_all_tiers_failing_yields_empty_outcome() {
        let orchestrator =
            Orchestrator::new(vec![Box::new(FailingSource), Box::new(FailingSource)]);

        let outcome = orchestrator.search(&SearchRequest::new()).await;
        assert!(outcome.is_empty());
        assert_eq!(outcome.tier, None);
    }

    #[tokio::test]
    async fn test_issuing_a_new_token_invalidates_the_old_one() {
        let orchestrator = Orchestrator::new(vec![Box::new(LocalSource)]);
        let t1 = orchestrator.issue_token();
        let t2 = orchestrator.issue_token();

        assert!(!orchestrator.is_current(t1));
        assert!(orchestrator.is_current(t2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_search_result_is_discarded() {
        let slow_tier =
            StaticSource::new("slow", demo_movies()).with_delay(Duration::from_millis(500));
        let orchestrator = Arc::new(Orchestrator::new(vec![Box::new(slow_tier)]));

        let first = tokio::spawn({
            let orchestrator = Arc::clone(&orchestrator);
            async move { orchestrator.search_latest(&SearchRequest::new()).await }
        });

        // Let the first search issue its token before starting the second.
        tokio::time::sleep(Duration::from_millis(10)).await;
        let second = orchestrator
            .search_latest(&SearchRequest::with_query("pulp"))
            .await;

        assert!(second.is_some());
        assert!(first.await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_genres_fall_through_failed_tiers() {
        let orchestrator =
            Orchestrator::new(vec![Box::new(FailingSource), Box::new(LocalSource)]);
        let genres = orchestrator.genres().await;
        assert!(genres.iter().any(|g| g.id == 18 && g.name == "Drama"));
    }
}
