use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

use crate::source::SearchRequest;

pub const DEFAULT_QUIESCENCE: Duration = Duration::from_millis(300);

/// Raw input events from the search box and genre selector.
#[derive(Debug, Clone)]
pub enum SearchEvent {
    QueryChanged(String),
    GenreSelected(Option<i64>),
}

/// Collapses bursts of input events into effective searches.
///
/// Query edits within the quiescence window fold into a single search using
/// the last text seen; a genre selection fires immediately with the current
/// text and cancels any pending query timer.
pub struct Debouncer {
    quiescence: Duration,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIESCENCE)
    }
}

impl Debouncer {
    pub fn new(quiescence: Duration) -> Self {
        Self { quiescence }
    }

    /// Consume raw events from `events` and emit effective search requests on
    /// `searches` until the event channel closes.
    pub async fn run(
        self,
        mut events: mpsc::Receiver<SearchEvent>,
        searches: mpsc::Sender<SearchRequest>,
    ) {
        let mut query = String::new();
        let mut genre_id: Option<i64> = None;
        let mut deadline: Option<Instant> = None;

        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(SearchEvent::QueryChanged(text)) => {
                        query = text;
                        deadline = Some(Instant::now() + self.quiescence);
                    }
                    Some(SearchEvent::GenreSelected(id)) => {
                        genre_id = id;
                        deadline = None;
                        if searches.send(request(&query, genre_id)).await.is_err() {
                            return;
                        }
                    }
                    None => return,
                },
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    deadline = None;
                    if searches.send(request(&query, genre_id)).await.is_err() {
                        return;
                    }
                }
            }
        }
    }
}

fn request(query: &str, genre_id: Option<i64>) -> SearchRequest {
    SearchRequest {
        query: Some(query.to_string()).filter(|q| !q.trim().is_empty()),
        genre_id,
        page: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(
        debouncer: Debouncer,
    ) -> (mpsc::Sender<SearchEvent>, mpsc::Receiver<SearchRequest>) {
        let (event_tx, event_rx) = mpsc::channel(16);
        let (search_tx, search_rx) = mpsc::channel(16);
        tokio::spawn(debouncer.run(event_rx, search_tx));
        (event_tx, search_rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_query_events_collapse_into_one_search() {
        let (events, mut searches) = start(Debouncer::default());

        for text in ["b", "ba", "bat"] {
            events
                .send(SearchEvent::QueryChanged(text.to_string()))
                .await
                .unwrap();
        }
        tokio::time::sleep(Duration::from_millis(400)).await;

        let request = searches.recv().await.unwrap();
        assert_eq!(request.query.as_deref(), Some("bat"));
        assert!(searches.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_query_events_each_fire() {
        let (events, mut searches) = start(Debouncer::default());

        events
            .send(SearchEvent::QueryChanged("bat".to_string()))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(400)).await;
        events
            .send(SearchEvent::QueryChanged("batman".to_string()))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(400)).await;

        assert_eq!(
            searches.recv().await.unwrap().query.as_deref(),
            Some("bat")
        );
        assert_eq!(
            searches.recv().await.unwrap().query.as_deref(),
            Some("batman")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_genre_selection_fires_immediately_with_current_text() {
        let (events, mut searches) = start(Debouncer::default());

        events
            .send(SearchEvent::QueryChanged("dra".to_string()))
            .await
            .unwrap();
        events
            .send(SearchEvent::GenreSelected(Some(18)))
            .await
            .unwrap();

        let request = searches.recv().await.unwrap();
        assert_eq!(request.genre_id, Some(18));
        assert_eq!(request.query.as_deref(), Some("dra"));

        // The pending query timer was cancelled by the genre event.
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(searches.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_whitespace_query_becomes_absent() {
        let (events, mut searches) = start(Debouncer::default());

        events
            .send(SearchEvent::QueryChanged("   ".to_string()))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(400)).await;

        let request = searches.recv().await.unwrap();
        assert_eq!(request.query, None);
    }
}
