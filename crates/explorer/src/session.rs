use std::collections::HashMap;

use tmdb::models::Genre;

use crate::orchestrator::Orchestrator;

/// Per-session context: the genre id → name mapping, loaded once at startup
/// and passed explicitly to the renderer.
pub struct Session {
    genres: HashMap<i64, String>,
}

impl Session {
    pub fn new(genres: Vec<Genre>) -> Self {
        Self {
            genres: genres.into_iter().map(|g| (g.id, g.name)).collect(),
        }
    }

    /// Resolve the genre list through the fallback chain and build the
    /// session context.
    pub async fn initialize(orchestrator: &Orchestrator) -> Self {
        Self::new(orchestrator.genres().await)
    }

    pub fn genre_name(&self, id: i64) -> Option<&str> {
        self.genres.get(&id).map(String::as_str)
    }

    pub fn genre_count(&self) -> usize {
        self.genres.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::local::demo_genres;

    use super::*;

    #[test]
    fn test_lookup_by_id() {
        let session = Session::new(demo_genres());
        assert_eq!(session.genre_name(18), Some("Drama"));
        assert_eq!(session.genre_name(999), None);
    }
}
