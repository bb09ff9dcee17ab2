use async_trait::async_trait;

use tmdb::models::{Genre, Movie};

use crate::source::{MovieSource, SearchRequest};

fn demo(
    id: i64,
    title: &str,
    poster_path: &str,
    vote_average: f64,
    release_date: &str,
    genre_ids: &[i64],
) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        original_title: Some(title.to_string()),
        original_language: Some("en".to_string()),
        overview: None,
        poster_path: Some(poster_path.to_string()),
        backdrop_path: None,
        release_date: Some(release_date.to_string()),
        vote_average: Some(vote_average),
        vote_count: None,
        popularity: None,
        genre_ids: genre_ids.to_vec(),
        adult: Some(false),
    }
}

/// Fixed demo catalogue used when both network tiers are unavailable.
pub fn demo_movies() -> Vec<Movie> {
    vec![
        demo(
            27205,
            "Inception",
            "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg",
            8.4,
            "2010-07-16",
            &[28, 878, 53],
        ),
        demo(
            278,
            "The Shawshank Redemption",
            "/q6y0Go1tsGEsmtFryDOJo3dEmqu.jpg",
            8.7,
            "1994-09-23",
            &[18, 80],
        ),
        demo(
            603,
            "The Matrix",
            "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
            8.2,
            "1999-03-31",
            &[28, 878],
        ),
        demo(
            13,
            "Forrest Gump",
            "/arw2vcBveWOVZr6pxd9XTd1TdQa.jpg",
            8.5,
            "1994-07-06",
            &[35, 18],
        ),
        demo(
            680,
            "Pulp Fiction",
            "/d5iIlFn5s0ImszYzBPb8JPIfbXD.jpg",
            8.5,
            "1994-10-14",
            &[53, 80],
        ),
        demo(
            550,
            "Fight Club",
            "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
            8.4,
            "1999-10-15",
            &[18, 53],
        ),
    ]
}

/// Genre names for the demo catalogue.
pub fn demo_genres() -> Vec<Genre> {
    [
        (28, "Action"),
        (35, "Comedy"),
        (80, "Crime"),
        (18, "Drama"),
        (878, "Science Fiction"),
        (53, "Thriller"),
    ]
    .into_iter()
    .map(|(id, name)| Genre {
        id,
        name: name.to_string(),
    })
    .collect()
}

/// Apply the endpoint-selection precedence to an in-memory set: text match is
/// a case-insensitive substring on the title, genre match is exact membership
/// in the movie's genre ids, neither returns the whole set.
pub(crate) fn filter_movies(movies: &[Movie], request: &SearchRequest) -> Vec<Movie> {
    if let Some(text) = request.text() {
        let needle = text.to_lowercase();
        movies
            .iter()
            .filter(|m| m.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    } else if let Some(genre_id) = request.genre_id {
        movies
            .iter()
            .filter(|m| m.genre_ids.contains(&genre_id))
            .cloned()
            .collect()
    } else {
        movies.to_vec()
    }
}

/// Tier 3: the fixed local dataset. Never fails; an empty match is still a
/// successful (empty) result.
pub struct LocalSource;

#[async_trait]
impl MovieSource for LocalSource {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn search(&self, request: &SearchRequest) -> crate::Result<Vec<Movie>> {
        Ok(filter_movies(&demo_movies(), request))
    }

    async fn genres(&self) -> crate::Result<Vec<Genre>> {
        Ok(demo_genres())
    }
}
