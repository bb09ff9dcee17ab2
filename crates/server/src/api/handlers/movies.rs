use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Query, State},
    Json,
};

use tmdb::models::{Movie, PaginatedResponse};

use crate::error::AppResult;
use crate::state::AppState;

use super::MoviesParams;

/// List or search movies through the upstream API.
///
/// A non-empty `query` selects text search; otherwise a `genre` selects
/// discovery sorted by popularity; otherwise the popular listing is returned.
#[utoipa::path(
    get,
    path = "/api/movies",
    tag = "movies",
    params(MoviesParams),
    responses(
        (status = 200, description = "Movie listing", body = PaginatedResponse<Movie>),
        (status = 429, description = "Rate limit exceeded"),
        (status = 500, description = "Upstream request failed"),
        (status = 503, description = "API key not configured")
    )
)]
pub async fn list_movies(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Query(params): Query<MoviesParams>,
) -> AppResult<Json<PaginatedResponse<Movie>>> {
    state.check_rate_limit(&addr)?;
    let tmdb = state.tmdb()?;
    let response = tmdb.movies(&params.to_movie_query()).await?;
    Ok(Json(response))
}
