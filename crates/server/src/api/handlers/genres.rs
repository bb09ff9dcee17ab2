use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    Json,
};

use tmdb::models::GenreListResponse;

use crate::error::AppResult;
use crate::state::AppState;

/// List movie genres from the upstream API.
#[utoipa::path(
    get,
    path = "/api/genres",
    tag = "genres",
    responses(
        (status = 200, description = "Genre list", body = GenreListResponse),
        (status = 429, description = "Rate limit exceeded"),
        (status = 500, description = "Upstream request failed"),
        (status = 503, description = "API key not configured")
    )
)]
pub async fn list_genres(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> AppResult<Json<GenreListResponse>> {
    state.check_rate_limit(&addr)?;
    let tmdb = state.tmdb()?;
    let response = tmdb.genres().await?;
    Ok(Json(response))
}
