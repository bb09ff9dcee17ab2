pub mod api;
pub mod config;
pub mod error;
mod openapi;
pub mod services;
pub mod state;

use std::net::SocketAddr;

use axum::{http::StatusCode, response::IntoResponse, Json};
use utoipa_scalar::{Scalar, Servable};

pub use api::create_router;
pub use config::{Config, Environment};
pub use error::{AppError, AppResult};
pub use state::AppState;

pub async fn run_server(
    addr: SocketAddr,
    env: Environment,
    tmdb_api_key: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::new(env, tmdb_api_key);
    if config.tmdb_api_key.is_none() {
        tracing::warn!("TMDB_API_KEY is not set; /api/movies and /api/genres will answer 503");
    }

    let state = AppState::new(config)?;
    let (router, api) = create_router(state);

    let app = router
        .merge(Scalar::with_url("/docs", api))
        .fallback(api_not_found);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

async fn api_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "API endpoint not found" })),
    )
}
