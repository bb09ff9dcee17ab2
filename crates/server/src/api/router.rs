use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{openapi::ApiDoc, state::AppState};

use super::handlers;

pub fn create_router(state: AppState) -> (Router, utoipa::openapi::OpenApi) {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(handlers::list_movies))
        .routes(routes!(handlers::list_genres))
        .routes(routes!(handlers::health_check))
        .routes(routes!(handlers::test_upstream))
        .with_state(state)
        .split_for_parts();

    (router, api)
}
