use utoipa::OpenApi;

use tmdb::models::{Genre, GenreListResponse, Movie, PaginatedResponse};

use crate::api::handlers::{HealthResponse, UpstreamTestResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movie Explorer API",
        version = "1.0.0"
    ),
    tags(
        (name = "movies", description = "Movie listing and search endpoints"),
        (name = "genres", description = "Genre listing endpoints"),
        (name = "system", description = "Health and connectivity endpoints")
    ),
    components(schemas(
        Movie,
        Genre,
        GenreListResponse,
        PaginatedResponse<Movie>,
        HealthResponse,
        UpstreamTestResponse
    ))
)]
pub struct ApiDoc;
