mod error;
mod rest;
mod types;

pub use error::{ApiError, ApiResult};
pub use rest::RestApi;
pub use types::*;

use crate::sweep::SweepCoordinator;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the complete API router: REST endpoints behind permissive CORS and
/// request tracing.
pub fn create_api_server(coordinator: SweepCoordinator) -> Router {
    let rest_api = RestApi::new(coordinator);

    // Anyone may scrape or drive this; the surface carries no credentials
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(rest_api.router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
