use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod itinerary;
pub mod state;

pub use state::AppState;

/// Builds the full router: the lookup endpoint, static assets as the
/// fallback, CORS restricted to the one configured frontend origin, and
/// request tracing.
pub fn app(state: AppState, cors_origin: HeaderValue, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(itinerary::routes())
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
