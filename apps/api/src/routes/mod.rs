pub mod catalog;
pub mod health;

use axum::{
    http::{header, HeaderName, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::roadmap::handlers;
use crate::state::AppState;

pub const GENERATE_ROADMAP_PATH: &str = "/functions/v1/generate-career-roadmap";

/// Any origin; the headers browser clients of the hosted backend send.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ])
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Roadmap generation
        .route(
            GENERATE_ROADMAP_PATH,
            post(handlers::handle_generate_roadmap).options(handlers::handle_preflight),
        )
        .route(
            "/api/v1/roadmaps/generate",
            post(handlers::handle_generate_roadmap).options(handlers::handle_preflight),
        )
        // Roadmap history
        .route("/api/v1/roadmaps", get(handlers::handle_list_roadmaps))
        .route(
            "/api/v1/roadmaps/:id/markdown",
            get(handlers::handle_roadmap_markdown),
        )
        // Reference data
        .route("/api/v1/courses", get(catalog::handle_list_courses))
        .route("/api/v1/schools", get(catalog::handle_list_schools))
        .layer(cors_layer())
        .with_state(state)
}
