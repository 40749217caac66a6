use axum::{routing::get, Router};

use super::handlers;
use super::state::AppState;

/// Versioned prefixes the API answers on (API version 1.0).
const API_V1_PREFIXES: &[&str] = &["/v1", "/v1.0"];

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route(
            "/swagger/:document/swagger.json",
            get(handlers::openapi_document_handler),
        );

    for prefix in API_V1_PREFIXES {
        router = router.nest(prefix, translation_routes());
    }

    router.with_state(state)
}

fn translation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/allLanguages/:current_culture_iso_code",
            get(handlers::all_languages_handler),
        )
        .route(
            "/translations/:current_language_iso_code",
            get(handlers::translations_handler),
        )
}
