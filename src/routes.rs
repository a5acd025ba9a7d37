// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::post,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{control, leaderboard, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (leaderboard, quiz, control).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Config).
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Skipping invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let leaderboard_routes = Router::new()
        .route("/", post(leaderboard::compute_leaderboard))
        .route("/status", post(leaderboard::get_status));

    let quiz_routes = Router::new()
        .route("/current", post(quiz::get_current_quiz))
        .route("/submit", post(quiz::submit_answer))
        .route("/questions", post(quiz::create_question));

    Router::new()
        .nest("/api/leaderboard", leaderboard_routes)
        .nest("/api/quiz", quiz_routes)
        .route("/api/control", post(control::update_control))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
