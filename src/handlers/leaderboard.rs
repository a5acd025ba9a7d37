// src/handlers/leaderboard.rs

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};

use crate::{
    config::Config,
    error::AppError,
    game::game_status,
    leaderboard::{rank_entries, rank_users},
    models::{
        score::{LeaderboardParams, LeaderboardResponse},
        snapshot::Snapshot,
    },
};

/// Ranks every player in the posted snapshot.
///
/// * Scores are recomputed from scratch on each call.
/// * `limit` (or `LEADERBOARD_LIMIT`) trims the returned rows only;
///   `total_players` always counts everyone. `limit=0` means unlimited.
pub async fn compute_leaderboard(
    State(config): State<Config>,
    Query(params): Query<LeaderboardParams>,
    Json(snapshot): Json<Snapshot>,
) -> Result<impl IntoResponse, AppError> {
    let scores = rank_users(&snapshot.questions, &snapshot.answers);
    let total_players = scores.len();

    let mut entries = rank_entries(scores);
    // An explicit 0 lifts any configured limit.
    let limit = match params.limit {
        Some(0) => None,
        Some(n) => Some(n),
        None => config.leaderboard_limit,
    };
    if let Some(limit) = limit {
        entries.truncate(limit);
    }

    tracing::debug!(
        "Ranked {} players over {} questions",
        total_players,
        snapshot.questions.len()
    );

    Ok(Json(LeaderboardResponse {
        status: game_status(&snapshot.control, &snapshot.questions),
        entries,
        total_players,
        generated_at: chrono::Utc::now(),
    }))
}

/// Returns only the paused/revealed banner for the posted snapshot.
pub async fn get_status(Json(snapshot): Json<Snapshot>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(game_status(&snapshot.control, &snapshot.questions)))
}
