// src/handlers/control.rs

use axum::{Json, response::IntoResponse};

use crate::{
    error::AppError,
    game::apply_control,
    models::event::ControlRequest,
    utils::timestamp::now_millis,
};

/// Applies an admin command (activate quiz, pause, toggle reveal) and returns
/// the control flags to write back.
pub async fn update_control(
    Json(req): Json<ControlRequest>,
) -> Result<impl IntoResponse, AppError> {
    let control = apply_control(&req.snapshot, &req.command, now_millis()).inspect_err(|e| {
        tracing::warn!("Rejected control command {:?}: {}", req.command, e);
    })?;

    tracing::info!(
        "Control updated: quiz={:?}, revealed={}",
        control.current_quiz_id,
        control.is_answer_revealed
    );

    Ok(Json(control))
}
