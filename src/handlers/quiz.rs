// src/handlers/quiz.rs

use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::{
    error::AppError,
    game::{check_submission, current_question, prepare_question},
    models::{
        answer::SubmitAnswerRequest, question::CreateQuestionRequest,
        snapshot::CurrentQuizRequest,
    },
};

/// Returns the question currently open for answers, with the answer key hidden.
pub async fn get_current_quiz(
    Json(req): Json<CurrentQuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(current_question(&req.snapshot, req.user_id.as_deref())))
}

/// Validates a user's answer against the current snapshot.
///
/// * Rejects when the game is paused or the quiz is not the active one.
/// * Rejects a second answer from the same user to the same quiz.
/// * Returns the record to write, stamped with the server time.
pub async fn submit_answer(
    Json(req): Json<SubmitAnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let record = check_submission(&req).inspect_err(|e| {
        tracing::warn!("Rejected answer from '{}': {}", req.user_id, e);
    })?;

    tracing::info!(
        "Accepted answer from '{}' for quiz '{}'",
        record.user_id,
        record.quiz_id
    );

    Ok((StatusCode::CREATED, Json(record)))
}

/// Validates a newly authored question.
pub async fn create_question(
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let prepared = prepare_question(payload)?;

    Ok((StatusCode::CREATED, Json(prepared)))
}
