// src/game.rs

use crate::{
    error::AppError,
    leaderboard::fallback_display_name,
    models::{
        answer::{AnswerRecord, SubmitAnswerRequest},
        event::{ActiveQuiz, ControlCommand, EventControl, GameStatus},
        question::{CreateQuestionRequest, PreparedQuestion, PublicQuestion},
        snapshot::{CurrentQuizResponse, QuestionSet, Snapshot},
    },
    utils::{
        html::strip_markup,
        timestamp::{now_millis, to_rfc3339},
    },
};
use validator::Validate;

/// Characters of question text shown in the revealed-quiz banner.
const PREVIEW_CHARS: usize = 50;

/// Shown when the active quiz's answer key matches none of its options.
const UNKNOWN_ANSWER_TEXT: &str = "N/A";

/// Derives the paused/revealed banner from the control flags.
///
/// The active quiz is only described once answers are revealed and the quiz
/// still exists; a dangling `current_quiz_id` still counts as running.
pub fn game_status(control: &EventControl, questions: &QuestionSet) -> GameStatus {
    let active_id = control.active_quiz_id();
    let answers_revealed = control.is_answer_revealed;

    let active_quiz = active_id
        .filter(|_| answers_revealed)
        .and_then(|id| questions.get(id).map(|q| (id, q)))
        .map(|(id, question)| ActiveQuiz {
            quiz_id: id.to_string(),
            question_preview: strip_markup(
                &question.question_text.chars().take(PREVIEW_CHARS).collect::<String>(),
            ),
            correct_answer_text: question
                .correct_answer_text()
                .map(strip_markup)
                .unwrap_or_else(|| UNKNOWN_ANSWER_TEXT.to_string()),
        });

    let question_changed_at =
        active_id.and_then(|_| to_rfc3339(control.question_change_timestamp));

    GameStatus {
        paused: active_id.is_none(),
        answers_revealed,
        question_changed_at,
        active_quiz,
    }
}

/// Computes the control flags after an admin command.
///
/// Activation is refused for a blank or unknown quiz id; pausing and toggling
/// the reveal always succeed.
pub fn apply_control(
    snapshot: &Snapshot,
    command: &ControlCommand,
    now: i64,
) -> Result<EventControl, AppError> {
    let control = &snapshot.control;
    match command {
        ControlCommand::Activate { quiz_id } => {
            let quiz_id = quiz_id.trim();
            if quiz_id.is_empty() {
                return Err(AppError::BadRequest("quiz_id cannot be blank".to_string()));
            }
            if !snapshot.questions.contains_key(quiz_id) {
                return Err(AppError::NotFound(format!("Quiz '{}' not found", quiz_id)));
            }
            Ok(control.activate(quiz_id, now))
        }
        ControlCommand::Pause => Ok(control.pause()),
        ControlCommand::ToggleReveal => Ok(control.toggle_reveal()),
    }
}

/// The question open to submitters, without its answer key.
pub fn current_question(snapshot: &Snapshot, user_id: Option<&str>) -> CurrentQuizResponse {
    let Some(quiz_id) = snapshot.control.active_quiz_id() else {
        return CurrentQuizResponse {
            quiz: None,
            has_answered: false,
        };
    };

    let quiz = snapshot
        .questions
        .get(quiz_id)
        .map(|q| PublicQuestion::from_question(quiz_id, q));

    let has_answered = quiz.is_some()
        && user_id
            .and_then(|uid| snapshot.answers.get(uid))
            .is_some_and(|by_quiz| by_quiz.contains_key(quiz_id));

    CurrentQuizResponse { quiz, has_answered }
}

/// Checks a candidate answer against the snapshot and builds the record to persist.
///
/// Enforces one answer per user per question; the record is stamped with the
/// server clock so later ranking ties go to whoever answered first.
pub fn check_submission(req: &SubmitAnswerRequest) -> Result<AnswerRecord, AppError> {
    let user_id = req.user_id.trim();
    if user_id.is_empty() {
        return Err(AppError::BadRequest(
            "You must be logged in to submit an answer.".to_string(),
        ));
    }

    let snapshot = &req.snapshot;

    let active_id = snapshot
        .control
        .active_quiz_id()
        .ok_or_else(|| AppError::Conflict("Game is paused".to_string()))?;

    if active_id != req.quiz_id.trim() {
        return Err(AppError::Conflict(format!(
            "Quiz '{}' is not the active quiz",
            req.quiz_id
        )));
    }

    let question = snapshot
        .questions
        .get(active_id)
        .ok_or_else(|| AppError::NotFound("Quiz not found".to_string()))?;

    if !question.has_option(req.chosen_option_key) {
        return Err(AppError::BadRequest(format!(
            "Option {} is not an answer to this quiz",
            req.chosen_option_key
        )));
    }

    let already_answered = snapshot
        .answers
        .get(user_id)
        .is_some_and(|by_quiz| by_quiz.contains_key(active_id));
    if already_answered {
        return Err(AppError::Conflict(
            "You have already submitted an answer for this quiz.".to_string(),
        ));
    }

    let submitter_name = match req.submitter_name.trim() {
        "" => fallback_display_name(user_id),
        name => name.to_string(),
    };

    Ok(AnswerRecord {
        user_id: user_id.to_string(),
        quiz_id: active_id.to_string(),
        chosen_option_key: Some(req.chosen_option_key),
        submitter_name,
        submitted_at: now_millis(),
    })
}

/// Validates an authored question and stamps it for insertion.
pub fn prepare_question(req: CreateQuestionRequest) -> Result<PreparedQuestion, AppError> {
    req.validate()?;

    let question_text = req.question_text.trim().to_string();
    if question_text.is_empty() {
        return Err(AppError::BadRequest(
            "question_text: cannot be blank".to_string(),
        ));
    }

    Ok(PreparedQuestion {
        question_text,
        answer_options: req.answer_options,
        correct_option_key: req.correct_option_key,
        created_at: now_millis(),
    })
}
