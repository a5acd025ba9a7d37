// src/models/snapshot.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{answer::AnswerRecord, event::EventControl, question::QuizQuestion};

/// quiz id -> question
pub type QuestionSet = BTreeMap<String, QuizQuestion>;

/// user id -> (quiz id -> answer)
pub type AnswerSheet = BTreeMap<String, BTreeMap<String, AnswerRecord>>;

/// A consistent read of the store at one instant.
///
/// Accepts both the service's field names and the store's own node names
/// (`quiz`, `UserAnswers`, `EventControl`), so a raw export can be posted as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, alias = "quiz")]
    pub questions: QuestionSet,

    #[serde(default, alias = "UserAnswers")]
    pub answers: AnswerSheet,

    #[serde(default, alias = "EventControl")]
    pub control: EventControl,
}

/// DTO for fetching the question currently open to submitters.
#[derive(Debug, Default, Deserialize)]
pub struct CurrentQuizRequest {
    #[serde(default)]
    pub snapshot: Snapshot,
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CurrentQuizResponse {
    pub quiz: Option<crate::models::question::PublicQuestion>,
    pub has_answered: bool,
}
