// src/models/answer.rs

use serde::{Deserialize, Serialize};

use crate::models::snapshot::Snapshot;
use crate::utils::lenient::{lenient_key, lenient_millis};

/// One user's answer to one question, stored under `UserAnswers/{user_id}/{quiz_id}`.
///
/// `user_id` and `quiz_id` mirror the path keys and may be missing from raw
/// store exports; the keys of the enclosing maps are authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    #[serde(default)]
    pub user_id: String,

    #[serde(default, alias = "questionId")]
    pub quiz_id: String,

    /// `None` when the store holds no usable key; such an answer is listed but never scores.
    #[serde(default, alias = "answerId", deserialize_with = "lenient_key")]
    pub chosen_option_key: Option<i64>,

    #[serde(default, alias = "userName")]
    pub submitter_name: String,

    #[serde(default, alias = "timestamp", deserialize_with = "lenient_millis")]
    pub submitted_at: i64,
}

/// DTO for submitting an answer against the current snapshot.
#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    #[serde(default)]
    pub snapshot: Snapshot,
    pub user_id: String,
    pub quiz_id: String,
    #[serde(default)]
    pub submitter_name: String,
    pub chosen_option_key: i64,
}
