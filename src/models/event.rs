// src/models/event.rs

use serde::{Deserialize, Serialize};

use crate::models::snapshot::Snapshot;
use crate::utils::lenient::lenient_millis;

/// Game-control flags kept under the `EventControl` node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventControl {
    /// The quiz currently open for answers. Absent or empty means the game is paused.
    #[serde(default, alias = "currentQuizId")]
    pub current_quiz_id: Option<String>,

    #[serde(default, alias = "isAnswerRevealed")]
    pub is_answer_revealed: bool,

    #[serde(
        default,
        alias = "questionChangeTimestamp",
        deserialize_with = "lenient_millis"
    )]
    pub question_change_timestamp: i64,
}

impl EventControl {
    /// Opens `quiz_id` for answers with its answers hidden, stamping the switch time.
    pub fn activate(&self, quiz_id: &str, now: i64) -> Self {
        Self {
            current_quiz_id: Some(quiz_id.to_string()),
            is_answer_revealed: false,
            question_change_timestamp: now,
        }
    }

    /// Clears the active quiz. The reveal flag and the last switch time are left as they were.
    pub fn pause(&self) -> Self {
        Self {
            current_quiz_id: None,
            ..self.clone()
        }
    }

    pub fn toggle_reveal(&self) -> Self {
        Self {
            is_answer_revealed: !self.is_answer_revealed,
            ..self.clone()
        }
    }

    /// The active quiz id, treating an empty string as "none".
    pub fn active_quiz_id(&self) -> Option<&str> {
        self.current_quiz_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// Summary of the revealed active quiz shown above the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveQuiz {
    pub quiz_id: String,
    pub question_preview: String,
    pub correct_answer_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub paused: bool,
    pub answers_revealed: bool,
    /// When the running quiz was opened (RFC 3339). Absent while paused or never stamped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_changed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_quiz: Option<ActiveQuiz>,
}

/// Admin command applied to the control flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControlCommand {
    Activate { quiz_id: String },
    Pause,
    ToggleReveal,
}

/// DTO for updating the control flags against the current snapshot.
#[derive(Debug, Deserialize)]
pub struct ControlRequest {
    #[serde(default)]
    pub snapshot: Snapshot,
    pub command: ControlCommand,
}
