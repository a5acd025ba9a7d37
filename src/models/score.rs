// src/models/score.rs

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::event::GameStatus;

/// Derived per-user standing. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserScore {
    pub user_id: String,
    pub display_name: String,
    /// Number of correct answers on questions that still exist.
    pub score: u32,
    /// Latest `submitted_at` among correct answers, `0` when there are none.
    pub last_correct_answer_at: i64,
    /// Every answer the user gave, keyed by quiz id, correct or not.
    /// `None` marks a record whose chosen key could not be read.
    pub answers_by_quiz: BTreeMap<String, Option<i64>>,
}

/// One row of the displayed leaderboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position.
    pub rank: usize,
    #[serde(flatten)]
    pub score: UserScore,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_correct_answer_iso: Option<String>,
}

/// Query parameters for the leaderboard endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub status: GameStatus,
    pub entries: Vec<LeaderboardEntry>,
    /// Players ranked before `limit` was applied.
    pub total_players: usize,
    pub generated_at: DateTime<Utc>,
}
