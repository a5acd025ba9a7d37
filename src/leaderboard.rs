// src/leaderboard.rs

//! Score aggregation and ranking.
//!
//! Everything here is a pure function of one snapshot: no I/O, no state kept
//! between calls, inputs are never mutated. Callers re-run it whenever the
//! questions or answers change and drop any older result.

use std::{cmp::Ordering, collections::BTreeMap};

use crate::{
    models::{
        answer::AnswerRecord,
        question::QuizQuestion,
        score::{LeaderboardEntry, UserScore},
        snapshot::{AnswerSheet, QuestionSet},
    },
    utils::{html::strip_markup, timestamp::to_rfc3339},
};

/// Characters of the user id kept in the synthesized display name.
const FALLBACK_NAME_PREFIX: usize = 4;

/// Running totals for one user while answers are folded in.
#[derive(Debug)]
struct ScoreAccumulator {
    user_id: String,
    display_name: Option<String>,
    score: u32,
    last_correct_answer_at: i64,
    answers_by_quiz: BTreeMap<String, Option<i64>>,
}

impl ScoreAccumulator {
    fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            display_name: None,
            score: 0,
            last_correct_answer_at: 0,
            answers_by_quiz: BTreeMap::new(),
        }
    }

    fn record(&mut self, quiz_id: &str, answer: &AnswerRecord, question: Option<&QuizQuestion>) {
        if self.display_name.is_none() && !answer.submitter_name.trim().is_empty() {
            self.display_name = Some(answer.submitter_name.trim().to_string());
        }

        self.answers_by_quiz
            .insert(quiz_id.to_string(), answer.chosen_option_key);

        // Dangling quiz ids stay visible in answers_by_quiz but cannot be graded.
        let Some(question) = question else {
            return;
        };

        if question.is_correct(answer.chosen_option_key) {
            self.score += 1;
            self.last_correct_answer_at = self.last_correct_answer_at.max(answer.submitted_at);
        }
    }

    fn finish(self) -> UserScore {
        let display_name = self
            .display_name
            .unwrap_or_else(|| fallback_display_name(&self.user_id));

        UserScore {
            user_id: self.user_id,
            display_name,
            score: self.score,
            last_correct_answer_at: self.last_correct_answer_at,
            answers_by_quiz: self.answers_by_quiz,
        }
    }
}

/// Label used when none of a user's answers carries a name.
pub fn fallback_display_name(user_id: &str) -> String {
    let prefix: String = user_id.chars().take(FALLBACK_NAME_PREFIX).collect();
    format!("User {}", prefix)
}

/// Leaderboard order: more points first, then whoever reached their score
/// earlier, then user id so equal standings always come out the same way.
pub fn compare_standing(a: &UserScore, b: &UserScore) -> Ordering {
    b.score
        .cmp(&a.score)
        .then(a.last_correct_answer_at.cmp(&b.last_correct_answer_at))
        .then_with(|| a.user_id.cmp(&b.user_id))
}

/// Scores every user in `answers` against `questions` and returns them ranked.
///
/// * Each user id of `answers` appears exactly once, including users whose
///   answer map is empty.
/// * An answer counts when its chosen key equals the question's correct key.
///   Answers to unknown quiz ids, answers without a usable key and questions
///   without a usable key are listed but never scored.
/// * The display name is the first non-blank `submitter_name` in quiz id
///   order, or `User <first four chars of id>`.
pub fn rank_users(questions: &QuestionSet, answers: &AnswerSheet) -> Vec<UserScore> {
    let mut scores: Vec<UserScore> = answers
        .iter()
        .map(|(user_id, by_quiz)| {
            let mut acc = ScoreAccumulator::new(user_id);
            for (quiz_id, answer) in by_quiz {
                acc.record(quiz_id, answer, questions.get(quiz_id));
            }
            acc.finish()
        })
        .collect();

    scores.sort_by(compare_standing);
    scores
}

/// Wraps ranked scores as display rows with 1-based ranks.
///
/// Names are stripped of markup here since they are rendered by clients;
/// a name that is nothing but markup falls back to the synthesized label.
pub fn rank_entries(scores: Vec<UserScore>) -> Vec<LeaderboardEntry> {
    scores
        .into_iter()
        .enumerate()
        .map(|(idx, mut score)| {
            let clean = strip_markup(&score.display_name);
            score.display_name = if clean.is_empty() {
                fallback_display_name(&score.user_id)
            } else {
                clean
            };
            LeaderboardEntry {
                rank: idx + 1,
                last_correct_answer_iso: to_rfc3339(score.last_correct_answer_at),
                score,
            }
        })
        .collect()
}
