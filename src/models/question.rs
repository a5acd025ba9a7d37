// src/models/question.rs

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::lenient::{lenient_key, lenient_millis};

/// One selectable option of a quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub key: i64,
    #[serde(default)]
    pub text: String,
}

/// A multiple-choice question as it lives under the `quiz` node of the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Store key. The key of the enclosing map is authoritative; this copy may be empty.
    #[serde(default)]
    pub id: String,

    #[serde(default, alias = "question")]
    pub question_text: String,

    /// Options in display order.
    #[serde(default, alias = "answers")]
    pub answer_options: Vec<AnswerOption>,

    /// Should equal the `key` of one of `answer_options`.
    /// `None` when the store holds no usable key; nobody scores on such a question.
    #[serde(default, alias = "rightAnswer", deserialize_with = "lenient_key")]
    pub correct_option_key: Option<i64>,

    #[serde(default, alias = "timestamp", deserialize_with = "lenient_millis")]
    pub created_at: i64,
}

impl QuizQuestion {
    pub fn has_option(&self, key: i64) -> bool {
        self.answer_options.iter().any(|opt| opt.key == key)
    }

    /// Text of the correct option, if the question's answer key resolves.
    pub fn correct_answer_text(&self) -> Option<&str> {
        let correct = self.correct_option_key?;
        self.answer_options
            .iter()
            .find(|opt| opt.key == correct)
            .map(|opt| opt.text.as_str())
    }

    /// Whether `chosen` earns a point. An absent key on either side never matches.
    pub fn is_correct(&self, chosen: Option<i64>) -> bool {
        matches!((chosen, self.correct_option_key), (Some(c), Some(k)) if c == k)
    }
}

/// DTO for sending a question to submitters (excludes the correct option key).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicQuestion {
    pub id: String,
    pub question_text: String,
    pub answer_options: Vec<AnswerOption>,
}

impl PublicQuestion {
    pub fn from_question(id: &str, question: &QuizQuestion) -> Self {
        Self {
            id: id.to_string(),
            question_text: question.question_text.clone(),
            answer_options: question.answer_options.clone(),
        }
    }
}

/// DTO for authoring a new question.
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = validate_correct_key))]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 1000))]
    #[serde(alias = "question")]
    pub question_text: String,
    #[validate(custom(function = validate_options))]
    #[serde(alias = "answers")]
    pub answer_options: Vec<AnswerOption>,
    #[serde(alias = "rightAnswer")]
    pub correct_option_key: i64,
}

/// A validated question, ready to be pushed to the store.
/// The store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreparedQuestion {
    pub question_text: String,
    pub answer_options: Vec<AnswerOption>,
    pub correct_option_key: i64,
    pub created_at: i64,
}

fn validate_options(options: &[AnswerOption]) -> Result<(), ValidationError> {
    if options.is_empty() {
        return Err(ValidationError::new("options_cannot_be_empty"));
    }
    let mut seen = HashSet::new();
    for opt in options {
        if opt.text.trim().is_empty() {
            return Err(ValidationError::new("option_text_cannot_be_empty"));
        }
        if opt.text.chars().count() > 500 {
            return Err(ValidationError::new("option_too_long"));
        }
        if !seen.insert(opt.key) {
            return Err(ValidationError::new("duplicate_option_key"));
        }
    }
    Ok(())
}

fn validate_correct_key(req: &CreateQuestionRequest) -> Result<(), ValidationError> {
    if req
        .answer_options
        .iter()
        .any(|opt| opt.key == req.correct_option_key)
    {
        Ok(())
    } else {
        Err(ValidationError::new("correct_key_not_in_options"))
    }
}
