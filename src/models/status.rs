use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single shared status record all clients poll.
///
/// The admin drives an implicit creating -> active -> finished cycle
/// through this record; any state can be written from any other, there
/// is no transition table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizStatus {
    pub is_active: bool,
    pub current_question: u32,
    pub total_questions: u32,
    pub created_at: DateTime<Utc>,
}

impl Default for QuizStatus {
    fn default() -> Self {
        Self {
            is_active: false,
            current_question: 0,
            total_questions: 0,
            created_at: Utc::now(),
        }
    }
}

/// Partial status update for `PATCH /api/quiz-status`; only the fields
/// present in the payload are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizStatusPatch {
    pub is_active: Option<bool>,
    pub current_question: Option<u32>,
    pub total_questions: Option<u32>,
    pub created_at: Option<DateTime<Utc>>,
}

impl QuizStatus {
    /// Merge a partial update into this record.
    pub fn apply(&mut self, patch: QuizStatusPatch) {
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        if let Some(current_question) = patch.current_question {
            self.current_question = current_question;
        }
        if let Some(total_questions) = patch.total_questions {
            self.total_questions = total_questions;
        }
        if let Some(created_at) = patch.created_at {
            self.created_at = created_at;
        }
    }
}
