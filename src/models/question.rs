use serde::{Deserialize, Serialize};

/// A quiz question with its options and point value.
///
/// Questions are authored by the administrator and replaced in bulk;
/// the `id` is whatever string the admin client assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub title: String,
    pub options: Vec<QuestionOption>,
    pub points: u32,
}

/// One selectable option of a question.
///
/// Exactly one option per question is expected to carry the
/// `isCorrect` flag, but nothing enforces it; a question with no
/// flagged option simply never awards points.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOption {
    pub id: String,
    pub text: String,
    pub is_correct: bool,
}

impl Question {
    /// The option flagged as correct, if any.
    pub fn correct_option(&self) -> Option<&QuestionOption> {
        self.options.iter().find(|opt| opt.is_correct)
    }
}
