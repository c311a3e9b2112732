//! Persisted data model: questions, participants, responses, status.
//!
//! All wire formats are camelCase JSON, matching what the polling SPA
//! reads and writes.

mod participant;
mod question;
mod response;
mod status;

pub use participant::Participant;
pub use question::{Question, QuestionOption};
pub use response::Response;
pub use status::{QuizStatus, QuizStatusPatch};
