//! # live-quiz
//!
//! Backend for a live quiz: an administrator authors questions and
//! drives a session, contestants join by name and submit answers, and
//! a ranking is computed on demand. State lives in four flat JSON
//! documents behind a small REST API; clients synchronize by polling.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use live_quiz::{QuizError, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     server::run(3001, "data").await
//! }
//! ```

pub mod data;
mod error;
pub mod models;
pub mod ranking;
pub mod server;

pub use data::JsonStore;
pub use error::QuizError;
pub use ranking::{QuestionRankingEntry, RankingEntry, overall_ranking, question_ranking};
