use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::warn;

use crate::error::QuizError;
use crate::models::{Participant, Question, QuizStatus, Response};

const STATUS_FILE: &str = "quiz-status.json";
const QUESTIONS_FILE: &str = "questions.json";
const PARTICIPANTS_FILE: &str = "participants.json";
const RESPONSES_FILE: &str = "responses.json";

/// Flat-file store: one JSON document per collection under a data
/// directory. Every read loads the whole document, every write
/// replaces it. A missing or unparseable document is replaced with its
/// default, never surfaced as an error.
///
/// There is no locking here. The server serializes access behind a
/// single mutex (see [`crate::server::AppState`]) so concurrent
/// read-modify-write cycles cannot lose updates; at the expected scale
/// (one admin, a handful of contestants) that is all the coordination
/// this store gets.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Open a store rooted at `dir`, creating the directory and
    /// seeding every document with its default value.
    pub async fn open<P: AsRef<Path>>(dir: P) -> Result<Self, QuizError> {
        let store = Self {
            dir: dir.as_ref().to_path_buf(),
        };
        fs::create_dir_all(&store.dir).await?;

        store
            .read_or_init(STATUS_FILE, QuizStatus::default)
            .await?;
        store
            .read_or_init::<Vec<Question>, _>(QUESTIONS_FILE, Vec::new)
            .await?;
        store
            .read_or_init::<Vec<Participant>, _>(PARTICIPANTS_FILE, Vec::new)
            .await?;
        store
            .read_or_init::<Vec<Response>, _>(RESPONSES_FILE, Vec::new)
            .await?;

        Ok(store)
    }

    pub async fn quiz_status(&self) -> Result<QuizStatus, QuizError> {
        self.read_or_init(STATUS_FILE, QuizStatus::default).await
    }

    pub async fn set_quiz_status(&self, status: &QuizStatus) -> Result<(), QuizError> {
        self.write(STATUS_FILE, status).await
    }

    pub async fn questions(&self) -> Result<Vec<Question>, QuizError> {
        self.read_or_init(QUESTIONS_FILE, Vec::new).await
    }

    pub async fn set_questions(&self, questions: &[Question]) -> Result<(), QuizError> {
        self.write(QUESTIONS_FILE, &questions).await
    }

    pub async fn participants(&self) -> Result<Vec<Participant>, QuizError> {
        self.read_or_init(PARTICIPANTS_FILE, Vec::new).await
    }

    pub async fn set_participants(&self, participants: &[Participant]) -> Result<(), QuizError> {
        self.write(PARTICIPANTS_FILE, &participants).await
    }

    pub async fn responses(&self) -> Result<Vec<Response>, QuizError> {
        self.read_or_init(RESPONSES_FILE, Vec::new).await
    }

    pub async fn set_responses(&self, responses: &[Response]) -> Result<(), QuizError> {
        self.write(RESPONSES_FILE, &responses).await
    }

    /// Reset participants and responses to empty and the status record
    /// to its defaults. Questions survive a reset.
    pub async fn clear(&self) -> Result<(), QuizError> {
        self.set_participants(&[]).await?;
        self.set_responses(&[]).await?;
        self.set_quiz_status(&QuizStatus::default()).await
    }

    async fn read_or_init<T, F>(&self, file: &str, default: F) -> Result<T, QuizError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        let path = self.dir.join(file);
        match fs::read_to_string(&path).await {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(value) => Ok(value),
                Err(err) => {
                    // Corrupt documents are rewritten, not reported.
                    warn!("replacing malformed {file} with defaults: {err}");
                    let value = default();
                    self.write(file, &value).await?;
                    Ok(value)
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let value = default();
                self.write(file, &value).await?;
                Ok(value)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn write<T: Serialize + ?Sized>(&self, file: &str, value: &T) -> Result<(), QuizError> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.dir.join(file), json).await?;
        Ok(())
    }
}
