//! Request handlers, one per REST endpoint.
//!
//! Handlers hold the state lock for their whole read-modify-write
//! cycle; with one admin and a handful of contestants polling, that is
//! the entire concurrency story.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::error::QuizError;
use crate::models::{Participant, Question, QuizStatus, QuizStatusPatch, Response};
use crate::ranking::{self, QuestionRankingEntry, RankingEntry};

use super::state::AppState;

/// Confirmation body for mutation endpoints.
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub message: String,
    pub timestamp: chrono::DateTime<Utc>,
}

pub async fn get_quiz_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<QuizStatus>, QuizError> {
    let store = state.store.lock().await;
    Ok(Json(store.quiz_status().await?))
}

pub async fn post_quiz_status(
    State(state): State<Arc<AppState>>,
    Json(status): Json<QuizStatus>,
) -> Result<Json<ApiMessage>, QuizError> {
    let store = state.store.lock().await;
    store.set_quiz_status(&status).await?;
    info!(
        is_active = status.is_active,
        current_question = status.current_question,
        "quiz status replaced"
    );
    Ok(Json(ApiMessage::new("quiz status updated")))
}

pub async fn patch_quiz_status(
    State(state): State<Arc<AppState>>,
    Json(patch): Json<QuizStatusPatch>,
) -> Result<Json<QuizStatus>, QuizError> {
    let store = state.store.lock().await;
    let mut status = store.quiz_status().await?;
    status.apply(patch);
    store.set_quiz_status(&status).await?;
    Ok(Json(status))
}

pub async fn get_questions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Question>>, QuizError> {
    let store = state.store.lock().await;
    Ok(Json(store.questions().await?))
}

pub async fn get_question(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Question>, QuizError> {
    let store = state.store.lock().await;
    let questions = store.questions().await?;
    questions
        .into_iter()
        .find(|q| q.id == id)
        .map(Json)
        .ok_or(QuizError::QuestionNotFound)
}

/// Bulk replace of the question set; the admin view always saves the
/// whole list.
pub async fn post_questions(
    State(state): State<Arc<AppState>>,
    Json(questions): Json<Vec<Question>>,
) -> Result<Json<ApiMessage>, QuizError> {
    let store = state.store.lock().await;
    store.set_questions(&questions).await?;
    info!(count = questions.len(), "question set replaced");
    Ok(Json(ApiMessage::new("questions saved")))
}

/// Per-question ranking view with competition-style tie ranks.
pub async fn get_question_ranking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<QuestionRankingEntry>>, QuizError> {
    let store = state.store.lock().await;
    let questions = store.questions().await?;
    let question = questions
        .iter()
        .find(|q| q.id == id)
        .ok_or(QuizError::QuestionNotFound)?;
    let responses = store.responses().await?;
    Ok(Json(ranking::question_ranking(question, &responses)))
}

pub async fn get_participants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Participant>>, QuizError> {
    let store = state.store.lock().await;
    Ok(Json(store.participants().await?))
}

/// Register a contestant. The name is the unique key: an exact match
/// against the roster rejects the join with 400 and the caller picks
/// another name.
pub async fn post_participant(
    State(state): State<Arc<AppState>>,
    Json(participant): Json<Participant>,
) -> Result<Json<ApiMessage>, QuizError> {
    let store = state.store.lock().await;
    let mut participants = store.participants().await?;
    if participants.iter().any(|p| p.name == participant.name) {
        return Err(QuizError::DuplicateParticipant);
    }

    info!(name = %participant.name, "participant joined");
    participants.push(participant);
    store.set_participants(&participants).await?;
    Ok(Json(ApiMessage::new("participant registered")))
}

pub async fn get_responses(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Response>>, QuizError> {
    let store = state.store.lock().await;
    Ok(Json(store.responses().await?))
}

/// Append to the response ledger. Deliberately unconditional: no dedup
/// per (participant, question), no membership checks. Scoring copes
/// with whatever lands here.
pub async fn post_response(
    State(state): State<Arc<AppState>>,
    Json(response): Json<Response>,
) -> Result<Json<ApiMessage>, QuizError> {
    let store = state.store.lock().await;
    let mut responses = store.responses().await?;
    info!(
        user = %response.user_name,
        question = %response.question_id,
        option = %response.selected_option_id,
        "response recorded"
    );
    responses.push(response);
    store.set_responses(&responses).await?;
    Ok(Json(ApiMessage::new("response saved")))
}

/// Overall ranking, recomputed from scratch on every call.
pub async fn get_ranking(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RankingEntry>>, QuizError> {
    let store = state.store.lock().await;
    let questions = store.questions().await?;
    let participants = store.participants().await?;
    let responses = store.responses().await?;
    Ok(Json(ranking::overall_ranking(
        &questions,
        &participants,
        &responses,
    )))
}

/// Reset for the next session: roster and ledger emptied, status back
/// to its defaults. Questions are kept.
pub async fn clear_data(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiMessage>, QuizError> {
    let store = state.store.lock().await;
    store.clear().await?;
    info!("quiz data cleared");
    Ok(Json(ApiMessage::new("quiz data cleared")))
}

pub async fn health() -> Json<Health> {
    Json(Health {
        message: "quiz backend running".to_string(),
        timestamp: Utc::now(),
    })
}
