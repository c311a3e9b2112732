use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Error type for quiz operations.
///
/// Client mistakes map to 4xx; anything touching the filesystem or
/// the serializer maps to a generic 500. Errors are never retried.
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("question not found")]
    QuestionNotFound,

    #[error("participant is already registered")]
    DuplicateParticipant,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        let status = match self {
            QuizError::QuestionNotFound => StatusCode::NOT_FOUND,
            QuizError::DuplicateParticipant => StatusCode::BAD_REQUEST,
            QuizError::Io(_) | QuizError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            QuizError::QuestionNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            QuizError::DuplicateParticipant.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        let io = QuizError::Io(std::io::Error::other("disk gone"));
        assert_eq!(
            io.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
