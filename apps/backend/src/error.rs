//! Error handling for the backend API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use quiz_core::QuizError;
use serde::Serialize;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Quiz error: {0}")]
    Quiz(#[from] QuizError),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::Quiz(QuizError::InvalidNoisePattern { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error")
            }
            ApiError::Quiz(_) => (StatusCode::BAD_REQUEST, "quiz_error"),
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::OptionLabel;

    #[test]
    fn test_empty_notes_status() {
        let error = ApiError::from(QuizError::EmptyNotes);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unknown_option_status() {
        let error = ApiError::from(QuizError::UnknownOption {
            index: 2,
            label: OptionLabel::C,
        });
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_answers_revealed_status() {
        let error = ApiError::from(QuizError::AnswersRevealed);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_noise_pattern_status() {
        let error = quiz_core::NoiseFilter::empty()
            .with_pattern("(")
            .map(|_| ())
            .unwrap_err();
        let response = ApiError::from(error).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_display_quiz() {
        let error = ApiError::from(QuizError::UnknownQuestion { index: 4 });
        assert_eq!(error.to_string(), "Quiz error: question 4 does not exist");
    }

    #[test]
    fn test_error_display_unknown_option() {
        let error = ApiError::from(QuizError::UnknownOption {
            index: 0,
            label: OptionLabel::D,
        });
        assert_eq!(error.to_string(), "Quiz error: question 0 has no option D");
    }
}
