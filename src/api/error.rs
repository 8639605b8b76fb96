//! Errors surfaced to HTTP clients

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Request-level failures, rendered as `{"error": "<message>"}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid surah number")]
    InvalidSurahNumber,

    #[error("invalid ayah number")]
    InvalidAyahNumber,

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidSurahNumber | Self::InvalidAyahNumber => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::InvalidSurahNumber.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidAyahNumber.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::InvalidSurahNumber.to_string(), "invalid surah number");
        assert_eq!(ApiError::InvalidAyahNumber.to_string(), "invalid ayah number");
    }
}
