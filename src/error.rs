//! Proxy error type and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("API key not configured. Please set GEMINI_API_KEY in the server environment.")]
    MissingApiKey,
    #[error("Prompt is required")]
    PromptRequired,
    #[error("Gemini API error: {}", .status.as_u16())]
    Upstream { status: StatusCode, details: String },
    #[error("Internal server error")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, ProxyError>;

impl ProxyError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingApiKey | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::PromptRequired => StatusCode::BAD_REQUEST,
            Self::Upstream { status, .. } => *status,
        }
    }

    /// JSON body sent to the caller. Always carries `error`.
    pub fn body(&self) -> Value {
        match self {
            Self::Upstream { details, .. } => json!({
                "error": self.to_string(),
                "details": details,
            }),
            Self::Internal(message) => json!({
                "error": self.to_string(),
                "message": message,
            }),
            Self::MissingApiKey | Self::PromptRequired => json!({ "error": self.to_string() }),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ProxyError::MissingApiKey.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ProxyError::PromptRequired.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ProxyError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        let upstream = ProxyError::Upstream {
            status: StatusCode::TOO_MANY_REQUESTS,
            details: "rate limited".into(),
        };
        assert_eq!(upstream.status_code(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_upstream_body() {
        let err = ProxyError::Upstream {
            status: StatusCode::TOO_MANY_REQUESTS,
            details: "rate limited".into(),
        };
        assert_eq!(
            err.body(),
            json!({ "error": "Gemini API error: 429", "details": "rate limited" })
        );
    }

    #[test]
    fn test_internal_body() {
        let err = ProxyError::Internal("connection refused".into());
        assert_eq!(
            err.body(),
            json!({ "error": "Internal server error", "message": "connection refused" })
        );
    }

    #[test]
    fn test_every_body_has_error_field() {
        let errors = [
            ProxyError::MissingApiKey,
            ProxyError::PromptRequired,
            ProxyError::Upstream {
                status: StatusCode::BAD_GATEWAY,
                details: String::new(),
            },
            ProxyError::Internal(String::new()),
        ];
        for err in errors {
            assert!(err.body()["error"].is_string(), "{:?}", err);
        }
    }

    #[test]
    fn test_missing_key_message() {
        assert!(ProxyError::MissingApiKey
            .to_string()
            .starts_with("API key not configured"));
    }
}
