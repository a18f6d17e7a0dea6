//! HTTP error responses.
//!
//! Every failure is rendered as `{"detail": "..."}` with a matching status.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use wikilens_core::WikilensError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self { status, detail: detail.into() }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, detail)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

impl From<WikilensError> for ApiError {
    fn from(err: WikilensError) -> Self {
        let status = match &err {
            WikilensError::ArticleNotFound(_) => StatusCode::NOT_FOUND,
            WikilensError::InvalidInput(_) | WikilensError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            WikilensError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            WikilensError::HttpError(_) | WikilensError::UpstreamResponse(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::warn!(error = %err, %status, "request failed");
        }
        Self::new(status, err.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!(error = %format!("{:#}", err), "internal error");
        Self::internal("Internal server error")
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let err: ApiError = WikilensError::ArticleNotFound("Nada".to_string()).into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert!(err.detail.contains("Nada"));

        let err: ApiError = WikilensError::UpstreamResponse("503".to_string()).into();
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);

        let err: ApiError = WikilensError::Timeout { timeout: 30 }.into();
        assert_eq!(err.status, StatusCode::GATEWAY_TIMEOUT);

        let err: ApiError = WikilensError::InvalidInput("title".to_string()).into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_anyhow_hides_details() {
        let err: ApiError = anyhow::anyhow!("connection refused").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail, "Internal server error");
    }
}
