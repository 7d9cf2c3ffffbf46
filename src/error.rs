// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors a chat request can end in. The `Display` text is what the
/// client sees, rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Empty message")]
    EmptyMessage,

    #[error("Invalid response from OpenAI")]
    UpstreamInvalidResponse,

    /// The detail is for server logs only and is never sent to the client.
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::EmptyMessage => StatusCode::BAD_REQUEST,
            AppError::UpstreamInvalidResponse | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        // without_url keeps the provider address out of the detail as well
        AppError::Internal(err.without_url().to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal(detail) = &self {
            tracing::error!(%detail, "chat request failed");
        }
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn statuses_and_bodies() {
        let (status, body) = body_of(AppError::MethodNotAllowed).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, json!({ "error": "Method not allowed" }));

        let (status, body) = body_of(AppError::EmptyMessage).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Empty message" }));

        let (status, body) = body_of(AppError::UpstreamInvalidResponse).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Invalid response from OpenAI" }));
    }

    #[tokio::test]
    async fn internal_detail_is_not_rendered() {
        let (status, body) =
            body_of(AppError::Internal("connect failed: Bearer sk-secret".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error" }));
        assert!(!body.to_string().contains("sk-secret"));
    }

    #[test]
    fn display_is_the_client_message() {
        assert_eq!(AppError::EmptyMessage.to_string(), "Empty message");
        let err = AppError::Internal("dns error".into());
        assert_eq!(err.to_string(), "Internal server error");
        assert!(matches!(err, AppError::Internal(detail) if detail == "dns error"));
    }
}
