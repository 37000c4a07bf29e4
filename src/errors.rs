use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Handler-level errors, rendered as CDS error-list payloads.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("account not found")]
    AccountNotFound,

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, title, detail) = match &self {
            ApiError::AccountNotFound => (
                StatusCode::NOT_FOUND,
                "urn:au-cds:error:cds-all:Resource/NotFound",
                "Resource Not Found",
                "account not found".to_string(),
            ),
            ApiError::Internal(e) => {
                tracing::error!("internal error: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "urn:au-cds:error:cds-all:GeneralError/Unexpected",
                    "Unexpected Error Encountered",
                    "internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "errors": [{
                "code": code,
                "title": title,
                "detail": detail,
            }]
        }));

        (status, body).into_response()
    }
}
