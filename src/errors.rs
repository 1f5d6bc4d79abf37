use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid JSON")]
    InvalidJson,

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Contact not found")]
    ContactNotFound,

    #[error("CRM request failed: {0:#}")]
    Upstream(#[from] anyhow::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::InvalidJson => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::MissingFields(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::ContactNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Upstream(e) => {
                tracing::error!(error = %format!("{e:#}"), "CRM call failed");
                (StatusCode::BAD_GATEWAY, "CRM request failed".to_string())
            }
            AppError::Config(msg) => {
                tracing::error!(error = %msg, "configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
