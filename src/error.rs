use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("invalid request")]
    Validation(Vec<String>),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound(entity) => {
                (StatusCode::NOT_FOUND, json!({ "message": format!("{entity} not found") }))
            }
            AppError::Validation(errors) => (StatusCode::BAD_REQUEST, json!({ "errors": errors })),
            AppError::Conflict(message) => (StatusCode::CONFLICT, json!({ "errors": [message] })),
            AppError::Database(err) => {
                tracing::error!(error = %err, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "message": "internal server error" }))
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "message": "internal server error" }))
            }
        };

        (status, Json(body)).into_response()
    }
}
