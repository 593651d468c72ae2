use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Deserialize)]
pub enum ServerError {
    #[error("Value cannot be null: {0}")]
    ArgumentNull(String),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl ServerError {
    pub fn argument_null(name: &str) -> Self {
        ServerError::ArgumentNull(name.to_string())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            ServerError::ArgumentNull(_) | ServerError::Configuration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        (status, Json(self.to_string())).into_response()
    }
}
