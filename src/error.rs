use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const AUDIO_STREAM_MISSING: &str = "Failed to generate audio stream from Polly.";
pub const PRESIGN_FAILED: &str = "Failed to generate pre-signed URL";

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{}", AUDIO_STREAM_MISSING)]
    SynthesisUnavailable,

    /// Rejected by the storage service while signing; the message is logged
    /// but never returned to the caller.
    #[error("{0}")]
    Presign(String),

    #[error("{0}")]
    Synthesis(String),

    #[error("{0}")]
    Storage(String),

    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    fn code(&self) -> &'static str {
        match self {
            AppError::SynthesisUnavailable => "AUDIO_STREAM_MISSING",
            AppError::Presign(_) => "PRESIGN_ERROR",
            AppError::Synthesis(_) => "SYNTHESIS_ERROR",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Json(_) => "JSON_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Presign(_) => PRESIGN_FAILED.to_string(),
            other => other.to_string(),
        };

        tracing::error!("Request failed: {} - {}", self.code(), self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse { error: message }),
        )
            .into_response()
    }
}
