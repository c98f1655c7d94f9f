use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use std::sync::Arc;

use super::{HealthResponse, SpeakRequest, SpeakResponse, VoicesResponse, SUCCESS_MESSAGE};
use crate::api::routes::AppState;
use crate::error::{AppError, ErrorResponse};
use crate::storage::artifact_key;

/// Synthesize, store and presign. The body is parsed here rather than through
/// the `Json` extractor so malformed input is answered like any other failure.
pub async fn speak(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SpeakResponse>, AppError> {
    let request: SpeakRequest = if body.iter().all(u8::is_ascii_whitespace) {
        SpeakRequest::default()
    } else {
        serde_json::from_slice(&body)?
    };

    let request = request.with_defaults(&state.config.defaults);
    let key = artifact_key(&state.config.key_prefix, &request.output_format);

    let audio = state
        .synthesizer
        .synthesize(&request)
        .await?
        .ok_or(AppError::SynthesisUnavailable)?;

    let bucket = state
        .config
        .bucket
        .as_deref()
        .ok_or_else(|| AppError::Config("S3_BUCKET is not configured".into()))?;

    state
        .store
        .put(bucket, &key, audio, &request.content_type())
        .await?;

    // The object stays in the bucket even if signing fails.
    let audio_url = state
        .store
        .presign(bucket, &key, state.config.presign_expiration)
        .await?;

    tracing::info!("Stored speech at s3://{}/{}", bucket, key);

    Ok(Json(SpeakResponse {
        audio_url,
        message: SUCCESS_MESSAGE.to_string(),
    }))
}

pub async fn list_voices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<VoicesResponse>, AppError> {
    let voices = state.synthesizer.list_voices().await?;
    Ok(Json(VoicesResponse { voices }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: "Method not allowed".to_string(),
        }),
    )
}
