pub mod polly;
pub mod voice;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::AppError;

pub use polly::PollySynthesizer;
pub use voice::VoiceInfo;

/// A fully-populated synthesis request. Defaults are already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice_id: String,
    pub output_format: String,
}

impl SynthesisRequest {
    pub fn content_type(&self) -> String {
        format!("audio/{}", self.output_format)
    }
}

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Single attempt. `Ok(None)` means the service answered without audio.
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Option<Bytes>, AppError>;

    async fn list_voices(&self) -> Result<Vec<VoiceInfo>, AppError>;
}
