use async_trait::async_trait;
use aws_sdk_polly::error::DisplayErrorContext;
use aws_sdk_polly::types::{OutputFormat, VoiceId};
use aws_sdk_polly::Client;
use bytes::Bytes;
use tracing::debug;

use super::{SpeechSynthesizer, SynthesisRequest, VoiceInfo};
use crate::error::AppError;

pub struct PollySynthesizer {
    client: Client,
}

impl PollySynthesizer {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SpeechSynthesizer for PollySynthesizer {
    async fn synthesize(&self, request: &SynthesisRequest) -> Result<Option<Bytes>, AppError> {
        debug!(
            "Synthesizing {} chars with voice {} as {}",
            request.text.len(),
            request.voice_id,
            request.output_format
        );

        let output = self
            .client
            .synthesize_speech()
            .text(&request.text)
            .voice_id(VoiceId::from(request.voice_id.as_str()))
            .output_format(OutputFormat::from(request.output_format.as_str()))
            .send()
            .await
            .map_err(|e| AppError::Synthesis(DisplayErrorContext(&e).to_string()))?;

        let audio = output
            .audio_stream
            .collect()
            .await
            .map_err(|e| AppError::Synthesis(format!("Failed to read audio stream: {}", e)))?
            .into_bytes();

        if audio.is_empty() {
            return Ok(None);
        }

        Ok(Some(audio))
    }

    async fn list_voices(&self) -> Result<Vec<VoiceInfo>, AppError> {
        let mut voices = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let output = self
                .client
                .describe_voices()
                .set_next_token(next_token.take())
                .send()
                .await
                .map_err(|e| AppError::Synthesis(DisplayErrorContext(&e).to_string()))?;

            voices.extend(output.voices().iter().filter_map(VoiceInfo::from_polly));

            match output.next_token() {
                Some(token) if !token.is_empty() => next_token = Some(token.to_string()),
                _ => break,
            }
        }

        Ok(voices)
    }
}
