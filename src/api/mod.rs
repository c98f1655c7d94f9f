pub mod handlers;
pub mod routes;

use serde::{Deserialize, Serialize};

use crate::config::SpeechDefaults;
use crate::tts::{SynthesisRequest, VoiceInfo};

pub const SUCCESS_MESSAGE: &str = "Audio successfully saved to S3";

#[derive(Debug, Default, Deserialize)]
pub struct SpeakRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub voice_id: Option<String>,
    #[serde(default)]
    pub output_format: Option<String>,
}

impl SpeakRequest {
    pub fn with_defaults(self, defaults: &SpeechDefaults) -> SynthesisRequest {
        SynthesisRequest {
            text: self.text.unwrap_or_else(|| defaults.text.clone()),
            voice_id: self.voice_id.unwrap_or_else(|| defaults.voice_id.clone()),
            output_format: self
                .output_format
                .unwrap_or_else(|| defaults.output_format.clone()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SpeakResponse {
    pub audio_url: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct VoicesResponse {
    pub voices: Vec<VoiceInfo>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_request_keeps_given_fields() {
        let request: SpeakRequest =
            serde_json::from_str(r#"{"text": "Hi there", "output_format": "ogg_vorbis"}"#).unwrap();
        let synthesis = request.with_defaults(&SpeechDefaults::default());
        assert_eq!(synthesis.text, "Hi there");
        assert_eq!(synthesis.voice_id, "Joanna");
        assert_eq!(synthesis.output_format, "ogg_vorbis");
        assert_eq!(synthesis.content_type(), "audio/ogg_vorbis");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let request: SpeakRequest =
            serde_json::from_str(r#"{"voice_id": "Amy", "speed": 2}"#).unwrap();
        assert_eq!(request.voice_id.as_deref(), Some("Amy"));
        assert!(request.text.is_none());
    }
}
