use aws_sdk_polly::types::Voice;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoiceInfo {
    pub id: String,
    pub name: String,
    pub language: String,
    pub gender: Option<String>,
}

impl VoiceInfo {
    /// Returns `None` for entries Polly sent without an id.
    pub fn from_polly(voice: &Voice) -> Option<Self> {
        let id = voice.id()?.as_str().to_string();
        let name = voice
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| id.clone());
        let language = voice
            .language_code()
            .map(|l| l.as_str().to_string())
            .unwrap_or_else(|| "en-US".to_string());

        Some(Self {
            id,
            name,
            language,
            gender: voice.gender().map(|g| g.as_str().to_string()),
        })
    }
}
