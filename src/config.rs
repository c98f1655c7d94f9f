use std::time::Duration;

use crate::error::AppError;

const DEFAULT_PRESIGN_SECS: u64 = 3600;

/// Values substituted for fields missing from a speak request.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechDefaults {
    pub text: String,
    pub voice_id: String,
    pub output_format: String,
}

impl Default for SpeechDefaults {
    fn default() -> Self {
        Self {
            text: "Hello, this is a default text!".to_string(),
            voice_id: "Joanna".to_string(),
            output_format: "mp3".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Target bucket. Left unset, uploads fail per request rather than at startup.
    pub bucket: Option<String>,
    pub region: Option<String>,
    pub presign_expiration: Duration,
    pub key_prefix: String,
    pub defaults: SpeechDefaults,
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bucket: None,
            region: None,
            presign_expiration: Duration::from_secs(DEFAULT_PRESIGN_SECS),
            key_prefix: "speech".to_string(),
            defaults: SpeechDefaults::default(),
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = Config::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let presign_expiration = match var("PRESIGNED_URL_EXPIRATION") {
            Some(raw) => Duration::from_secs(parse_number(&raw, "PRESIGNED_URL_EXPIRATION")?),
            None => base.presign_expiration,
        };

        let port = match var("PORT") {
            Some(raw) => parse_number(&raw, "PORT")?,
            None => base.port,
        };

        Ok(Self {
            bucket: var("S3_BUCKET"),
            region: var("AWS_REGION"),
            presign_expiration,
            key_prefix: var("SPEECH_KEY_PREFIX").unwrap_or(base.key_prefix),
            defaults: SpeechDefaults {
                text: var("DEFAULT_TEXT").unwrap_or(base.defaults.text),
                voice_id: var("DEFAULT_VOICE_ID").unwrap_or(base.defaults.voice_id),
                output_format: var("DEFAULT_OUTPUT_FORMAT")
                    .unwrap_or(base.defaults.output_format),
            },
            host: var("HOST").unwrap_or(base.host),
            port,
        })
    }
}

fn parse_number<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Config(format!("{} must be a number, got '{}'", name, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bucket, None);
        assert_eq!(config.presign_expiration, Duration::from_secs(3600));
        assert_eq!(config.key_prefix, "speech");
        assert_eq!(config.defaults.voice_id, "Joanna");
        assert_eq!(config.defaults.output_format, "mp3");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_reads_bucket_and_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("S3_BUCKET", "tts-artifacts"),
            ("AWS_REGION", "eu-west-1"),
            ("PRESIGNED_URL_EXPIRATION", "600"),
            ("DEFAULT_VOICE_ID", "Matthew"),
            ("PORT", "8080"),
        ]))
        .unwrap();
        assert_eq!(config.bucket.as_deref(), Some("tts-artifacts"));
        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.presign_expiration, Duration::from_secs(600));
        assert_eq!(config.defaults.voice_id, "Matthew");
        assert_eq!(config.defaults.text, "Hello, this is a default text!");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_blank_bucket_is_unset() {
        let config = Config::from_lookup(lookup(&[("S3_BUCKET", "  ")])).unwrap();
        assert!(config.bucket.is_none());
    }

    #[test]
    fn test_bad_number_is_config_error() {
        let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("PORT"));
    }
}
