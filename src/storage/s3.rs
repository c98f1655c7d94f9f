use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;
use tracing::debug;

use super::ObjectStore;
use crate::error::AppError;

pub struct S3Store {
    client: Client,
}

impl S3Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), AppError> {
        debug!("Uploading {} bytes to s3://{}/{}", data.len(), bucket, key);

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(data))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| AppError::Storage(DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }

    async fn presign(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, AppError> {
        debug!("Generating pre-signed URL for s3://{}/{}", bucket, key);

        // An invalid expiry is a caller problem, not a service rejection.
        let presigning_config = PresigningConfig::expires_in(expires_in)
            .map_err(|e| AppError::Storage(e.to_string()))?;

        let presigned = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .presigned(presigning_config)
            .await
            .map_err(|e| AppError::Presign(DisplayErrorContext(&e).to_string()))?;

        let uri = presigned.uri().to_string();

        // Without credentials the SDK hands back a bare, unsigned URL.
        if !uri.contains("X-Amz-Signature=") {
            return Err(AppError::Storage(
                "Unable to locate credentials to sign the URL".to_string(),
            ));
        }

        Ok(uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};

    fn store(credentials: Option<Credentials>) -> S3Store {
        let mut config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"));
        if let Some(credentials) = credentials {
            config = config.credentials_provider(credentials);
        }
        S3Store::new(Client::from_conf(config.build()))
    }

    fn static_credentials() -> Credentials {
        Credentials::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG", None, None, "test")
    }

    #[tokio::test]
    async fn test_presign_contains_key_and_expiry() {
        let url = store(Some(static_credentials()))
            .presign(
                "speech-bucket",
                "speech/7f1c2a9e-3b4d-4e5f-8a6b-1c2d3e4f5a6b.mp3",
                Duration::from_secs(3600),
            )
            .await
            .unwrap();

        assert!(url.starts_with("https://"));
        assert!(url.contains("speech/7f1c2a9e-3b4d-4e5f-8a6b-1c2d3e4f5a6b.mp3"));
        assert!(url.contains("X-Amz-Expires=3600"));
        assert!(url.contains("X-Amz-Signature="));
    }

    #[tokio::test]
    async fn test_presign_rejects_expiry_over_a_week() {
        let err = store(Some(static_credentials()))
            .presign("speech-bucket", "speech/a.mp3", Duration::from_secs(8 * 24 * 3600))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[tokio::test]
    async fn test_presign_without_credentials_is_error() {
        let err = store(None)
            .presign("speech-bucket", "speech/a.mp3", Duration::from_secs(3600))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }
}
