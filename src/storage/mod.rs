pub mod s3;

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use uuid::Uuid;

use crate::error::AppError;

pub use s3::S3Store;

/// Write-once object storage with time-limited read links.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), AppError>;

    /// Service-side rejections come back as `AppError::Presign`.
    async fn presign(&self, bucket: &str, key: &str, expires_in: Duration)
        -> Result<String, AppError>;
}

/// `<prefix>/<uuid>.<format>`, unique per call.
pub fn artifact_key(prefix: &str, output_format: &str) -> String {
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        format!("{}.{}", Uuid::new_v4(), output_format)
    } else {
        format!("{}/{}.{}", prefix, Uuid::new_v4(), output_format)
    }
}
