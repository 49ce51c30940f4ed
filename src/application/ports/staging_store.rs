use std::io;
use std::path::PathBuf;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::StoragePath;

#[async_trait::async_trait]
pub trait StagingStore: Send + Sync {
    /// Streams the payload to `path` and returns the number of bytes written.
    async fn store(
        &self,
        path: &StoragePath,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, StagingStoreError>;

    async fn delete(&self, path: &StoragePath) -> Result<(), StagingStoreError>;

    /// Absolute filesystem location of `path`.
    fn file_path(&self, path: &StoragePath) -> PathBuf;
}

#[derive(Debug, thiserror::Error)]
pub enum StagingStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
