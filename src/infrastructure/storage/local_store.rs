use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{MultipartUpload, ObjectStore, PutPayload};

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::domain::StoragePath;

/// Stages uploads as flat files under a local directory.
pub struct LocalStagingStore {
    inner: Arc<LocalFileSystem>,
    base_path: PathBuf,
}

impl LocalStagingStore {
    /// Creates `base_path` if needed. Relative paths resolve against the
    /// working directory so staged files always have an absolute location.
    pub fn new(base_path: PathBuf) -> Result<Self, StagingStoreError> {
        std::fs::create_dir_all(&base_path).map_err(StagingStoreError::Io)?;
        let base_path = std::fs::canonicalize(&base_path).map_err(StagingStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(&base_path)
            .map_err(|e| StagingStoreError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
            base_path,
        })
    }

    pub fn base_path(&self) -> &std::path::Path {
        &self.base_path
    }
}

#[async_trait::async_trait]
impl StagingStore for LocalStagingStore {
    async fn store(
        &self,
        path: &StoragePath,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, StagingStoreError> {
        let store_path = StorePath::from(path.as_str());
        let mut upload = self
            .inner
            .put_multipart(&store_path)
            .await
            .map_err(|e| StagingStoreError::UploadFailed(e.to_string()))?;

        let mut total_bytes: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let bytes = match chunk {
                Ok(b) => b,
                Err(e) => {
                    abort_upload(&mut upload, path).await;
                    return Err(StagingStoreError::Io(e));
                }
            };
            if bytes.is_empty() {
                continue;
            }
            total_bytes += bytes.len() as u64;
            if let Err(e) = upload.put_part(PutPayload::from(bytes)).await {
                abort_upload(&mut upload, path).await;
                return Err(StagingStoreError::UploadFailed(e.to_string()));
            }
        }

        upload
            .complete()
            .await
            .map_err(|e| StagingStoreError::UploadFailed(e.to_string()))?;

        Ok(total_bytes)
    }

    async fn delete(&self, path: &StoragePath) -> Result<(), StagingStoreError> {
        let store_path = StorePath::from(path.as_str());
        self.inner
            .delete(&store_path)
            .await
            .map_err(|e| StagingStoreError::DeleteFailed(e.to_string()))
    }

    fn file_path(&self, path: &StoragePath) -> PathBuf {
        self.base_path.join(path.as_str())
    }
}

/// Drops the partially written staging file. Failure leaves a `#`-suffixed file behind.
async fn abort_upload(upload: &mut Box<dyn MultipartUpload>, path: &StoragePath) {
    if let Err(e) = upload.abort().await {
        tracing::warn!(error = %e, path = %path, "Failed to abort partial upload");
    }
}
