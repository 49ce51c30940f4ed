use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use bytes::Bytes;
use futures::stream::BoxStream;
use tokio::sync::oneshot;
use tracing::Instrument;

use crate::application::ports::{InferenceRunner, StagingStore, StagingStoreError};
use crate::domain::{InferenceOutcome, StoragePath, Upload, UploadId};

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("no file uploaded")]
    MissingFile,
    #[error("failed to read upload: {0}")]
    ReadFailed(String),
    #[error("failed to store upload: {0}")]
    StorageFailed(String),
}

/// Stages uploads and relays them to the inference process under a deadline.
pub struct DetectionService {
    staging_store: Arc<dyn StagingStore>,
    inference_runner: Arc<dyn InferenceRunner>,
    timeout: Duration,
}

impl DetectionService {
    pub fn new(
        staging_store: Arc<dyn StagingStore>,
        inference_runner: Arc<dyn InferenceRunner>,
        timeout: Duration,
    ) -> Self {
        Self {
            staging_store,
            inference_runner,
            timeout,
        }
    }

    /// Writes the payload to a fresh staging path. Empty payloads are removed
    /// again and reported as a missing file.
    pub async fn receive(
        &self,
        original_filename: Option<&str>,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<Upload, UploadError> {
        let id = UploadId::new();
        let storage_path = StoragePath::new(&id, original_filename);

        let size_bytes = match self.staging_store.store(&storage_path, stream).await {
            Ok(size) => size,
            Err(StagingStoreError::Io(e)) => return Err(UploadError::ReadFailed(e.to_string())),
            Err(e) => return Err(UploadError::StorageFailed(e.to_string())),
        };

        if size_bytes == 0 {
            self.discard(&storage_path).await;
            return Err(UploadError::MissingFile);
        }

        let upload = Upload {
            id,
            file_path: self.staging_store.file_path(&storage_path),
            storage_path,
            size_bytes,
        };

        tracing::debug!(
            upload_id = %upload.id.as_uuid(),
            path = %upload.file_path.display(),
            bytes = upload.size_bytes,
            "Upload staged"
        );

        Ok(upload)
    }

    /// Runs inference on the upload and returns whichever terminal event came first.
    ///
    /// The process runs in its own task which deletes the upload once the process
    /// exits and then reports through a oneshot channel. On timeout the receiver is
    /// dropped, so a late exit still cleans up but its outcome goes nowhere.
    pub async fn dispatch(&self, upload: Upload) -> InferenceOutcome {
        let (outcome_tx, outcome_rx) = oneshot::channel();
        let runner = Arc::clone(&self.inference_runner);
        let store = Arc::clone(&self.staging_store);
        let started = Instant::now();

        tokio::spawn(
            async move {
                let outcome = match runner.run(&upload.file_path).await {
                    Ok(output) => {
                        tracing::info!(exit_code = ?output.exit_code, "Inference process exited");
                        InferenceOutcome::from_output(output)
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Inference process failed to run");
                        InferenceOutcome::LaunchFailed {
                            reason: e.to_string(),
                        }
                    }
                };

                if let Err(e) = store.delete(&upload.storage_path).await {
                    tracing::warn!(
                        error = %e,
                        path = %upload.storage_path,
                        "Failed to delete staged upload"
                    );
                }

                if outcome_tx.send(outcome).is_err() {
                    tracing::debug!(
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "Inference finished after the request was finalized; outcome discarded"
                    );
                }
            }
            .in_current_span(),
        );

        let outcome = match tokio::time::timeout(self.timeout, outcome_rx).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(_)) => InferenceOutcome::LaunchFailed {
                reason: "inference task ended without reporting an outcome".to_string(),
            },
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Inference process did not exit in time"
                );
                InferenceOutcome::TimedOut
            }
        };

        tracing::info!(
            outcome = outcome.as_str(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Detection request finished"
        );

        outcome
    }

    async fn discard(&self, path: &StoragePath) {
        if let Err(e) = self.staging_store.delete(path).await {
            tracing::warn!(error = %e, path = %path, "Failed to delete empty upload");
        }
    }
}
