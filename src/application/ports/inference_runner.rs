use std::path::Path;

use async_trait::async_trait;

use crate::domain::InferenceOutput;

/// Runs the external inference collaborator against one staged audio file.
#[async_trait]
pub trait InferenceRunner: Send + Sync {
    async fn run(&self, audio_path: &Path) -> Result<InferenceOutput, InferenceRunnerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceRunnerError {
    #[error("failed to spawn {command}: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read process output: {0}")]
    OutputFailed(#[source] std::io::Error),
    #[error("failed waiting for process exit: {0}")]
    WaitFailed(#[source] std::io::Error),
}
