use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::application::ports::{InferenceRunner, InferenceRunnerError};
use crate::domain::InferenceOutput;

/// Replays a fixed output after an optional delay and records every invocation.
pub struct MockInferenceRunner {
    output: InferenceOutput,
    delay: Duration,
    calls: AtomicUsize,
    seen_paths: Mutex<Vec<(PathBuf, bool)>>,
}

impl MockInferenceRunner {
    pub fn new(output: InferenceOutput) -> Self {
        Self {
            output,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            seen_paths: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding(stdout: &str) -> Self {
        Self::new(InferenceOutput {
            exit_code: Some(0),
            stdout: stdout.as_bytes().to_vec(),
            stderr: Vec::new(),
        })
    }

    pub fn failing(exit_code: i32, stderr: &str) -> Self {
        Self::new(InferenceOutput {
            exit_code: Some(exit_code),
            stdout: Vec::new(),
            stderr: stderr.as_bytes().to_vec(),
        })
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Paths the runner was invoked with, and whether each existed at that moment.
    pub fn seen_paths(&self) -> Vec<(PathBuf, bool)> {
        self.seen_paths
            .lock()
            .map(|paths| paths.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl InferenceRunner for MockInferenceRunner {
    async fn run(&self, audio_path: &Path) -> Result<InferenceOutput, InferenceRunnerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut paths) = self.seen_paths.lock() {
            paths.push((audio_path.to_path_buf(), audio_path.exists()));
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.output.clone())
    }
}
