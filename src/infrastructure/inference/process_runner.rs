use std::io;
use std::path::Path;
use std::process::Stdio;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

use crate::application::ports::{InferenceRunner, InferenceRunnerError};
use crate::domain::InferenceOutput;
use crate::infrastructure::observability::preview_output;

const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Spawns `<program> <args...> <audio path>` for every request.
///
/// The child is never killed by the runner: dropping the run future leaves the
/// process alive, and the caller decides how long to wait for it.
pub struct CommandInferenceRunner {
    program: String,
    args: Vec<String>,
}

impl CommandInferenceRunner {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[async_trait::async_trait]
impl InferenceRunner for CommandInferenceRunner {
    async fn run(&self, audio_path: &Path) -> Result<InferenceOutput, InferenceRunnerError> {
        tracing::info!(
            command = %self.command_line(),
            audio_path = %audio_path.display(),
            "Spawning inference process"
        );

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(audio_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| InferenceRunnerError::SpawnFailed {
                command: self.command_line(),
                source,
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let (stdout, stderr, status) = tokio::join!(
            drain(stdout, "stdout"),
            drain(stderr, "stderr"),
            child.wait()
        );

        let status = status.map_err(InferenceRunnerError::WaitFailed)?;

        Ok(InferenceOutput {
            exit_code: status.code(),
            stdout: stdout.map_err(InferenceRunnerError::OutputFailed)?,
            stderr: stderr.map_err(InferenceRunnerError::OutputFailed)?,
        })
    }
}

async fn drain<R>(reader: Option<R>, stream: &'static str) -> io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let Some(mut reader) = reader else {
        return Ok(Vec::new());
    };

    let mut collected = Vec::new();
    let mut chunk = vec![0u8; READ_CHUNK_SIZE];
    loop {
        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        tracing::debug!(
            stream,
            output = %preview_output(&String::from_utf8_lossy(&chunk[..n])),
            "Inference process output"
        );
        collected.extend_from_slice(&chunk[..n]);
    }

    Ok(collected)
}
