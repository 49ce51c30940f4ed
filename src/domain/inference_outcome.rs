use serde_json::Value;

pub const DEFAULT_PROCESS_ERROR: &str = "Inference error";

/// What the inference process left behind once it exited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceOutput {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl InferenceOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Terminal state of a single detection request. Exactly one is produced per request.
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceOutcome {
    Succeeded(Value),
    ProcessFailed {
        exit_code: Option<i32>,
        stderr: String,
    },
    InvalidOutput {
        raw_stdout: String,
    },
    LaunchFailed {
        reason: String,
    },
    TimedOut,
}

impl InferenceOutcome {
    /// Classifies a finished process: non-zero exit wins over stdout contents,
    /// otherwise stdout must parse as a single JSON value.
    pub fn from_output(output: InferenceOutput) -> Self {
        if !output.success() {
            return Self::ProcessFailed {
                exit_code: output.exit_code,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            };
        }

        match serde_json::from_slice::<Value>(&output.stdout) {
            Ok(value) => Self::Succeeded(value),
            Err(_) => Self::InvalidOutput {
                raw_stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            },
        }
    }

    /// Error message for a failed process: captured stderr, or the default when empty.
    pub fn process_error_message(stderr: &str) -> &str {
        if stderr.is_empty() {
            DEFAULT_PROCESS_ERROR
        } else {
            stderr
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Succeeded(_) => "SUCCEEDED",
            Self::ProcessFailed { .. } => "PROCESS_FAILED",
            Self::InvalidOutput { .. } => "INVALID_OUTPUT",
            Self::LaunchFailed { .. } => "LAUNCH_FAILED",
            Self::TimedOut => "TIMED_OUT",
        }
    }
}
