use std::path::Path;

use timbre::application::ports::{InferenceRunner, InferenceRunnerError};
use timbre::infrastructure::inference::CommandInferenceRunner;

use crate::helpers::script_runner;

#[tokio::test]
async fn given_script_when_running_then_captures_stdout_stderr_and_exit_code() {
    let runner = script_runner("printf 'out'; printf 'err' >&2; exit 4");

    let output = runner.run(Path::new("/tmp/audio.wav")).await.unwrap();

    assert_eq!(output.exit_code, Some(4));
    assert_eq!(output.stdout, b"out");
    assert_eq!(output.stderr, b"err");
    assert!(!output.success());
}

#[tokio::test]
async fn given_audio_path_when_running_then_path_is_last_argument() {
    let runner = script_runner(r#"printf '%s|%s' "$#" "$1""#);

    let output = runner
        .run(Path::new("/srv/uploads/with space.wav"))
        .await
        .unwrap();

    assert!(output.success());
    assert_eq!(output.stdout, b"1|/srv/uploads/with space.wav");
}

#[tokio::test]
async fn given_output_larger_than_pipe_buffer_when_running_then_collects_everything() {
    let runner = script_runner(
        "i=0; while [ $i -lt 20000 ]; do printf 'xxxxxxxxxx'; printf 'e' >&2; i=$((i+1)); done",
    );

    let output = runner.run(Path::new("/tmp/audio.wav")).await.unwrap();

    assert!(output.success());
    assert_eq!(output.stdout.len(), 200_000);
    assert_eq!(output.stderr.len(), 20_000);
}

#[tokio::test]
async fn given_missing_program_when_running_then_spawn_fails() {
    let runner = CommandInferenceRunner::new("/nonexistent/detect", vec!["--fast".to_string()]);

    let result = runner.run(Path::new("/tmp/audio.wav")).await;

    match result {
        Err(InferenceRunnerError::SpawnFailed { command, .. }) => {
            assert_eq!(command, "/nonexistent/detect --fast");
        }
        other => panic!("expected spawn failure, got {:?}", other.map(|o| o.exit_code)),
    }
}

#[test]
fn given_program_and_args_when_formatting_then_joins_with_spaces() {
    let runner = CommandInferenceRunner::new("python", vec!["detect_gender.py".to_string()]);

    assert_eq!(runner.command_line(), "python detect_gender.py");
}
