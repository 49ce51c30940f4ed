use serde_json::json;

use timbre::domain::{DEFAULT_PROCESS_ERROR, InferenceOutcome, InferenceOutput};

fn output(exit_code: Option<i32>, stdout: &str, stderr: &str) -> InferenceOutput {
    InferenceOutput {
        exit_code,
        stdout: stdout.as_bytes().to_vec(),
        stderr: stderr.as_bytes().to_vec(),
    }
}

#[test]
fn given_zero_exit_and_json_stdout_when_classifying_then_succeeds_with_value() {
    let outcome = InferenceOutcome::from_output(output(Some(0), "{\"label\": \"male\"}\n", ""));

    assert_eq!(outcome, InferenceOutcome::Succeeded(json!({ "label": "male" })));
}

#[test]
fn given_zero_exit_and_array_stdout_when_classifying_then_passes_value_through() {
    let outcome = InferenceOutcome::from_output(output(Some(0), "[1, 2, 3]", "warning"));

    assert_eq!(outcome, InferenceOutcome::Succeeded(json!([1, 2, 3])));
}

#[test]
fn given_zero_exit_and_garbage_stdout_when_classifying_then_reports_raw_output() {
    let outcome = InferenceOutcome::from_output(output(Some(0), "not json", ""));

    assert_eq!(
        outcome,
        InferenceOutcome::InvalidOutput {
            raw_stdout: "not json".to_string()
        }
    );
}

#[test]
fn given_zero_exit_and_empty_stdout_when_classifying_then_output_is_invalid() {
    let outcome = InferenceOutcome::from_output(output(Some(0), "", ""));

    assert_eq!(outcome.as_str(), "INVALID_OUTPUT");
}

#[test]
fn given_two_json_documents_when_classifying_then_output_is_invalid() {
    let outcome = InferenceOutcome::from_output(output(Some(0), "{} {}", ""));

    assert_eq!(outcome.as_str(), "INVALID_OUTPUT");
}

#[test]
fn given_non_zero_exit_when_classifying_then_fails_even_with_valid_stdout() {
    let outcome = InferenceOutcome::from_output(output(Some(1), "{}", "boom"));

    assert_eq!(
        outcome,
        InferenceOutcome::ProcessFailed {
            exit_code: Some(1),
            stderr: "boom".to_string()
        }
    );
}

#[test]
fn given_signal_termination_when_classifying_then_process_failed() {
    let outcome = InferenceOutcome::from_output(output(None, "", ""));

    assert_eq!(outcome.as_str(), "PROCESS_FAILED");
}

#[test]
fn given_empty_stderr_when_building_error_message_then_uses_default() {
    assert_eq!(InferenceOutcome::process_error_message(""), DEFAULT_PROCESS_ERROR);
    assert_eq!(InferenceOutcome::process_error_message("oops"), "oops");
}
