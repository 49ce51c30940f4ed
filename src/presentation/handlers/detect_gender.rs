use std::io;

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use futures::StreamExt;
use serde::Serialize;

use crate::application::services::UploadError;
use crate::domain::InferenceOutcome;
use crate::presentation::state::AppState;

pub const AUDIO_FIELD: &str = "audio";
pub const MISSING_FILE_MESSAGE: &str = "No file uploaded under key \"audio\".";
pub const INVALID_OUTPUT_MESSAGE: &str = "Invalid JSON from Python";
pub const LAUNCH_FAILED_MESSAGE: &str = "Failed to start inference process";
pub const TIMEOUT_MESSAGE: &str = "Timeout";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

fn error_response(status: StatusCode, error: impl Into<String>, detail: Option<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            detail,
        }),
    )
        .into_response()
}

#[tracing::instrument(skip(state, multipart))]
pub async fn detect_gender_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Detection request is not a multipart upload");
            return error_response(StatusCode::BAD_REQUEST, MISSING_FILE_MESSAGE, None);
        }
    };

    let upload = loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => {
                tracing::warn!("Detection request without an audio field");
                return error_response(StatusCode::BAD_REQUEST, MISSING_FILE_MESSAGE, None);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(e.status(), format!("Failed to read multipart: {}", e), None);
            }
        };

        if field.name() != Some(AUDIO_FIELD) {
            tracing::debug!(field = ?field.name(), "Skipping multipart field");
            continue;
        }

        // A part without a filename is a plain form value, not a file.
        let Some(filename) = field.file_name().map(str::to_string) else {
            tracing::debug!("Skipping audio field without a filename");
            continue;
        };
        tracing::debug!(filename = ?filename, content_type = ?field.content_type(), "Receiving audio upload");

        let stream = field
            .map(|chunk| chunk.map_err(|e| io::Error::other(e.to_string())))
            .boxed();

        match state
            .detection_service
            .receive(Some(&filename), stream)
            .await
        {
            Ok(upload) => break upload,
            Err(UploadError::MissingFile) => {
                tracing::warn!("Detection request with an empty audio field");
                return error_response(StatusCode::BAD_REQUEST, MISSING_FILE_MESSAGE, None);
            }
            Err(e @ UploadError::ReadFailed(_)) => {
                tracing::error!(error = %e, "Failed to read audio upload");
                return error_response(StatusCode::BAD_REQUEST, e.to_string(), None);
            }
            Err(e @ UploadError::StorageFailed(_)) => {
                tracing::error!(error = %e, "Failed to stage audio upload");
                return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string(), None);
            }
        }
    };

    tracing::info!(
        upload_id = %upload.id.as_uuid(),
        bytes = upload.size_bytes,
        "Dispatching upload to inference"
    );

    outcome_response(state.detection_service.dispatch(upload).await)
}

fn outcome_response(outcome: InferenceOutcome) -> Response {
    match outcome {
        InferenceOutcome::Succeeded(result) => (StatusCode::OK, Json(result)).into_response(),
        InferenceOutcome::ProcessFailed { stderr, .. } => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            InferenceOutcome::process_error_message(&stderr),
            None,
        ),
        InferenceOutcome::InvalidOutput { raw_stdout } => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            INVALID_OUTPUT_MESSAGE,
            Some(raw_stdout),
        ),
        InferenceOutcome::LaunchFailed { reason } => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            LAUNCH_FAILED_MESSAGE,
            Some(reason),
        ),
        InferenceOutcome::TimedOut => {
            error_response(StatusCode::GATEWAY_TIMEOUT, TIMEOUT_MESSAGE, None)
        }
    }
}
