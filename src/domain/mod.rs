mod inference_outcome;
mod storage_path;
mod upload;
mod upload_id;

pub use inference_outcome::{DEFAULT_PROCESS_ERROR, InferenceOutcome, InferenceOutput};
pub use storage_path::StoragePath;
pub use upload::Upload;
pub use upload_id::UploadId;
