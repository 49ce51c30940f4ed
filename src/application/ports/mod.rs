mod inference_runner;
mod staging_store;

pub use inference_runner::{InferenceRunner, InferenceRunnerError};
pub use staging_store::{StagingStore, StagingStoreError};
