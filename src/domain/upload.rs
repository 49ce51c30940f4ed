use std::path::PathBuf;

use super::{StoragePath, UploadId};

/// An audio payload staged on disk for exactly one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub id: UploadId,
    pub storage_path: StoragePath,
    /// Absolute path handed to the inference process.
    pub file_path: PathBuf,
    pub size_bytes: u64,
}
