use std::fmt;

use super::upload_id::UploadId;

const MAX_EXTENSION_LEN: usize = 8;

/// Location of a staged upload, relative to the staging directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    /// Builds `<uuid>` or `<uuid>.<ext>`. Only the extension of the client file
    /// name is kept, and only when it is short and ASCII alphanumeric.
    pub fn new(upload_id: &UploadId, original_filename: Option<&str>) -> Self {
        match original_filename.and_then(safe_extension) {
            Some(ext) => Self(format!("{}.{}", upload_id.as_uuid(), ext)),
            None => Self(upload_id.as_uuid().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn safe_extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty()
        || ext.is_empty()
        || ext.len() > MAX_EXTENSION_LEN
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
