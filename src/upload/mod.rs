//! Storage for uploaded media photos. Only the filename is recorded on the
//! owning row; serving the bytes back is not handled here.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("invalid filename: {0}")]
    InvalidFilename(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A file received alongside a create or update request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }
}

#[async_trait]
pub trait Uploader: Send + Sync {
    async fn upload(&self, filename: &str, bytes: &[u8]) -> Result<(), UploadError>;
}

/// Writes uploads under a single directory, replacing any file of the same name.
pub struct LocalUploader {
    base_path: PathBuf,
}

impl LocalUploader {
    pub fn new(upload_dir: &Path) -> Self {
        Self {
            base_path: upload_dir.to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn temp_path(&self) -> PathBuf {
        self.base_path.join("tmp").join(Uuid::new_v4().to_string())
    }
}

#[async_trait]
impl Uploader for LocalUploader {
    async fn upload(&self, filename: &str, bytes: &[u8]) -> Result<(), UploadError> {
        validate_filename(filename)?;

        let temp_path = self.temp_path();
        if let Some(parent) = temp_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut temp_file = File::create(&temp_path).await?;
        temp_file.write_all(bytes).await?;
        temp_file.sync_all().await?;

        fs::rename(&temp_path, self.base_path.join(filename)).await?;

        tracing::debug!(filename, size = bytes.len(), "Stored upload");
        Ok(())
    }
}

fn validate_filename(filename: &str) -> Result<(), UploadError> {
    let invalid = filename.is_empty()
        || filename == "."
        || filename == ".."
        || filename.contains(['/', '\\', '\0']);

    if invalid {
        return Err(UploadError::InvalidFilename(filename.to_string()));
    }
    Ok(())
}
