//! Text uploads as an alternate prompt source
//!
//! An uploaded file's contents are submitted like typed text. Only UTF-8
//! text files are accepted.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{0} is not a UTF-8 text file")]
    NotText(PathBuf),
    #[error("{0} is empty")]
    Empty(PathBuf),
}

/// Read an uploaded text file in full
pub async fn read_text_upload(path: impl AsRef<Path>) -> Result<String, UploadError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|source| UploadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|_| UploadError::NotText(path.to_path_buf()))?;
    if text.trim().is_empty() {
        return Err(UploadError::Empty(path.to_path_buf()));
    }

    tracing::debug!(path = %path.display(), bytes = text.len(), "Read upload");
    Ok(text)
}
