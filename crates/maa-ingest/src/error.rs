//! Error types for upload ingestion.
//!
//! The reader is the only pipeline stage that can fail outright; every
//! later stage reports problems as data. Neither variant is retryable.

use thiserror::Error;

use crate::format::FileFormat;

#[derive(Debug, Error)]
pub enum IngestError {
    /// Filename extension is not one of the configured formats.
    #[error(
        "unsupported file format '{filename}' (supported extensions: {})",
        FileFormat::SUPPORTED_EXTENSIONS.join(", ")
    )]
    UnsupportedFormat { filename: String },

    /// Bytes could not be parsed into tabular structure, even after the
    /// permissive encoding fallback.
    #[error("unreadable file '{filename}': {message}")]
    UnreadableFile { filename: String, message: String },
}

impl IngestError {
    pub(crate) fn unreadable(filename: &str, message: impl ToString) -> Self {
        Self::UnreadableFile {
            filename: filename.to_string(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
