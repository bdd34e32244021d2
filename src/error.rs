//! Error types for the exampaper library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for exampaper operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, validating or exporting papers.
///
/// Rendering itself never fails; every variant here belongs to the
/// surrounding persistence and export layers.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Project file is not valid JSON or does not match the schema.
    #[error("Project file error: {0}")]
    Json(#[from] serde_json::Error),

    /// The project file was written by an incompatible version.
    #[error("Unsupported project file version: {0}")]
    UnsupportedVersion(u32),

    /// The document does not meet the preconditions for export.
    #[error("Invalid exam paper: {0}")]
    InvalidDocument(String),

    /// The export destination could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        /// Destination that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// No exporter is registered for the extension.
    #[error("No exporter for extension: {0}")]
    UnsupportedExtension(String),

    /// The destination path has no extension to dispatch on.
    #[error("File has no extension: {}", .0.display())]
    MissingExtension(PathBuf),

    /// Two jobs in one batch target the same file.
    #[error("Another export in this batch already writes {}", .0.display())]
    DuplicateDestination(PathBuf),
}

impl Error {
    /// Check if this error is a failed write to an export destination.
    pub fn is_write_failure(&self) -> bool {
        matches!(self, Error::WriteFailed { .. })
    }
}
