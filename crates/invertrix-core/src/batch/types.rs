//! Error and report types for batch processing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::decode::DecodeError;
use crate::encode::EncodeError;
use crate::transform::TransformMode;

/// Errors that can occur while discovering or processing images.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The input folder could not be listed.
    #[error("Failed to read directory {}: {source}", .dir.display())]
    ReadDir { dir: PathBuf, source: io::Error },

    /// The output folder could not be created.
    #[error("Failed to create output directory {}: {source}", .dir.display())]
    CreateOutputDir { dir: PathBuf, source: io::Error },

    /// An input image could not be read from disk.
    #[error("Failed to read {}: {source}", .path.display())]
    ReadFile { path: PathBuf, source: io::Error },

    /// An input image could not be decoded.
    #[error("Failed to decode {file}: {source}")]
    Decode { file: String, source: DecodeError },

    /// A transformed image could not be encoded.
    #[error("Failed to encode {file}: {source}")]
    Encode { file: String, source: EncodeError },

    /// A transformed image could not be written to disk.
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFile { path: PathBuf, source: io::Error },

    /// The number of selected modes doesn't match the number of files.
    #[error("Got {modes} transform selections for {files} files")]
    SelectionMismatch { files: usize, modes: usize },
}

/// A file that could not be processed.
#[derive(Debug)]
pub struct FileFailure {
    pub file_name: String,
    pub mode: TransformMode,
    pub error: BatchError,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Output files written, in input order.
    pub written: Vec<PathBuf>,
    /// Files left alone because their mode was `None`.
    pub skipped: usize,
    /// Files that failed, in input order.
    pub failures: Vec<FileFailure>,
}

impl BatchReport {
    /// True when no file failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total number of files looked at.
    pub fn total(&self) -> usize {
        self.written.len() + self.skipped + self.failures.len()
    }
}
