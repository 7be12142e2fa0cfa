//! Batch processing of the input folder.
//!
//! This module provides:
//! - Discovery of PNG files in the input folder
//! - Output file naming (`vertical_`, `horizontal_`, `both_` prefixes)
//! - Per-file decode → flip → encode
//! - A parallel driver that collects per-file failures into a report
//!
//! # Error Policy
//!
//! A file that fails to read, decode, encode or write is reported and
//! skipped; the rest of the batch carries on. Problems that affect every
//! file (unlistable input folder, uncreatable output folder) fail the run.

mod input;
mod process;
mod types;

pub use input::{discover_inputs, output_file_name, INPUT_EXTENSION};
pub use process::{process_file, run_batch};
pub use types::{BatchError, BatchReport, FileFailure};
