//! Input discovery and output naming.

use std::path::Path;

use super::BatchError;
use crate::transform::TransformMode;

/// File name suffix of images picked up from the input folder.
pub const INPUT_EXTENSION: &str = ".png";

/// List the PNG files directly inside `dir`.
///
/// Only regular files whose name ends in `.png` are returned (the match is
/// case-sensitive). Subdirectories are not searched. Names are sorted so
/// the menu order and processing order are stable across platforms.
pub fn discover_inputs(dir: &Path) -> Result<Vec<String>, BatchError> {
    let read_dir_error = |source| BatchError::ReadDir {
        dir: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) if name.ends_with(INPUT_EXTENSION) => files.push(name),
            Ok(_) => {}
            Err(name) => log::debug!("Skipping non UTF-8 file name {:?}", name),
        }
    }

    files.sort();
    Ok(files)
}

/// Name of the output file for `file_name` under `mode`, or `None` when the
/// mode writes nothing.
pub fn output_file_name(mode: TransformMode, file_name: &str) -> Option<String> {
    mode.prefix().map(|prefix| format!("{prefix}{file_name}"))
}
