//! Per-file decode → flip → encode, and the parallel batch driver.

use std::path::PathBuf;

use rayon::prelude::*;

use super::{output_file_name, BatchError, BatchReport, FileFailure};
use crate::config::RunConfig;
use crate::decode::decode_png;
use crate::encode::encode_image;
use crate::transform::{apply_flip, TransformMode};

/// Transform one input image and write the result.
///
/// Returns the path written, or `None` when `mode` is
/// [`TransformMode::None`] and the file is skipped. The output folder must
/// already exist.
pub fn process_file(
    config: &RunConfig,
    file_name: &str,
    mode: TransformMode,
) -> Result<Option<PathBuf>, BatchError> {
    let (Some(axis), Some(out_name)) = (mode.axis(), output_file_name(mode, file_name)) else {
        return Ok(None);
    };

    let input_path = config.input_path(file_name);
    let bytes = std::fs::read(&input_path).map_err(|source| BatchError::ReadFile {
        path: input_path.clone(),
        source,
    })?;

    let image = decode_png(&bytes).map_err(|source| BatchError::Decode {
        file: file_name.to_string(),
        source,
    })?;

    let flipped = apply_flip(&image, axis);

    let png = encode_image(&flipped).map_err(|source| BatchError::Encode {
        file: file_name.to_string(),
        source,
    })?;

    let output_path = config.output_path(&out_name);
    std::fs::write(&output_path, png).map_err(|source| BatchError::WriteFile {
        path: output_path.clone(),
        source,
    })?;

    log::debug!(
        "{} -> {} ({}x{}, {:?})",
        input_path.display(),
        output_path.display(),
        flipped.width,
        flipped.height,
        axis
    );

    Ok(Some(output_path))
}

/// Process every file with its selected mode.
///
/// `file_names` and `modes` are paired by position. Files are processed in
/// parallel; a failure in one file is recorded in the report and does not
/// stop the others. The output folder is created if anything is to be
/// written and it doesn't exist yet; failing to create it fails the run.
pub fn run_batch(
    config: &RunConfig,
    file_names: &[String],
    modes: &[TransformMode],
) -> Result<BatchReport, BatchError> {
    if file_names.len() != modes.len() {
        return Err(BatchError::SelectionMismatch {
            files: file_names.len(),
            modes: modes.len(),
        });
    }

    let has_work = modes.iter().any(|mode| *mode != TransformMode::None);
    if has_work && !config.output_dir.is_dir() {
        std::fs::create_dir_all(&config.output_dir).map_err(|source| {
            BatchError::CreateOutputDir {
                dir: config.output_dir.clone(),
                source,
            }
        })?;
        log::info!("Created output directory {}", config.output_dir.display());
    }

    let results: Vec<_> = file_names
        .par_iter()
        .zip(modes.par_iter())
        .map(|(file_name, mode)| (file_name, *mode, process_file(config, file_name, *mode)))
        .collect();

    let mut report = BatchReport::default();
    for (file_name, mode, result) in results {
        match result {
            Ok(Some(path)) => report.written.push(path),
            Ok(None) => report.skipped += 1,
            Err(error) => {
                log::warn!("{}", error);
                report.failures.push(FileFailure {
                    file_name: file_name.clone(),
                    mode,
                    error,
                });
            }
        }
    }

    log::info!(
        "Batch finished: {} written, {} skipped, {} failed",
        report.written.len(),
        report.skipped,
        report.failures.len()
    );

    Ok(report)
}
