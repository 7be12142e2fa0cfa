//! Run configuration: where images are read from and written to.

use std::path::{Path, PathBuf};

/// Input folder used when none is given on the command line.
pub const DEFAULT_INPUT_DIR: &str = "./data/input";

/// Output folder used when none is given on the command line.
pub const DEFAULT_OUTPUT_DIR: &str = "./data/output";

/// Folders for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    input_overridden: bool,
    output_overridden: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            input_overridden: false,
            output_overridden: false,
        }
    }
}

impl RunConfig {
    /// Build a config from optional command-line folders, falling back to
    /// the defaults for anything not given.
    pub fn new(input_dir: Option<PathBuf>, output_dir: Option<PathBuf>) -> Self {
        let defaults = Self::default();
        Self {
            input_overridden: input_dir.is_some(),
            output_overridden: output_dir.is_some(),
            input_dir: input_dir.unwrap_or(defaults.input_dir),
            output_dir: output_dir.unwrap_or(defaults.output_dir),
        }
    }

    /// Full path of an input file.
    pub fn input_path(&self, file_name: &str) -> PathBuf {
        self.input_dir.join(file_name)
    }

    /// Full path of an output file.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// Status line announcing folders that were set on the command line.
    ///
    /// Empty when both folders are the defaults.
    pub fn override_summary(&self) -> String {
        let mut summary = String::new();
        if self.input_overridden {
            summary.push_str(&folder_note("Input", &self.input_dir));
        }
        if self.output_overridden {
            summary.push_str(&folder_note("Output", &self.output_dir));
        }
        summary
    }
}

fn folder_note(kind: &str, dir: &Path) -> String {
    format!("{kind} folder set to '{}'. ", dir.display())
}
