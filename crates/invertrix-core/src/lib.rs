//! Invertrix Core - PNG flipping library
//!
//! This crate provides the core functionality for Invertrix: decoding PNG
//! images, flipping them vertically, horizontally or both, the interactive
//! selection menu state machine, and the batch driver that ties them
//! together.

pub mod batch;
pub mod config;
pub mod decode;
pub mod encode;
pub mod menu;
pub mod transform;

pub use batch::{discover_inputs, output_file_name, run_batch, BatchError, BatchReport};
pub use config::RunConfig;
pub use decode::{decode_png, DecodedImage};
pub use encode::encode_png;
pub use menu::{run_interactive_loop, Key, MenuOutcome, MenuState, Terminal};
pub use transform::{apply_flip, FlipAxis, TransformMode};

/// Version of the Invertrix core library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
