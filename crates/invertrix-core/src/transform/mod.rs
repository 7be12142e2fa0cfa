//! Image transformation operations: vertical, horizontal and combined flips.
//!
//! A user picks one [`TransformMode`] per image. Every mode except
//! [`TransformMode::None`] maps to a [`FlipAxis`], which [`apply_flip`]
//! applies to a decoded image. `None` never reaches the engine; the caller
//! skips the file.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - Pixels are stored row-major
//! - Output dimensions always equal input dimensions

mod flip;
mod mode;

pub use flip::apply_flip;
pub use mode::{FlipAxis, TransformMode};
