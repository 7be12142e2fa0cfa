//! Image encoding for Invertrix.
//!
//! Transformed images are written back out as PNG, matching the input
//! format.
//!
//! # Examples
//!
//! ```ignore
//! use invertrix_core::encode::encode_png;
//!
//! let pixels = vec![128u8; 100 * 100 * 3]; // Gray image
//! let png_bytes = encode_png(&pixels, 100, 100).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod png;

pub use png::{encode_image, encode_png, EncodeError};
