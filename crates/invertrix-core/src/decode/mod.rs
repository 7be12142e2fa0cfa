//! Image decoding for Invertrix.
//!
//! Input images are PNG files. Whatever their color type or bit depth, they
//! are decoded into [`DecodedImage`]: RGB8, row-major, origin top-left.
//!
//! # Examples
//!
//! ```ignore
//! use invertrix_core::decode::decode_png;
//!
//! let png_bytes = std::fs::read("photo.png").unwrap();
//! let image = decode_png(&png_bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod png;
mod types;

pub use png::{decode_png, is_png, PNG_SIGNATURE};
pub use types::{DecodeError, DecodedImage};
