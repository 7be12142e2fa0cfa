//! PNG image decoding.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};

use super::{DecodeError, DecodedImage};

/// The eight-byte signature every PNG file starts with.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Check whether the bytes start with the PNG signature.
pub fn is_png(bytes: &[u8]) -> bool {
    bytes.starts_with(&PNG_SIGNATURE)
}

/// Decode a PNG image from bytes into RGB8 pixels.
///
/// Alpha channels are dropped and 16-bit samples are reduced to 8 bits, so
/// every decoded image has exactly three bytes per pixel.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a PNG file.
/// Returns `DecodeError::CorruptedFile` if the PNG data cannot be decoded.
pub fn decode_png(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    if !is_png(bytes) {
        return Err(DecodeError::InvalidFormat);
    }

    let mut reader = ImageReader::new(Cursor::new(bytes));
    reader.set_format(ImageFormat::Png);

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(DecodedImage::from_rgb_image(img.into_rgb8()))
}
