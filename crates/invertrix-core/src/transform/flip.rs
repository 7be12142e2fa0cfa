//! Axis reflection of pixel grids.
//!
//! For an image of height `H` and width `W`, the destination pixel at
//! row `r`, column `c` is:
//!
//! - Vertical: `src[H-1-r][c]`
//! - Horizontal: `src[r][W-1-c]`
//! - Both: `src[H-1-r][W-1-c]`
//!
//! Every destination row depends on exactly one source row, so rows are
//! filled in parallel.

use rayon::prelude::*;

use super::FlipAxis;
use crate::decode::DecodedImage;

/// Reflect an image about the given axis.
///
/// The source is left untouched and a new image of identical dimensions is
/// returned. Zero-area images produce an equally empty image.
///
/// # Example
///
/// ```
/// use invertrix_core::decode::DecodedImage;
/// use invertrix_core::transform::{apply_flip, FlipAxis};
///
/// // 1x2 image: red above blue
/// let image = DecodedImage::new(1, 2, vec![255, 0, 0, 0, 0, 255]);
/// let flipped = apply_flip(&image, FlipAxis::Vertical);
/// assert_eq!(flipped.pixels, vec![0, 0, 255, 255, 0, 0]);
/// ```
pub fn apply_flip(image: &DecodedImage, axis: FlipAxis) -> DecodedImage {
    let stride = image.row_stride();
    if image.is_empty() || stride == 0 {
        return image.clone();
    }

    let height = image.height as usize;
    let flip_rows = axis.flips_rows();
    let flip_columns = axis.flips_columns();

    let mut output = vec![0u8; image.pixels.len()];

    output
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(row, dst_row)| {
            let src_row_index = if flip_rows { height - 1 - row } else { row };
            let src_start = src_row_index * stride;
            let src_row = &image.pixels[src_start..src_start + stride];

            if flip_columns {
                for (dst_px, src_px) in dst_row
                    .chunks_exact_mut(3)
                    .zip(src_row.chunks_exact(3).rev())
                {
                    dst_px.copy_from_slice(src_px);
                }
            } else {
                dst_row.copy_from_slice(src_row);
            }
        });

    DecodedImage {
        width: image.width,
        height: image.height,
        pixels: output,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
