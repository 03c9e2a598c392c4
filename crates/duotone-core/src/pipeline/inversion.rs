//! Channel-wise color inversion.

use crate::models::RgbaImage;

/// Invert the RGB channels of an image, preserving alpha.
///
/// Operates on a full copy; the source image is never mutated. Dimensions
/// and the alpha channel carry through unchanged.
pub fn invert_colors(image: &RgbaImage) -> RgbaImage {
    let mut data = image.data.clone();

    for rgba in data.chunks_exact_mut(4) {
        rgba[0] = 255 - rgba[0];
        rgba[1] = 255 - rgba[1];
        rgba[2] = 255 - rgba[2];
        // rgba[3] (alpha) stays as-is
    }

    RgbaImage {
        width: image.width,
        height: image.height,
        data,
    }
}
