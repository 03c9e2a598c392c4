//! Perceived-brightness analysis.

use crate::models::{BrightnessReport, RgbaImage};

/// Threshold separating dark logos from light ones. A fully transparent
/// image also defaults to this score, which classifies it as light.
pub const BRIGHTNESS_MIDPOINT: f32 = 128.0;

// Rec. 709 coefficients for perceived brightness
const LUMA_R: f32 = 0.2126;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

/// Analyze the perceived brightness of a logo.
///
/// Fully transparent pixels carry no visible color and are excluded from
/// the average; an image with no visible pixels scores the midpoint.
pub fn analyze_brightness(image: &RgbaImage) -> BrightnessReport {
    let mut total_brightness = 0.0f64;
    let mut opaque_pixels = 0usize;

    for rgba in image.data.chunks_exact(4) {
        // Only consider non-transparent pixels
        if rgba[3] == 0 {
            continue;
        }

        let luma = LUMA_R * rgba[0] as f32 + LUMA_G * rgba[1] as f32 + LUMA_B * rgba[2] as f32;
        total_brightness += luma as f64;
        opaque_pixels += 1;
    }

    let score = if opaque_pixels > 0 {
        (total_brightness / opaque_pixels as f64) as f32
    } else {
        BRIGHTNESS_MIDPOINT
    };

    BrightnessReport {
        score,
        is_dark: score < BRIGHTNESS_MIDPOINT,
        opaque_pixels,
    }
}

/// Average perceived brightness of an image's non-transparent pixels.
pub fn average_brightness(image: &RgbaImage) -> f32 {
    analyze_brightness(image).score
}
