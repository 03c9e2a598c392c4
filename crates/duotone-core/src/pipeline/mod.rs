//! Variant generation pipeline
//!
//! Core pipeline for deriving light and dark theme logo variants from a
//! single source image.
//!
//! This module is organized into submodules:
//! - `brightness`: Perceived-brightness analysis over non-transparent pixels
//! - `inversion`: Channel-wise RGB inversion preserving alpha

mod brightness;
mod inversion;

#[cfg(test)]
mod tests;

pub use brightness::{analyze_brightness, average_brightness, BRIGHTNESS_MIDPOINT};
pub use inversion::invert_colors;

use crate::models::{RgbaImage, ThemeVariantPair};

/// Assign the original and inverted renderings to theme slots.
///
/// A dark logo is used as-is on light backgrounds and inverted for dark
/// backgrounds; a light logo gets the opposite assignment. The source image
/// is never mutated; the unchanged slot receives a bit-identical copy.
pub fn generate_variants(image: &RgbaImage, is_dark: bool) -> ThemeVariantPair {
    if is_dark {
        ThemeVariantPair {
            light: image.clone(),
            dark: invert_colors(image),
        }
    } else {
        ThemeVariantPair {
            light: invert_colors(image),
            dark: image.clone(),
        }
    }
}
