//! Core data types for variant generation.

use serde::{Deserialize, Serialize};

/// An 8-bit RGBA image held as a flat, interleaved pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Interleaved R,G,B,A samples, row-major, `width * height * 4` bytes
    pub data: Vec<u8>,
}

impl RgbaImage {
    /// Create an image from a raw RGBA buffer.
    ///
    /// The buffer length must equal `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, String> {
        let expected = (width as usize) * (height as usize) * 4;
        if data.len() != expected {
            return Err(format!(
                "RGBA buffer size mismatch: expected {}, got {}",
                expected,
                data.len()
            ));
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Number of pixels in the image.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// The two theme renderings derived from one source logo.
///
/// Exactly one of the pair is bit-identical to the source; the other is its
/// channel-wise inversion with alpha left untouched.
#[derive(Debug, Clone)]
pub struct ThemeVariantPair {
    /// Variant for light UI backgrounds
    pub light: RgbaImage,

    /// Variant for dark UI backgrounds
    pub dark: RgbaImage,
}

/// Result of analyzing a logo's perceived brightness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrightnessReport {
    /// Average Rec. 709 luminance over non-transparent pixels (0-255)
    pub score: f32,

    /// Whether the logo classifies as dark (score strictly below 128.0)
    pub is_dark: bool,

    /// Number of pixels with non-zero alpha that contributed to the score
    pub opaque_pixels: usize,
}
