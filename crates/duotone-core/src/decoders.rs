//! Image decoders
//!
//! Loads logo source files into 8-bit RGBA pixel grids. Every supported PNG
//! color type is normalized to 4-channel RGBA here so downstream analysis can
//! assume an alpha channel is present; sources without one are synthesized as
//! fully opaque.

use std::path::Path;

use crate::models::RgbaImage;

/// Decode an image from a file path
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<RgbaImage, String> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| "No file extension found".to_string())?;

    match extension.as_str() {
        "png" => decode_png(path),
        _ => Err(format!("Unsupported file format: {}", extension)),
    }
}

/// Decode a PNG file into RGBA8
pub(crate) fn decode_png<P: AsRef<Path>>(path: P) -> Result<RgbaImage, String> {
    use std::fs::File;
    use std::io::BufReader;

    let file = File::open(path.as_ref()).map_err(|e| format!("Failed to open PNG file: {}", e))?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e| format!("Failed to read PNG info: {}", e))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    // Allocate buffer for image data
    let buffer_size = reader
        .output_buffer_size()
        .ok_or_else(|| "Failed to determine PNG buffer size".to_string())?;
    let mut buf = vec![0u8; buffer_size];
    let frame_info = reader
        .next_frame(&mut buf)
        .map_err(|e| format!("Failed to read PNG frame: {}", e))?;

    // Get the actual bytes used
    let bytes = &buf[..frame_info.buffer_size()];

    // Normalize to interleaved RGBA8
    let data = match (color_type, bit_depth) {
        (png::ColorType::Grayscale, png::BitDepth::Eight) => expand_gray8(bytes, width, height)?,
        (png::ColorType::Grayscale, png::BitDepth::Sixteen) => expand_gray16(bytes, width, height)?,
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => {
            expand_gray_alpha8(bytes, width, height)?
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Sixteen) => {
            expand_gray_alpha16(bytes, width, height)?
        }
        (png::ColorType::Rgb, png::BitDepth::Eight) => expand_rgb8(bytes, width, height)?,
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => expand_rgb16(bytes, width, height)?,
        (png::ColorType::Rgba, png::BitDepth::Eight) => expand_rgba8(bytes, width, height)?,
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => expand_rgba16(bytes, width, height)?,
        (png::ColorType::Indexed, _) => {
            return Err("Indexed PNG not supported".to_string());
        }
        _ => {
            return Err(format!(
                "Unsupported PNG format: {:?} with bit depth {:?}",
                color_type, bit_depth
            ));
        }
    };

    RgbaImage::from_raw(width, height, data)
}

/// Verify the decoded buffer holds exactly the expected number of bytes
fn check_buffer_len(bytes: &[u8], expected: usize) -> Result<(), String> {
    if bytes.len() != expected {
        return Err(format!(
            "PNG buffer size mismatch: expected {}, got {}",
            expected,
            bytes.len()
        ));
    }
    Ok(())
}

/// Expand 8-bit grayscale to RGBA with full opacity
fn expand_gray8(bytes: &[u8], width: u32, height: u32) -> Result<Vec<u8>, String> {
    check_buffer_len(bytes, (width * height) as usize)?;

    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for &gray in bytes {
        rgba.extend_from_slice(&[gray, gray, gray, 255]);
    }

    Ok(rgba)
}

/// Expand 16-bit grayscale to RGBA, keeping the high byte of each sample
fn expand_gray16(bytes: &[u8], width: u32, height: u32) -> Result<Vec<u8>, String> {
    check_buffer_len(bytes, (width * height * 2) as usize)?;

    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    // PNG 16-bit is big-endian; the high byte comes first
    for chunk in bytes.chunks_exact(2) {
        let gray = chunk[0];
        rgba.extend_from_slice(&[gray, gray, gray, 255]);
    }

    Ok(rgba)
}

/// Expand 8-bit grayscale+alpha to RGBA, preserving alpha
fn expand_gray_alpha8(bytes: &[u8], width: u32, height: u32) -> Result<Vec<u8>, String> {
    check_buffer_len(bytes, (width * height * 2) as usize)?;

    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for ga in bytes.chunks_exact(2) {
        rgba.extend_from_slice(&[ga[0], ga[0], ga[0], ga[1]]);
    }

    Ok(rgba)
}

/// Expand 16-bit grayscale+alpha to RGBA, preserving alpha
fn expand_gray_alpha16(bytes: &[u8], width: u32, height: u32) -> Result<Vec<u8>, String> {
    check_buffer_len(bytes, (width * height * 4) as usize)?;

    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for ga in bytes.chunks_exact(4) {
        rgba.extend_from_slice(&[ga[0], ga[0], ga[0], ga[2]]);
    }

    Ok(rgba)
}

/// Expand 8-bit RGB to RGBA with full opacity
fn expand_rgb8(bytes: &[u8], width: u32, height: u32) -> Result<Vec<u8>, String> {
    check_buffer_len(bytes, (width * height * 3) as usize)?;

    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for rgb in bytes.chunks_exact(3) {
        rgba.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
    }

    Ok(rgba)
}

/// Expand 16-bit RGB to RGBA, keeping the high byte of each sample
fn expand_rgb16(bytes: &[u8], width: u32, height: u32) -> Result<Vec<u8>, String> {
    check_buffer_len(bytes, (width * height * 3 * 2) as usize)?;

    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for rgb in bytes.chunks_exact(6) {
        rgba.extend_from_slice(&[rgb[0], rgb[2], rgb[4], 255]);
    }

    Ok(rgba)
}

/// Copy 8-bit RGBA through unchanged
fn expand_rgba8(bytes: &[u8], width: u32, height: u32) -> Result<Vec<u8>, String> {
    check_buffer_len(bytes, (width * height * 4) as usize)?;

    Ok(bytes.to_vec())
}

/// Reduce 16-bit RGBA to 8-bit, keeping the high byte of each sample
fn expand_rgba16(bytes: &[u8], width: u32, height: u32) -> Result<Vec<u8>, String> {
    check_buffer_len(bytes, (width * height * 4 * 2) as usize)?;

    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for px in bytes.chunks_exact(8) {
        rgba.extend_from_slice(&[px[0], px[2], px[4], px[6]]);
    }

    Ok(rgba)
}
