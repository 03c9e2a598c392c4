//! Image exporters
//!
//! Write generated logo variants to PNG files, preserving the alpha channel.

use std::path::Path;

use crate::models::RgbaImage;

/// Export an image to an 8-bit RGBA PNG file
///
/// Parent directories are created as needed before writing. Any failure
/// along the way is returned with the underlying cause.
pub fn export_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<(), String> {
    use std::fs::File;
    use std::io::BufWriter;

    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                format!(
                    "Failed to create output directory {}: {}",
                    parent.display(),
                    e
                )
            })?;
        }
    }

    let file = File::create(path).map_err(|e| format!("Failed to create PNG file: {}", e))?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width, image.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| format!("Failed to write PNG header: {}", e))?;
    png_writer
        .write_image_data(&image.data)
        .map_err(|e| format!("Failed to write PNG image: {}", e))?;
    png_writer
        .finish()
        .map_err(|e| format!("Failed to finish PNG file: {}", e))?;

    Ok(())
}
