//! Tests for the variant generation pipeline

use super::*;

/// Helper to create an image where every pixel has the same RGBA value
fn uniform_image(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for _ in 0..(width * height) {
        data.extend_from_slice(&rgba);
    }
    RgbaImage::from_raw(width, height, data).unwrap()
}

/// Helper to build an image from a list of pixels
fn image_from_pixels(width: u32, height: u32, pixels: &[[u8; 4]]) -> RgbaImage {
    assert_eq!(pixels.len(), (width * height) as usize);
    let data: Vec<u8> = pixels.iter().flatten().copied().collect();
    RgbaImage::from_raw(width, height, data).unwrap()
}

// ========================================================================
// Brightness Analysis Tests
// ========================================================================

#[test]
fn test_brightness_uniform_color_matches_rec709() {
    // Uniform opaque color: score must equal the Rec. 709 weighted sum
    let image = uniform_image(4, 4, [200, 100, 50, 255]);
    let expected = 0.2126f32 * 200.0 + 0.7152 * 100.0 + 0.0722 * 50.0;

    let score = average_brightness(&image);
    assert!(
        (score - expected).abs() < 0.001,
        "Expected score {}, got {}",
        expected,
        score
    );
}

#[test]
fn test_brightness_fully_transparent_defaults_to_midpoint() {
    let image = uniform_image(8, 8, [255, 255, 255, 0]);

    let report = analyze_brightness(&image);
    assert!(
        (report.score - 128.0).abs() < f32::EPSILON,
        "Transparent image should score 128.0, got {}",
        report.score
    );
    assert_eq!(report.opaque_pixels, 0);
}

#[test]
fn test_brightness_skips_transparent_pixels() {
    // One opaque black pixel next to a transparent white one: the white
    // pixel must not pull the average up
    let image = image_from_pixels(2, 1, &[[0, 0, 0, 255], [255, 255, 255, 0]]);

    let report = analyze_brightness(&image);
    assert!(
        report.score.abs() < 0.001,
        "Only the opaque black pixel should count, got {}",
        report.score
    );
    assert_eq!(report.opaque_pixels, 1);
}

#[test]
fn test_brightness_counts_partially_transparent_pixels() {
    // Alpha 1 is non-zero, so the pixel contributes at full weight
    let image = image_from_pixels(2, 1, &[[255, 255, 255, 1], [255, 255, 255, 0]]);

    let report = analyze_brightness(&image);
    assert_eq!(report.opaque_pixels, 1);
    assert!(
        (report.score - 255.0).abs() < 0.001,
        "Expected score 255.0, got {}",
        report.score
    );
}

#[test]
fn test_brightness_black_is_dark() {
    let image = uniform_image(2, 2, [0, 0, 0, 255]);

    let report = analyze_brightness(&image);
    assert!(report.score.abs() < 0.001, "Black should score 0.0");
    assert!(report.is_dark, "Black logo should classify as dark");
}

#[test]
fn test_brightness_white_is_light() {
    let image = uniform_image(2, 2, [255, 255, 255, 255]);

    let report = analyze_brightness(&image);
    assert!(
        (report.score - 255.0).abs() < 0.001,
        "White should score 255.0, got {}",
        report.score
    );
    assert!(!report.is_dark, "White logo should classify as light");
}

#[test]
fn test_brightness_midpoint_classifies_as_light() {
    // Score of exactly 128.0 sits on the boundary and is not dark
    let image = uniform_image(2, 2, [128, 128, 128, 255]);

    let report = analyze_brightness(&image);
    assert!(
        (report.score - 128.0).abs() < 0.001,
        "Mid-gray should score 128.0, got {}",
        report.score
    );
    assert!(!report.is_dark, "Boundary score should classify as light");
}

// ========================================================================
// Inversion Tests
// ========================================================================

#[test]
fn test_invert_twice_restores_original() {
    let image = image_from_pixels(
        2,
        2,
        &[
            [0, 64, 128, 255],
            [255, 1, 2, 128],
            [10, 20, 30, 0],
            [200, 100, 50, 7],
        ],
    );

    let restored = invert_colors(&invert_colors(&image));
    assert_eq!(restored, image, "Double inversion must be the identity");
}

#[test]
fn test_invert_preserves_alpha() {
    let image = image_from_pixels(
        2,
        2,
        &[
            [0, 0, 0, 0],
            [50, 60, 70, 1],
            [100, 110, 120, 128],
            [255, 255, 255, 255],
        ],
    );

    let inverted = invert_colors(&image);
    for (orig, inv) in image.data.chunks_exact(4).zip(inverted.data.chunks_exact(4)) {
        assert_eq!(orig[3], inv[3], "Alpha must be invariant under inversion");
    }
}

#[test]
fn test_invert_flips_channels() {
    let image = uniform_image(1, 1, [10, 20, 30, 40]);

    let inverted = invert_colors(&image);
    assert_eq!(inverted.data, vec![245, 235, 225, 40]);
}

#[test]
fn test_invert_preserves_dimensions() {
    let image = uniform_image(5, 3, [1, 2, 3, 4]);

    let inverted = invert_colors(&image);
    assert_eq!(inverted.width, image.width);
    assert_eq!(inverted.height, image.height);
    assert_eq!(inverted.data.len(), image.data.len());
}

#[test]
fn test_invert_does_not_mutate_source() {
    let image = uniform_image(2, 2, [10, 20, 30, 40]);
    let before = image.clone();

    let _ = invert_colors(&image);
    assert_eq!(image, before, "Source image must stay untouched");
}

// ========================================================================
// Variant Generation Tests
// ========================================================================

#[test]
fn test_generate_variants_dark_logo() {
    // Pure black opaque logo: dark, so the light slot keeps the original
    // and the dark slot gets the white inversion
    let image = uniform_image(2, 2, [0, 0, 0, 255]);
    let report = analyze_brightness(&image);
    assert!(report.is_dark);

    let variants = generate_variants(&image, report.is_dark);
    assert_eq!(variants.light, image, "Light slot should equal the source");
    assert_eq!(
        variants.dark,
        uniform_image(2, 2, [255, 255, 255, 255]),
        "Dark slot should be the white inversion"
    );
}

#[test]
fn test_generate_variants_light_logo() {
    // Pure white opaque logo: light, so the dark slot keeps the original
    // and the light slot gets the black inversion
    let image = uniform_image(2, 2, [255, 255, 255, 255]);
    let report = analyze_brightness(&image);
    assert!(!report.is_dark);

    let variants = generate_variants(&image, report.is_dark);
    assert_eq!(variants.dark, image, "Dark slot should equal the source");
    assert_eq!(
        variants.light,
        uniform_image(2, 2, [0, 0, 0, 255]),
        "Light slot should be the black inversion"
    );
}

#[test]
fn test_generate_variants_midgray_boundary() {
    // Score of exactly 128.0 classifies as light: dark slot keeps the
    // source, light slot gets (127,127,127)
    let image = uniform_image(2, 2, [128, 128, 128, 255]);
    let report = analyze_brightness(&image);

    let variants = generate_variants(&image, report.is_dark);
    assert_eq!(variants.dark, image);
    assert_eq!(variants.light, uniform_image(2, 2, [127, 127, 127, 255]));
}

#[test]
fn test_generate_variants_exactly_one_slot_is_source() {
    let image = image_from_pixels(2, 1, &[[30, 40, 50, 255], [60, 70, 80, 200]]);

    for is_dark in [true, false] {
        let variants = generate_variants(&image, is_dark);
        let light_is_source = variants.light == image;
        let dark_is_source = variants.dark == image;
        assert!(
            light_is_source != dark_is_source,
            "Exactly one slot must be bit-identical to the source"
        );

        let inverted = if light_is_source {
            &variants.dark
        } else {
            &variants.light
        };
        assert_eq!(
            *inverted,
            invert_colors(&image),
            "The other slot must be the channel-wise inversion"
        );
    }
}

#[test]
fn test_generate_variants_preserve_dimensions() {
    let image = uniform_image(7, 5, [90, 90, 90, 255]);

    let variants = generate_variants(&image, true);
    for variant in [&variants.light, &variants.dark] {
        assert_eq!(variant.width, 7);
        assert_eq!(variant.height, 5);
        assert_eq!(variant.data.len(), image.data.len());
    }
}
