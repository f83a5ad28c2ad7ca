//! Optional lossy re-encoding stage
//!
//! Re-encodes any supported raster as JPEG at a reduced quality. The output
//! is always JPEG regardless of the input format; grayscale input stays
//! grayscale and alpha channels are flattened onto white first.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GrayImage, RgbImage};

use crate::types::{ConvertError, Result};

/// Re-encode image bytes as JPEG at the given quality fraction.
///
/// `quality` is valid over (0, 1]; it maps onto the encoder's 1-100 scale.
/// Fails with a decode error when the bytes are not a valid raster image.
pub fn compress_to_jpeg(data: &[u8], quality: f32) -> Result<Vec<u8>> {
    if !(quality > 0.0 && quality <= 1.0) {
        return Err(ConvertError::Config(format!(
            "JPEG quality must be in (0, 1], got {quality}"
        )));
    }

    let decoded =
        image::load_from_memory(data).map_err(|e| ConvertError::Decode(e.to_string()))?;
    let flattened = flatten_onto_white(decoded);

    let quality = (quality * 100.0).round().clamp(1.0, 100.0) as u8;
    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    if flattened.color().has_color() {
        flattened.into_rgb8().write_with_encoder(encoder)?;
    } else {
        flattened.into_luma8().write_with_encoder(encoder)?;
    }

    Ok(buffer.into_inner())
}

/// Blend any alpha channel onto a white background, leaving opaque images
/// untouched. Color stays RGB, grayscale stays grayscale.
pub(crate) fn flatten_onto_white(image: DynamicImage) -> DynamicImage {
    if !image.color().has_alpha() {
        return image;
    }

    if image.color().has_color() {
        let rgba = image.into_rgba8();
        let (width, height) = rgba.dimensions();
        let mut rgb = RgbImage::new(width, height);
        for (source, target) in rgba.pixels().zip(rgb.pixels_mut()) {
            let alpha = source[3] as f32 / 255.0;
            target.0 = [
                blend_white(source[0], alpha),
                blend_white(source[1], alpha),
                blend_white(source[2], alpha),
            ];
        }
        DynamicImage::ImageRgb8(rgb)
    } else {
        let la = image.into_luma_alpha8();
        let (width, height) = la.dimensions();
        let mut gray = GrayImage::new(width, height);
        for (source, target) in la.pixels().zip(gray.pixels_mut()) {
            let alpha = source[1] as f32 / 255.0;
            target.0 = [blend_white(source[0], alpha)];
        }
        DynamicImage::ImageLuma8(gray)
    }
}

fn blend_white(value: u8, alpha: f32) -> u8 {
    (value as f32 * alpha + 255.0 * (1.0 - alpha)) as u8
}
