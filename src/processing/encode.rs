//! Alpha flattening and JPEG encoding.

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbImage};

use crate::utils::{RecompressError, RecompressResult};

/// Flattens `image` to 8-bit RGB, compositing any alpha channel over
/// `background`.
///
/// JPEG has no alpha channel. Transparent regions blend toward the
/// configured background color (white in the default config) instead of
/// leaking whatever RGB values sat under zero-alpha pixels.
pub fn flatten_to_rgb(image: &DynamicImage, background: [u8; 3]) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    let mut rgb = RgbImage::new(rgba.width(), rgba.height());

    for (dst, src) in rgb.pixels_mut().zip(rgba.pixels()) {
        let alpha = src.0[3] as u32;
        for channel in 0..3 {
            let fg = src.0[channel] as u32;
            let bg = background[channel] as u32;
            // Integer alpha blend with rounding
            dst.0[channel] = ((fg * alpha + bg * (255 - alpha) + 127) / 255) as u8;
        }
    }

    rgb
}

/// Encodes `image` as JPEG at `quality` (1-100) into an in-memory buffer.
///
/// The buffer is complete before the caller writes anything to disk, so a
/// failed run never leaves partial output behind.
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> RecompressResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    encoder
        .encode(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ColorType::Rgb8,
        )
        .map_err(|e| RecompressError::encode(format!("JPEG encoding failed: {e}")))?;

    Ok(buffer)
}
