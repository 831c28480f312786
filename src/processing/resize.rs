//! Quality-driven spatial scaling.
//!
//! The quality slider conflates compression quality and spatial scale: the
//! same `quality/100` factor shrinks both dimensions before encoding. That
//! coupling is deliberate; see DESIGN.md for the open question around it.

use image::imageops::{self, FilterType};
use image::RgbImage;

/// Output dimensions for a `width` x `height` raster scaled by `scale`.
///
/// Each dimension is `round(original * scale)`, clamped to at least one
/// pixel so a 0% request still yields something the encoder can write.
pub fn target_dimensions(width: u32, height: u32, scale: f64) -> (u32, u32) {
    let w = ((width as f64 * scale).round() as u32).max(1);
    let h = ((height as f64 * scale).round() as u32).max(1);
    (w, h)
}

/// Resamples `image` to the exact target size for `scale`.
///
/// Returns the image unchanged when the target equals the current size
/// (quality 100), skipping a full-resolution resample pass.
pub fn scale_to(image: RgbImage, scale: f64, filter: FilterType) -> RgbImage {
    let (width, height) = (image.width(), image.height());
    let (target_w, target_h) = target_dimensions(width, height, scale);

    if (target_w, target_h) == (width, height) {
        return image;
    }

    imageops::resize(&image, target_w, target_h, filter)
}
