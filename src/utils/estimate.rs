//! Approximate output-size estimate for the quality slider.

use crate::core::QualityPercent;

/// Estimates the output byte size as `input_bytes * quality / 100`.
///
/// This is the deliberately rough linear heuristic the utility shows while
/// the slider moves, not a compression model: real JPEG output size is
/// nonlinear in quality and depends on image content. No accuracy is
/// guaranteed beyond "exact at 100, zero at 0, monotone in between".
pub fn estimate_output_bytes(input_bytes: u64, quality: QualityPercent) -> u64 {
    (input_bytes as f64 * quality.scale_factor()).round() as u64
}
