//! Core types for recompression requests and results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::{format_from_path, RecompressError, RecompressResult};

/// User-facing quality percentage, clamped to 0-100 on construction.
///
/// One slider value drives two codec inputs, and keeping them on a single
/// type makes the coupling explicit:
/// - [`scale_factor`]: the spatial scale applied to both image dimensions,
/// - [`encoder_quality`]: the lossy compression-quality parameter handed to
///   the JPEG encoder (its scale starts at 1, so 0 is floored).
///
/// [`scale_factor`]: QualityPercent::scale_factor
/// [`encoder_quality`]: QualityPercent::encoder_quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct QualityPercent(u8);

impl QualityPercent {
    /// Creates a quality value, clamping anything above 100 down to 100.
    pub fn new(percent: u8) -> Self {
        Self(percent.min(100))
    }

    /// The raw slider value (0-100).
    pub fn get(&self) -> u8 {
        self.0
    }

    /// Spatial scale factor applied to the raster's width and height.
    pub fn scale_factor(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Compression-quality parameter for the JPEG encoder (1-100).
    ///
    /// The encoder's scale has no 0; a 0% request still encodes at the
    /// lowest quality instead of being rejected.
    pub fn encoder_quality(&self) -> u8 {
        self.0.max(1)
    }
}

impl Default for QualityPercent {
    fn default() -> Self {
        Self(80)
    }
}

impl From<u8> for QualityPercent {
    fn from(percent: u8) -> Self {
        Self::new(percent)
    }
}

impl From<QualityPercent> for u8 {
    fn from(quality: QualityPercent) -> u8 {
        quality.0
    }
}

/// A single recompression request.
///
/// Created per user action, immutable once compression starts, discarded
/// after the operation completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionRequest {
    /// Path to the source image file
    pub input_path: PathBuf,
    /// Path the recompressed JPEG will be written to
    pub output_path: PathBuf,
    /// Quality percentage driving both scale and encoder quality
    pub quality: QualityPercent,
}

impl CompressionRequest {
    pub fn new(
        input_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        quality: QualityPercent,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            quality,
        }
    }

    /// Checks the input half of the request before any pixel work starts.
    ///
    /// The output side is deliberately not pre-checked: the parent directory
    /// may not exist yet (the write step creates it), and write errors are
    /// reported from the write step itself.
    pub(crate) async fn validate(&self) -> RecompressResult<()> {
        let meta = tokio::fs::metadata(&self.input_path).await.map_err(|e| {
            RecompressError::decode(format!(
                "Input file does not exist or is unreadable: {} ({e})",
                self.input_path.display()
            ))
        })?;

        if !meta.is_file() {
            return Err(RecompressError::decode(format!(
                "Input path is not a file: {}",
                self.input_path.display()
            )));
        }

        // Same gate as the open dialog's filter: JPEG and PNG only
        format_from_path(&self.input_path)?;
        Ok(())
    }
}

/// Result of one recompression request.
///
/// Contains the before/after file information the host renders.
/// [`output_bytes`] always equals the size of the file on disk when
/// `succeeded` is true.
///
/// [`output_bytes`]: CompressionResult::output_bytes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionResult {
    /// Path to the original input file
    pub input_path: PathBuf,
    /// Path the output was (or would have been) written to
    pub output_path: PathBuf,
    /// Input file size in bytes
    pub input_bytes: u64,
    /// Output file size in bytes (0 when the request failed)
    pub output_bytes: u64,
    /// Whether the recompression succeeded
    pub succeeded: bool,
    /// Stable reason code when it did not ("decode-failed", "encode-failed",
    /// "write-failed")
    pub failure_reason: Option<String>,
    /// Bytes saved (negative if the file grew)
    pub saved_bytes: i64,
    /// Savings as a percentage of the input size
    pub compression_ratio: f64,
}

impl CompressionResult {
    /// Builds the success result once the output file is on disk.
    pub(crate) fn completed(
        request: &CompressionRequest,
        input_bytes: u64,
        output_bytes: u64,
    ) -> Self {
        let saved_bytes = input_bytes as i64 - output_bytes as i64;
        let compression_ratio = if input_bytes > 0 {
            saved_bytes as f64 / input_bytes as f64 * 100.0
        } else {
            0.0
        };

        Self {
            input_path: request.input_path.clone(),
            output_path: request.output_path.clone(),
            input_bytes,
            output_bytes,
            succeeded: true,
            failure_reason: None,
            saved_bytes,
            compression_ratio,
        }
    }

    /// Builds the failed result carrying the error's reason code.
    ///
    /// The input size is still reported when the file is statable so the
    /// host can keep showing the "before" number next to the failure.
    pub(crate) fn failed(request: &CompressionRequest, error: &RecompressError) -> Self {
        Self {
            input_path: request.input_path.clone(),
            output_path: request.output_path.clone(),
            input_bytes: std::fs::metadata(&request.input_path)
                .map(|m| m.len())
                .unwrap_or(0),
            output_bytes: 0,
            succeeded: false,
            failure_reason: Some(error.reason().to_string()),
            saved_bytes: 0,
            compression_ratio: 0.0,
        }
    }
}
