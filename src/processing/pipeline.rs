//! The blocking decode → resize → encode → write sequence for one request.

use std::fs;
use tracing::debug;

use crate::core::{CompressionRequest, CompressionResult};
use crate::utils::{RecompressError, RecompressResult};

use super::encode::{encode_jpeg, flatten_to_rgb};
use super::engine::RecompressorConfig;
use super::resize::scale_to;

/// Runs one request to completion synchronously.
///
/// Called on the blocking thread pool so codec work never stalls the async
/// runtime. Each failing step maps to its reason code: reading or decoding
/// the input is decode-failed, the encoder is encode-failed, and everything
/// that touches the output path is write-failed. Exactly one file is
/// created or overwritten on success; a failure before the write step
/// leaves the filesystem untouched.
pub(crate) fn recompress_file(
    request: &CompressionRequest,
    config: &RecompressorConfig,
) -> RecompressResult<CompressionResult> {
    let input_path = &request.input_path;

    // Original size before any transformation
    let input_bytes = fs::metadata(input_path)
        .map(|m| m.len())
        .map_err(|e| {
            RecompressError::decode(format!("Cannot read input file {}: {e}", input_path.display()))
        })?;

    // Decoding
    let image = image::open(input_path).map_err(|e| {
        RecompressError::decode(format!("Failed to decode '{}': {e}", input_path.display()))
    })?;
    let rgb = flatten_to_rgb(&image, config.background);
    debug!("Decoded '{}': {}×{}", input_path.display(), rgb.width(), rgb.height());

    // Resizing: the quality factor drives the spatial scale as well as the
    // encoder quality
    let scaled = scale_to(rgb, request.quality.scale_factor(), config.filter);
    debug!("Scaled to {}×{}", scaled.width(), scaled.height());

    // Encoding, into a complete in-memory buffer before any write begins
    let encoded = encode_jpeg(&scaled, request.quality.encoder_quality())?;

    // Writing
    if let Some(parent) = request.output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                RecompressError::write(format!(
                    "Cannot create output directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }
    fs::write(&request.output_path, &encoded).map_err(|e| {
        RecompressError::write(format!(
            "Failed to write '{}': {e}",
            request.output_path.display()
        ))
    })?;

    // Report the size actually on disk, not the buffer length
    let output_bytes = fs::metadata(&request.output_path)
        .map(|m| m.len())
        .map_err(|e| {
            RecompressError::write(format!(
                "Cannot stat '{}' after write: {e}",
                request.output_path.display()
            ))
        })?;

    let result = CompressionResult::completed(request, input_bytes, output_bytes);
    debug!(
        "'{}' → {} bytes saved ({:.1}%)",
        input_path.display(),
        result.saved_bytes,
        result.compression_ratio
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::QualityPercent;
    use image::{Rgb, RgbImage};

    fn png_fixture(dir: &std::path::Path, width: u32, height: u32) -> std::path::PathBuf {
        let path = dir.join("fixture.png");
        let image = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        image
            .save_with_format(&path, image::ImageFormat::Png)
            .unwrap();
        path
    }

    #[test]
    fn test_recompress_reports_disk_size() {
        let dir = tempfile::tempdir().unwrap();
        let input = png_fixture(dir.path(), 64, 48);
        let output = dir.path().join("out.jpg");

        let request = CompressionRequest::new(&input, &output, QualityPercent::new(50));
        let result = recompress_file(&request, &RecompressorConfig::default()).unwrap();

        assert!(result.succeeded);
        assert_eq!(result.output_bytes, fs::metadata(&output).unwrap().len());
        assert_eq!(result.input_bytes, fs::metadata(&input).unwrap().len());
        assert_eq!(
            result.saved_bytes,
            result.input_bytes as i64 - result.output_bytes as i64
        );
    }

    #[test]
    fn test_recompress_creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let input = png_fixture(dir.path(), 32, 32);
        let output = dir.path().join("nested/deeper/out.jpg");

        let request = CompressionRequest::new(&input, &output, QualityPercent::new(80));
        let result = recompress_file(&request, &RecompressorConfig::default()).unwrap();

        assert!(result.succeeded);
        assert!(output.exists());
    }

    #[test]
    fn test_recompress_overwrites_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = png_fixture(dir.path(), 32, 32);
        let output = dir.path().join("out.jpg");
        fs::write(&output, b"stale contents").unwrap();

        let request = CompressionRequest::new(&input, &output, QualityPercent::new(80));
        let result = recompress_file(&request, &RecompressorConfig::default()).unwrap();

        assert!(result.succeeded);
        assert_ne!(fs::read(&output).unwrap(), b"stale contents");
    }

    #[test]
    fn test_corrupt_input_is_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.png");
        fs::write(&input, b"not a png at all").unwrap();

        let request = CompressionRequest::new(
            &input,
            dir.path().join("out.jpg"),
            QualityPercent::new(50),
        );
        let err = recompress_file(&request, &RecompressorConfig::default()).unwrap_err();
        assert_eq!(err.reason(), "decode-failed");
    }

    #[test]
    fn test_failure_before_write_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.png");
        fs::write(&input, b"garbage").unwrap();
        let output = dir.path().join("out.jpg");

        let request = CompressionRequest::new(&input, &output, QualityPercent::new(50));
        let _ = recompress_file(&request, &RecompressorConfig::default());
        assert!(!output.exists());
    }
}
