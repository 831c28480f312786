//! End-to-end recompression scenarios against real files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use image_recompressor::{CompressionRequest, QualityPercent, Recompressor};
use tempfile::tempdir;

/// Checkerboard with gradients: enough detail that the encoder's byte
/// count responds to quality changes.
fn detailed_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        if (x / 8 + y / 8) % 2 == 0 {
            Rgb([250, 240, 230])
        } else {
            Rgb([(x * 7 % 256) as u8, (y * 5 % 256) as u8, 40])
        }
    })
}

fn write_png(path: &Path, image: &RgbImage) -> Result<()> {
    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

async fn compress(
    input: &Path,
    output: &Path,
    quality: u8,
) -> Result<image_recompressor::CompressionResult> {
    let engine = Recompressor::new();
    let request = CompressionRequest::new(input, output, QualityPercent::new(quality));
    Ok(engine.compress(request).await?)
}

#[tokio::test]
async fn png_at_half_quality_halves_dimensions() -> Result<()> {
    image_recompressor::utils::logging::init();

    let dir = tempdir()?;
    let input = dir.path().join("photo.png");
    write_png(&input, &detailed_rgb(1000, 800))?;
    let output = dir.path().join("compressed_image.jpg");

    let result = compress(&input, &output, 50).await?;

    assert!(result.succeeded, "reason: {:?}", result.failure_reason);
    assert!(result.output_bytes > 0);
    assert_eq!(result.output_bytes, fs::metadata(&output)?.len());
    assert_eq!(image::image_dimensions(&output)?, (500, 400));
    assert_eq!(
        image::guess_format(&fs::read(&output)?)?,
        image::ImageFormat::Jpeg
    );
    Ok(())
}

#[tokio::test]
async fn full_quality_keeps_dimensions() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("photo.png");
    write_png(&input, &detailed_rgb(320, 200))?;
    let output = dir.path().join("out.jpg");

    let result = compress(&input, &output, 100).await?;

    assert!(result.succeeded);
    assert_eq!(image::image_dimensions(&output)?, (320, 200));
    Ok(())
}

#[tokio::test]
async fn zero_quality_writes_a_one_pixel_jpeg() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("photo.png");
    write_png(&input, &detailed_rgb(640, 480))?;
    let output = dir.path().join("out.jpg");

    let result = compress(&input, &output, 0).await?;

    assert!(result.succeeded);
    assert!(result.output_bytes > 0, "never a zero-byte file");
    assert_eq!(image::image_dimensions(&output)?, (1, 1));
    Ok(())
}

#[tokio::test]
async fn jpeg_input_recompresses() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("photo.jpg");
    detailed_rgb(200, 100).save_with_format(&input, image::ImageFormat::Jpeg)?;
    let output = dir.path().join("out.jpg");

    let result = compress(&input, &output, 40).await?;

    assert!(result.succeeded);
    assert_eq!(image::image_dimensions(&output)?, (80, 40));
    Ok(())
}

#[tokio::test]
async fn alpha_png_flattens_to_white() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("transparent.png");
    RgbaImage::from_pixel(100, 100, Rgba([0, 0, 0, 0]))
        .save_with_format(&input, image::ImageFormat::Png)?;
    let output = dir.path().join("out.jpg");

    let result = compress(&input, &output, 100).await?;
    assert!(result.succeeded);

    let decoded = image::open(&output)?.to_rgb8();
    let pixel = decoded.get_pixel(50, 50);
    for channel in 0..3 {
        assert!(
            pixel.0[channel] >= 240,
            "expected near-white after flattening, got {:?}",
            pixel
        );
    }
    Ok(())
}

#[tokio::test]
async fn same_request_twice_is_byte_identical() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("photo.png");
    write_png(&input, &detailed_rgb(400, 300))?;
    let first = dir.path().join("first.jpg");
    let second = dir.path().join("second.jpg");

    assert!(compress(&input, &first, 65).await?.succeeded);
    assert!(compress(&input, &second, 65).await?.succeeded);

    assert_eq!(fs::read(&first)?, fs::read(&second)?);
    Ok(())
}

#[tokio::test]
async fn higher_quality_spends_more_bytes() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("photo.png");
    write_png(&input, &detailed_rgb(400, 400))?;
    let low = dir.path().join("low.jpg");
    let high = dir.path().join("high.jpg");

    let low_bytes = compress(&input, &low, 20).await?.output_bytes;
    let high_bytes = compress(&input, &high, 80).await?.output_bytes;

    assert!(
        high_bytes > low_bytes,
        "quality 80 produced {high_bytes} bytes vs {low_bytes} at quality 20"
    );
    Ok(())
}

#[tokio::test]
async fn missing_input_reports_decode_failure() -> Result<()> {
    let dir = tempdir()?;
    let input: PathBuf = dir.path().join("does_not_exist.png");
    let output = dir.path().join("out.jpg");

    let result = compress(&input, &output, 50).await?;

    assert!(!result.succeeded);
    assert_eq!(result.failure_reason.as_deref(), Some("decode-failed"));
    assert_eq!(result.output_bytes, 0);
    assert!(!output.exists());
    Ok(())
}

#[tokio::test]
async fn unwritable_output_parent_reports_write_failure() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("photo.png");
    write_png(&input, &detailed_rgb(50, 50))?;

    // A plain file where the output's parent directory should be
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, b"in the way")?;
    let output = blocker.join("out.jpg");

    let result = compress(&input, &output, 50).await?;

    assert!(!result.succeeded);
    assert_eq!(result.failure_reason.as_deref(), Some("write-failed"));
    Ok(())
}

#[tokio::test]
async fn saved_bytes_matches_size_difference() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("photo.png");
    write_png(&input, &detailed_rgb(300, 300))?;
    let output = dir.path().join("out.jpg");

    let result = compress(&input, &output, 30).await?;

    assert!(result.succeeded);
    assert_eq!(result.input_bytes, fs::metadata(&input)?.len());
    assert_eq!(
        result.saved_bytes,
        result.input_bytes as i64 - result.output_bytes as i64
    );
    Ok(())
}
