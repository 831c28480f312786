use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use crate::utils::{RecompressError, RecompressResult};

/// Raster formats the open-file dialog offers.
///
/// Output is always JPEG, so only the input side needs a format table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Jpeg,
    Png,
}

impl FromStr for InputFormat {
    type Err = RecompressError;

    fn from_str(ext: &str) -> Result<Self, Self::Err> {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            other => Err(RecompressError::decode(format!(
                "Unsupported image format: {other}"
            ))),
        }
    }
}

/// Get the input format from a file extension.
///
/// An unrecognised or missing extension is a decode-class failure: the file
/// never reaches the codec.
pub fn format_from_path(path: &Path) -> RecompressResult<InputFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| {
            RecompressError::decode(format!("File has no extension: {}", path.display()))
        })?;

    ext.parse()
}
