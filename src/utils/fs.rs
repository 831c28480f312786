use std::path::Path;
use tokio::fs;
use crate::utils::{RecompressError, RecompressResult};

/// Get file size in bytes
pub async fn file_size(path: impl AsRef<Path>) -> RecompressResult<u64> {
    fs::metadata(path.as_ref())
        .await
        .map(|m| m.len())
        .map_err(|e| {
            RecompressError::decode(format!(
                "Failed to get file size for {}: {e}",
                path.as_ref().display()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_size_of_missing_file() {
        let err = file_size("definitely/not/here.png").await.unwrap_err();
        assert_eq!(err.reason(), "decode-failed");
    }

    #[tokio::test]
    async fn test_file_size_matches_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("five.bin");
        std::fs::write(&path, b"12345").unwrap();
        assert_eq!(file_size(&path).await.unwrap(), 5);
    }
}
