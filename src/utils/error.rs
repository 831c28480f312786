//! Error types for the recompression pipeline.
//!
//! Provides the failure taxonomy using `thiserror` for ergonomic error handling.

use serde::Serialize;
use thiserror::Error;

/// Main error type for the recompressor.
///
/// The `Decode`/`Encode`/`Write` variants correspond to the three pipeline
/// steps that can fail; each maps to a stable reason code via [`reason`]
/// that the host renders in its status area.
///
/// [`reason`]: RecompressError::reason
#[derive(Error, Debug, Serialize)]
pub enum RecompressError {
    /// Input could not be read or decoded into a raster image
    #[error("Decode error: {0}")]
    Decode(String),

    /// The JPEG encoder rejected the raster or its parameters
    #[error("Encode error: {0}")]
    Encode(String),

    /// The encoded buffer could not be written to the output path
    #[error("Write error: {0}")]
    Write(String),

    /// A compression is already in flight on this engine
    #[error("a compression is already running")]
    Busy,

    /// The blocking pipeline task panicked or was cancelled
    #[error("Pipeline task failed: {0}")]
    Task(String),
}

/// Convenience result type for recompressor operations.
pub type RecompressResult<T> = Result<T, RecompressError>;

// Helper methods for error creation
impl RecompressError {
    pub fn decode<T: Into<String>>(msg: T) -> Self {
        Self::Decode(msg.into())
    }

    pub fn encode<T: Into<String>>(msg: T) -> Self {
        Self::Encode(msg.into())
    }

    pub fn write<T: Into<String>>(msg: T) -> Self {
        Self::Write(msg.into())
    }

    /// Stable short code for the host status area.
    ///
    /// The host shows these verbatim; the full message goes to the logs only.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Decode(_) => "decode-failed",
            Self::Encode(_) => "encode-failed",
            Self::Write(_) => "write-failed",
            Self::Busy => "busy",
            Self::Task(_) => "task-failed",
        }
    }

    /// True for failures of the pipeline itself, as opposed to engine-level
    /// conditions (`Busy`, `Task`) that never started or never finished a request.
    pub fn is_pipeline_failure(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::Encode(_) | Self::Write(_))
    }
}
