//! Quality-driven JPEG recompression core for a desktop image utility.
//!
//! The embedding shell supplies the window, the native dialogs, and the
//! reveal-in-file-manager call; this crate supplies everything between the
//! button press and the bytes on disk.

// Module declarations in dependency order
pub mod core;
pub mod host;
pub mod processing;
pub mod utils;

// Public exports for external consumers
pub use crate::core::{CompressionRequest, CompressionResult, JobState, QualityPercent};
pub use crate::host::{run_once, HostDialogs, DEFAULT_OUTPUT_NAME};
pub use crate::processing::{Recompressor, RecompressorConfig};
pub use crate::utils::{estimate_output_bytes, RecompressError, RecompressResult};
