//! Core request/result types and job state.
//!
//! This module contains the fundamental types used throughout the crate:
//! - [`CompressionRequest`]: One user-triggered recompression
//! - [`CompressionResult`]: Before/after report the host renders
//! - [`QualityPercent`]: The slider value and the two codec inputs it drives
//! - [`JobState`]: Caller-held lifecycle of the compression slot

mod state;
mod types;

pub use state::JobState;
pub use types::{CompressionRequest, CompressionResult, QualityPercent};
