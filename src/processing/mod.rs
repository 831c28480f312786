//! Image recompression pipeline.
//!
//! # Architecture
//!
//! - [`Recompressor`]: async engine, one compression in flight at a time.
//! - `pipeline`: the blocking decode → resize → encode → write sequence.
//! - `resize`: maps the quality factor to exact output dimensions.
//! - `encode`: alpha flattening and JPEG encoding to an in-memory buffer.

mod encode;
mod engine;
mod pipeline;
mod resize;

pub use engine::{Recompressor, RecompressorConfig};
