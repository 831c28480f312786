//! Async engine driving one compression at a time.
//!
//! Raster work runs inside `tokio::task::spawn_blocking` so the runtime
//! stays responsive while a compression is in flight; the returned future
//! resolves only after the write step fully completed or failed, which is
//! the ordering the host relies on for its status line.

use std::sync::Arc;

use image::imageops::FilterType;
use tokio::sync::{Mutex, Semaphore};
use tracing::{debug, warn};

use crate::core::{CompressionRequest, CompressionResult, JobState};
use crate::utils::{RecompressError, RecompressResult};

use super::pipeline::recompress_file;

/// Processing knobs with in-code defaults.
///
/// The utility persists no settings across runs, so this is the whole
/// configuration surface.
#[derive(Debug, Clone)]
pub struct RecompressorConfig {
    /// Resampling filter for the quality-driven rescale
    pub filter: FilterType,
    /// Background color alpha is flattened against before JPEG encoding
    pub background: [u8; 3],
}

impl Default for RecompressorConfig {
    fn default() -> Self {
        Self {
            filter: FilterType::Triangle,
            background: [255, 255, 255],
        }
    }
}

/// Engine that recompresses one image per call, one call at a time.
///
/// Clones share the same slot and state, so a host can hand clones to
/// spawned tasks and still get the single-flight guarantee.
#[derive(Clone)]
pub struct Recompressor {
    config: RecompressorConfig,
    /// Single permit: at most one compression in flight per engine
    slot: Arc<Semaphore>,
    state: Arc<Mutex<JobState>>,
}

impl Recompressor {
    pub fn new() -> Self {
        Self::with_config(RecompressorConfig::default())
    }

    pub fn with_config(config: RecompressorConfig) -> Self {
        Self {
            config,
            slot: Arc::new(Semaphore::new(1)),
            state: Arc::new(Mutex::new(JobState::Idle)),
        }
    }

    /// Current lifecycle state of the engine's compression slot.
    ///
    /// Only updated after a request reaches a terminal step, never from
    /// inside the pipeline.
    pub async fn state(&self) -> JobState {
        *self.state.lock().await
    }

    /// Recompresses `request.input_path` to a JPEG at `request.output_path`.
    ///
    /// Fails fast with [`RecompressError::Busy`] when a compression is
    /// already in flight, leaving that job undisturbed. Pipeline failures
    /// (decode/encode/write) come back as an `Ok` result with
    /// `succeeded == false` and the reason code set, so the caller always
    /// gets one report per attempt; only engine-level conditions surface
    /// as `Err`.
    pub async fn compress(
        &self,
        request: CompressionRequest,
    ) -> RecompressResult<CompressionResult> {
        let _permit = self
            .slot
            .try_acquire()
            .map_err(|_| RecompressError::Busy)?;

        *self.state.lock().await = JobState::Running;
        debug!(
            "Compression started: {} → {} at quality {}",
            request.input_path.display(),
            request.output_path.display(),
            request.quality.get()
        );

        let outcome = match request.validate().await {
            Ok(()) => {
                let task = request.clone();
                let config = self.config.clone();
                match tokio::task::spawn_blocking(move || recompress_file(&task, &config)).await {
                    Ok(result) => result,
                    Err(e) => Err(RecompressError::Task(format!("Task panicked: {e}"))),
                }
            }
            Err(e) => Err(e),
        };

        match outcome {
            Ok(result) => {
                *self.state.lock().await = JobState::Done;
                debug!(
                    "Compression finished: {} bytes written to {}",
                    result.output_bytes,
                    result.output_path.display()
                );
                Ok(result)
            }
            Err(e) if e.is_pipeline_failure() => {
                warn!(
                    "Compression failed for {}: {e}",
                    request.input_path.display()
                );
                *self.state.lock().await = JobState::Failed;
                Ok(CompressionResult::failed(&request, &e))
            }
            Err(e) => {
                warn!("Compression task error: {e}");
                *self.state.lock().await = JobState::Failed;
                Err(e)
            }
        }
    }
}

impl Default for Recompressor {
    fn default() -> Self {
        Self::new()
    }
}
