//! One-shot pick → compress → reveal flow.

use tracing::{debug, info};

use crate::core::{CompressionRequest, CompressionResult, QualityPercent};
use crate::processing::Recompressor;
use crate::utils::{estimate_output_bytes, file_size, RecompressResult};

use super::dialogs::{HostDialogs, DEFAULT_OUTPUT_NAME};

/// Drives one user-triggered compression round-trip.
///
/// This is the flow behind the utility's single button: ask for an input,
/// ask for a destination, compress, and reveal the written file on success.
/// Cancelling either dialog ends the flow with `Ok(None)` and nothing
/// touched on disk. Failures inside the pipeline still produce a result
/// (with `succeeded == false`) for the host's status area.
pub async fn run_once<D: HostDialogs>(
    dialogs: &D,
    engine: &Recompressor,
    quality: QualityPercent,
) -> RecompressResult<Option<CompressionResult>> {
    let Some(input_path) = dialogs.pick_input_file() else {
        debug!("Input selection cancelled");
        return Ok(None);
    };

    // Best-effort estimate for the status line; stat failures surface later
    // as a decode failure with a proper reason
    if let Ok(input_bytes) = file_size(&input_path).await {
        debug!(
            "Selected '{}' ({input_bytes} bytes, ~{} bytes at {}%)",
            input_path.display(),
            estimate_output_bytes(input_bytes, quality),
            quality.get()
        );
    }

    let Some(output_path) = dialogs.pick_output_file(DEFAULT_OUTPUT_NAME) else {
        debug!("Output selection cancelled");
        return Ok(None);
    };

    let request = CompressionRequest::new(input_path, output_path, quality);
    let result = engine.compress(request).await?;

    if result.succeeded {
        info!(
            "Compressed {} → {} ({} of {} bytes)",
            result.input_path.display(),
            result.output_path.display(),
            result.output_bytes,
            result.input_bytes
        );
        dialogs.reveal_in_file_manager(&result.output_path);
    }

    Ok(Some(result))
}
