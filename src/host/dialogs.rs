//! Native dialog and shell-integration contracts.
//!
//! The desktop shell owns the actual file pickers and the file-manager
//! integration; this module fixes the contracts the session consumes. Each
//! is trivial: a picker either returns a path or the user cancelled, and
//! reveal has no observable result.

use std::path::{Path, PathBuf};

/// Extensions the open-file dialog filter offers.
pub const INPUT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Extension the save-file dialog filter enforces.
pub const OUTPUT_EXTENSION: &str = "jpg";

/// Filename pre-filled in the save dialog.
pub const DEFAULT_OUTPUT_NAME: &str = "compressed_image.jpg";

/// Contracts the host shell implements with its native dialogs.
pub trait HostDialogs: Send + Sync {
    /// Open-file dialog restricted to [`INPUT_EXTENSIONS`], single
    /// selection. `None` means the user cancelled.
    fn pick_input_file(&self) -> Option<PathBuf>;

    /// Save-file dialog restricted to JPEG output, pre-filled with
    /// `suggested_name`. `None` means the user cancelled.
    fn pick_output_file(&self, suggested_name: &str) -> Option<PathBuf>;

    /// Reveals `path` in the OS file manager. Best effort; no return value
    /// is consumed.
    fn reveal_in_file_manager(&self, path: &Path);
}
