//! Tracing subscriber setup shared by embedding hosts and tests.

use tracing_subscriber::EnvFilter;

/// Installs the compact stdout subscriber.
///
/// Log level comes from `RUST_LOG` when set, defaulting to `info`. Calling
/// this more than once is harmless; later calls leave the first subscriber
/// in place.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_ansi(true)          // Keep colored output
        .with_writer(std::io::stdout)
        .compact()                // Use compact formatter instead of pretty
        .try_init();
}
