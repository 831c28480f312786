//! Integration seams for the embedding desktop shell.
//!
//! The GUI layer stays outside this crate; what it needs from us is the
//! [`HostDialogs`] contract to implement and [`run_once`] to call from its
//! trigger control.

mod dialogs;
mod session;

pub use dialogs::{HostDialogs, DEFAULT_OUTPUT_NAME, INPUT_EXTENSIONS, OUTPUT_EXTENSION};
pub use session::run_once;
