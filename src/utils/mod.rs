pub mod error;
pub mod estimate;
pub mod formats;
pub mod fs;
pub mod logging;

pub use error::{RecompressError, RecompressResult};
pub use estimate::estimate_output_bytes;
pub use formats::{InputFormat, format_from_path};
pub use fs::file_size;
