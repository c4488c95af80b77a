//! Process-wide setup shared by the binary and tests
//!
//! - File logging under the data directory
//! - Panic and eyre hooks that restore the terminal first
//! - Config/data directory resolution and the `--version` text

pub mod logging;
pub mod panic;
pub mod paths;

pub use logging::initialize_logging;
pub use panic::initialize_panic_handler;
pub use paths::{get_config_dir, get_data_dir, version};
