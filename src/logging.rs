//! Logging setup for the quillview binary.
//!
//! Events go to stderr so they never mix with rendered output on stdout.
//!
//! ## Environment Variables
//!
//! 1. **`QUILLVIEW_LOG`** (highest priority) - quillview-specific logging control
//! 2. **`RUST_LOG`** - Standard tracing environment variable
//! 3. **Default** - `warn`, or `debug` for quillview with `--verbose`

use std::env;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize logging.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(verbose: bool) {
    let filter = create_filter(verbose);
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Initialize logging for tests.
pub fn test() {
    let _ = fmt()
        .with_env_filter(create_filter(true))
        .with_test_writer()
        .try_init();
}

/// Create the [`EnvFilter`]: `QUILLVIEW_LOG` > `RUST_LOG` > defaults.
fn create_filter(verbose: bool) -> EnvFilter {
    if let Ok(level) = env::var("QUILLVIEW_LOG") {
        return expand_quillview_log(&level);
    }

    if let Ok(rust_log) = env::var("RUST_LOG") {
        return EnvFilter::new(rust_log);
    }

    if verbose {
        EnvFilter::new("warn,quillview=debug")
    } else {
        EnvFilter::new("warn")
    }
}

/// `QUILLVIEW_LOG=debug` becomes `warn,quillview=debug`; anything with
/// directive syntax is used as-is.
fn expand_quillview_log(level: &str) -> EnvFilter {
    if level.contains('=') || level.contains(',') {
        return EnvFilter::new(level);
    }
    EnvFilter::new(format!("warn,quillview={level}"))
}
