//! Shared pieces of the `reveal` and `weather` binaries:
//! - Terminal raster rendering for decoded grids
//! - Human-friendly output formatting for weather reports and errors

pub mod render;
pub mod report;

use tracing_subscriber::EnvFilter;

/// Install the tracing subscriber. Diagnostics go to stderr so stdout stays
/// reserved for the tools' actual output; enable with `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
