use std::io;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Installs a stderr `fmt` subscriber; `RUST_LOG` directives apply on top of an `info` default.
pub fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
