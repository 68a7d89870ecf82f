pub mod catalog;
pub mod config;
pub mod error;
pub mod frame;
pub mod pricing;
pub mod render;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// RUST_LOG wins over `default_level`. Logs go to stderr so table and JSON
/// output on stdout stay clean. Can only be called once.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
