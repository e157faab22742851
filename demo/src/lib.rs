pub mod failure;
pub mod links;
pub mod output;
pub mod params;
pub mod payloads;
pub mod workflow;

use std::env;

/// Log filter comes from `RUST_LOG`, `info` by default. Logs go to stderr so
/// the report on stdout stays clean.
pub fn init_tracing() {
    let filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
