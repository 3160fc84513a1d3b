//! rollavg — a small desktop applet that feeds synthetic number sequences
//! through a sliding window and displays their rolling average.
//!
//! Run with:  `RUST_LOG=info rollavg`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("rollavg v{} starting", env!("CARGO_PKG_VERSION"));

    rollavg_ui::run().map_err(Into::into)
}
