//! Explicit log subscriber installation.
//!
//! Library code only emits `tracing` events. Binaries (or hosts without a
//! subscriber of their own) call [`init`] once at startup; nothing is
//! installed implicitly when the crate is loaded.

use std::io::IsTerminal;

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a global `fmt` subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_directive` when set.
pub fn init(default_directive: &str) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .try_init()
}
