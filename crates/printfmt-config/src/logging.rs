//! Opt-in log output for tools embedding the resolver.
//!
//! The resolver only emits `debug`/`trace` events; nothing is printed unless
//! the host installs a subscriber, either its own or the one from [`init`].

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable consulted first for the log filter.
pub const LOG_ENV: &str = "PRINTFMT_LOG";

/// Filter used when neither `PRINTFMT_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a compact stderr subscriber.
///
/// The filter comes from `PRINTFMT_LOG`, then `RUST_LOG`, then
/// [`DEFAULT_FILTER`]. Fails if a global subscriber is already set.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(filter_from_env()?)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

fn filter_from_env() -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
}
