//! Tracing bootstrap for the gateway.

use bookgate_kernel::settings::{LogFormat, TelemetrySettings};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing/logging pipeline according to settings.
///
/// `RUST_LOG` overrides the default `info` filter. Safe to call once; a
/// second call fails because a global subscriber is already installed.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match settings.log_format {
        LogFormat::Pretty => builder
            .try_init()
            .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))?,
        LogFormat::Json => builder
            .json()
            .try_init()
            .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))?,
    }

    Ok(())
}
