//! Telemetry initialization and configuration

use std::sync::Once;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Initialize console logging for an agent binary.
///
/// Respects `RUST_LOG`; falls back to the given default directive (use
/// `"info"` unless a config says otherwise). Safe to call more than
/// once; only the first call installs the subscriber.
///
/// # Example
/// ```
/// use ibmi_agent_telemetry::init_telemetry;
/// init_telemetry("ibmi-agent-demo", "info").expect("Failed to initialize telemetry");
/// ```
pub fn init_telemetry(
    service_name: &str,
    default_level: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .or_else(|_| EnvFilter::try_new("info"))?;

    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();

        tracing::info!(service.name = service_name, "Telemetry initialized");
    });

    Ok(())
}
