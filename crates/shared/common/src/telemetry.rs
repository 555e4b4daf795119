//! Tracing subscriber setup.

use tracing_subscriber::{
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

use crate::config::ServiceConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `config.log_level`. Fails if a global subscriber is
/// already installed.
pub fn init_tracing(config: &ServiceConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    tracing::info!(service = %config.service_name, "Tracing initialized");
    Ok(())
}
