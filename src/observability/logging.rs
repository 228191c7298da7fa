//! Structured logging.
//!
//! One line-delimited JSON object per record so external log processors can
//! parse the stream without configuration. Event fields are flattened to the
//! top level; the enclosing request span contributes the correlation ID.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies. Must be
/// called once, before any server setup, so startup diagnostics are captured.
pub fn init(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true),
        )
        .init();
}
