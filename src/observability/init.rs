//! Tracing subscriber setup.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::exporter::{file_tracer_provider, SCOPE_NAME};
use crate::infrastructure::get_data_dir;
use crate::Config;

pub const TRACE_FILE_NAME: &str = "pokedexer-otlp.json";
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber: `EnvFilter` plus an OpenTelemetry layer
/// exporting to `<data dir>/pokedexer-otlp.json`.
///
/// Best effort. If the data directory cannot be created, or a subscriber is
/// already installed, tracing stays as it was and the plugin runs normally.
///
/// # Example
///
/// ```rust
/// use pokedexer::observability::init_tracing;
/// use pokedexer::Config;
///
/// init_tracing(&Config { trace_level: Some("debug".to_string()), ..Config::default() });
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);

    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SCOPE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = file_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
