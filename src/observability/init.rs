//! Subscriber setup.

use super::exporter::{tracer_provider, FileSpanExporter};
use super::writer::RotatingWriter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name stamped on every span record.
pub const SERVICE_NAME: &str = "pixgrid";

/// File name of the active trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "pixgrid-trace.jsonl";

/// Filter directives: `RUST_LOG` wins, then `trace_level`, then `"info"`.
#[must_use]
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.trace_level.as_deref().unwrap_or("info"))
    })
}

/// Installs the global subscriber exporting spans to the data directory.
///
/// Observability is optional: if the directory cannot be created or a
/// subscriber is already installed, this silently does nothing.
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", SERVICE_NAME)]);
    let writer = RotatingWriter::new(data_dir.join(TRACE_FILE_NAME));
    let provider = tracer_provider(FileSpanExporter::new(SERVICE_NAME, writer), resource);

    let tracer = provider.tracer(SERVICE_NAME);

    let _ = tracing_subscriber::registry()
        .with(env_filter(config))
        .with(OpenTelemetryLayer::new(tracer))
        .try_init();
}
