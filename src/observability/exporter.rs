//! Span exporter writing one JSON object per finished span.
//!
//! Records are deliberately flat so they can be read with `jq` or grepped:
//!
//! ```json
//! {"service":"pixgrid","name":"fetch_page","trace_id":"…","span_id":"…","parent_span_id":"…",
//!  "start_unix_nano":1700000000000000000,"duration_us":1532,"status":"unset",
//!  "attributes":{"term":"mountains","page":2},"events":[{"name":"page fetched","attributes":{…}}]}
//! ```

use super::writer::RotatingWriter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Map, Value as JsonValue};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub struct FileSpanExporter {
    service: String,
    writer: RotatingWriter,
    shut_down: bool,
}

impl FileSpanExporter {
    pub fn new(service: impl Into<String>, writer: RotatingWriter) -> Self {
        Self {
            service: service.into(),
            writer,
            shut_down: false,
        }
    }

    fn record(&self, span: &SpanData) -> JsonValue {
        let parent = (span.parent_span_id != SpanId::INVALID).then(|| span.parent_span_id.to_string());
        let duration = span
            .end_time
            .duration_since(span.start_time)
            .unwrap_or(Duration::ZERO);
        let status = match &span.status {
            Status::Unset => "unset".to_string(),
            Status::Ok => "ok".to_string(),
            Status::Error { description } => format!("error: {description}"),
        };
        let events: Vec<JsonValue> = span
            .events
            .iter()
            .map(|event| {
                json!({
                    "name": event.name,
                    "attributes": attributes(&event.attributes),
                })
            })
            .collect();

        json!({
            "service": self.service,
            "name": span.name,
            "trace_id": span.span_context.trace_id().to_string(),
            "span_id": span.span_context.span_id().to_string(),
            "parent_span_id": parent,
            "start_unix_nano": unix_nanos(span.start_time),
            "duration_us": u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
            "status": status,
            "attributes": attributes(&span.attributes),
            "events": events,
        })
    }
}

fn unix_nanos(time: SystemTime) -> u64 {
    let since_epoch = time.duration_since(UNIX_EPOCH).unwrap_or(Duration::ZERO);
    u64::try_from(since_epoch.as_nanos()).unwrap_or(u64::MAX)
}

fn attributes(pairs: &[KeyValue]) -> JsonValue {
    let map: Map<String, JsonValue> = pairs
        .iter()
        .map(|kv| {
            let value = match &kv.value {
                Value::Bool(b) => json!(b),
                Value::I64(i) => json!(i),
                Value::F64(f) => json!(f),
                other => JsonValue::String(other.as_str().into_owned()),
            };
            (kv.key.as_str().to_string(), value)
        })
        .collect();
    JsonValue::Object(map)
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.shut_down {
            return Box::pin(std::future::ready(Err(TraceError::from("exporter is shut down"))));
        }

        let result = batch
            .iter()
            .try_for_each(|span| self.writer.write_line(&self.record(span).to_string()))
            .map_err(|e| TraceError::from(e.to_string()));

        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.shut_down = true;
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("service", &self.service)
            .field("writer", &self.writer)
            .field("shut_down", &self.shut_down)
            .finish()
    }
}

/// Tracer provider exporting every span synchronously through `exporter`.
pub fn tracer_provider(exporter: FileSpanExporter, resource: Resource) -> TracerProvider {
    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_keep_scalar_types() {
        let json = attributes(&[
            KeyValue::new("term", "mountains"),
            KeyValue::new("page", 2_i64),
            KeyValue::new("has_more", true),
        ]);
        assert_eq!(json, json!({"term": "mountains", "page": 2, "has_more": true}));
    }
}
