//! OpenTelemetry span exporter writing OTLP JSON lines to a rotating file.
//!
//! Each exported batch becomes one line holding a complete OTLP
//! `resourceSpans` document, so the file can be replayed into any OTLP
//! collector or inspected with `jq`.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, SpanKind, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Value as JsonValue};

use super::file_writer::RotatingFile;

pub const SCOPE_NAME: &str = "Pokedexer";

#[derive(Debug)]
struct FileSpanExporter {
    file: RotatingFile,
    resource: Resource,
    is_shutdown: bool,
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown {
            Err(TraceError::from("exporter is shut down"))
        } else {
            let line = otlp_document(&self.resource, &batch).to_string();
            self.file
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Builds a tracer provider that exports every span immediately to `path`.
#[must_use]
pub fn file_tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter {
        file: RotatingFile::new(path),
        resource: resource.clone(),
        is_shutdown: false,
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

fn otlp_document(resource: &Resource, batch: &[SpanData]) -> JsonValue {
    let resource_attributes: Vec<JsonValue> = resource
        .iter()
        .map(|(key, value)| json!({ "key": key.as_str(), "value": attribute_value(value) }))
        .collect();

    json!({
        "resourceSpans": [{
            "resource": { "attributes": resource_attributes },
            "scopeSpans": [{
                "scope": { "name": SCOPE_NAME },
                "spans": batch.iter().map(otlp_span).collect::<Vec<_>>(),
            }]
        }]
    })
}

fn otlp_span(span: &SpanData) -> JsonValue {
    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };
    let (status_code, status_message) = match &span.status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    };
    let events: Vec<JsonValue> = span
        .events
        .iter()
        .map(|event| {
            json!({
                "timeUnixNano": unix_nanos(event.timestamp),
                "name": event.name,
                "attributes": attributes(&event.attributes),
            })
        })
        .collect();

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "kind": span_kind(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": attributes(&span.attributes),
        "events": events,
        "status": { "code": status_code, "message": status_message },
    })
}

const fn span_kind(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn attributes(pairs: &[KeyValue]) -> Vec<JsonValue> {
    pairs
        .iter()
        .map(|kv| json!({ "key": kv.key.as_str(), "value": attribute_value(&kv.value) }))
        .collect()
}

/// OTLP `AnyValue` encoding; 64-bit integers travel as strings.
fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.as_str() }),
        Value::Array(_) => json!({ "stringValue": value.to_string() }),
    }
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn attribute_values_use_otlp_encoding() {
        assert_eq!(attribute_value(&Value::I64(151)), json!({ "intValue": "151" }));
        assert_eq!(attribute_value(&Value::Bool(true)), json!({ "boolValue": true }));
        assert_eq!(
            attribute_value(&Value::from("charmander")),
            json!({ "stringValue": "charmander" })
        );
    }

    #[test]
    fn timestamps_are_nanoseconds_since_epoch() {
        assert_eq!(unix_nanos(UNIX_EPOCH + Duration::from_millis(3)), "3000000");
        assert_eq!(unix_nanos(UNIX_EPOCH), "0");
    }

    #[test]
    fn empty_batch_keeps_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "Pokedexer")]);
        let doc = otlp_document(&resource, &[]);

        let scope = &doc["resourceSpans"][0]["scopeSpans"][0];
        assert_eq!(scope["scope"]["name"], SCOPE_NAME);
        assert_eq!(scope["spans"], json!([]));
        let attributes = doc["resourceSpans"][0]["resource"]["attributes"].as_array().unwrap();
        assert!(attributes.contains(&json!({
            "key": "service.name",
            "value": { "stringValue": "Pokedexer" }
        })));
    }
}
