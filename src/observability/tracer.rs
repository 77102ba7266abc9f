//! Tracer provider backed by a JSON-lines span exporter.
//!
//! Each finished span becomes one JSON object on its own line:
//!
//! ```json
//! {"resource":{"service.name":"Launchdeck"},"name":"handle_event","traceId":"…","spanId":"…",
//!  "parentSpanId":null,"startUnixNano":"…","durationMicros":412,
//!  "attributes":{"event":"LoadLaunches"},"events":[],"status":"unset"}
//! ```

use super::file_writer::FileWriter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Map, Value as JsonValue};
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

struct JsonLinesExporter {
    writer: FileWriter,
    resource: JsonValue,
    is_shutdown: bool,
}

impl JsonLinesExporter {
    fn new(file_path: PathBuf, resource: &Resource) -> Self {
        Self {
            writer: FileWriter::new(file_path),
            resource: resource_json(resource),
            is_shutdown: false,
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        for span in batch {
            let line = span_json(&self.resource, span).to_string();
            self.writer
                .write_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))?;
        }
        Ok(())
    }
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown {
            Err(TraceError::from("exporter is shut down"))
        } else {
            self.write_batch(&batch)
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown = true;
    }

    fn set_resource(&mut self, res: &Resource) {
        self.resource = resource_json(res);
    }
}

impl std::fmt::Debug for JsonLinesExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesExporter")
            .field("writer", &self.writer)
            .field("is_shutdown", &self.is_shutdown)
            .finish_non_exhaustive()
    }
}

/// Builds a provider whose spans are exported synchronously to `file_path`.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = JsonLinesExporter::new(file_path, &resource);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

fn resource_json(resource: &Resource) -> JsonValue {
    let attributes: Map<String, JsonValue> = resource
        .iter()
        .map(|(key, value)| (key.to_string(), value_json(value)))
        .collect();
    JsonValue::Object(attributes)
}

fn span_json(resource: &JsonValue, span: &SpanData) -> JsonValue {
    let duration = span.end_time.duration_since(span.start_time).unwrap_or_default();
    let parent = (span.parent_span_id != SpanId::INVALID).then(|| format!("{:016x}", span.parent_span_id));
    let events: Vec<JsonValue> = span
        .events
        .iter()
        .map(|event| {
            json!({
                "name": event.name,
                "unixNano": unix_nanos(event.timestamp),
                "attributes": attributes_json(&event.attributes),
            })
        })
        .collect();

    json!({
        "resource": resource,
        "name": span.name,
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "startUnixNano": unix_nanos(span.start_time),
        "durationMicros": u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
        "attributes": attributes_json(&span.attributes),
        "events": events,
        "status": status_label(&span.status),
    })
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_nanos()
        .to_string()
}

fn attributes_json(attributes: &[KeyValue]) -> JsonValue {
    let map: Map<String, JsonValue> = attributes
        .iter()
        .map(|kv| (kv.key.to_string(), value_json(&kv.value)))
        .collect();
    JsonValue::Object(map)
}

fn value_json(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!(b),
        Value::I64(i) => json!(i),
        Value::F64(f) => json!(f),
        Value::String(s) => json!(s.as_str()),
        Value::Array(_) => json!(value.to_string()),
    }
}

fn status_label(status: &Status) -> String {
    match status {
        Status::Unset => "unset".to_string(),
        Status::Ok => "ok".to_string(),
        Status::Error { description } => format!("error: {description}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_become_a_flat_object() {
        let attrs = [
            KeyValue::new("event", "ToggleFavorite"),
            KeyValue::new("count", 12_i64),
            KeyValue::new("cached", true),
        ];

        assert_eq!(
            attributes_json(&attrs),
            json!({"event": "ToggleFavorite", "count": 12, "cached": true})
        );
    }

    #[test]
    fn resource_attributes_are_rendered() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "Launchdeck")]);

        assert_eq!(resource_json(&resource)["service.name"], json!("Launchdeck"));
    }

    #[test]
    fn status_labels() {
        assert_eq!(status_label(&Status::Unset), "unset");
        assert_eq!(status_label(&Status::Ok), "ok");
        assert_eq!(status_label(&Status::error("HTTP error! status: 500")), "error: HTTP error! status: 500");
    }
}
