use chrono::Utc;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::{
    field::{Field, Visit},
    Event, Level, Subscriber,
};
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::fmt::{format::Writer, FormatEvent, FormatFields};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

use crate::{WorkforceError, WorkforceResult};

const DEFAULT_LOG_DIRECTIVES: &str = "workforce=info,tower_http=info";

/// Fields recorded on a span, kept in its extensions so formatters can print them.
#[derive(Debug, Clone, Default)]
pub struct SpanFields {
    pub raw_fields: HashMap<String, String>,
}

struct SpanFieldCollector {
    fields: SpanFields,
}

impl Visit for SpanFieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let formatted_value = format!("{:?}", value).trim_matches('"').to_string();
        self.fields.raw_fields.insert(field.name().to_string(), formatted_value);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields.raw_fields.insert(field.name().to_string(), value.to_string());
    }
}

/// Stores span fields (`email`, `method`, `uri`, ...) in the span extensions.
pub struct FieldCollectorLayer;

impl<S> Layer<S> for FieldCollectorLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn on_new_span(&self, attrs: &tracing::span::Attributes<'_>, id: &tracing::span::Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };

        let mut collector = SpanFieldCollector { fields: SpanFields::default() };
        attrs.record(&mut collector);
        span.extensions_mut().insert(collector.fields);
    }

    fn on_record(&self, id: &tracing::span::Id, values: &tracing::span::Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };

        let mut extensions = span.extensions_mut();
        let existing_fields = extensions.remove::<SpanFields>().unwrap_or_default();

        let mut collector = SpanFieldCollector { fields: existing_fields };
        values.record(&mut collector);
        extensions.insert(collector.fields);
    }
}

// Pretty formatter is formatted for console readability
pub struct PrettyFormatter;

impl<S, N> FormatEvent<S, N> for PrettyFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> std::fmt::Result {
        let meta = event.metadata();
        let now = Utc::now().format("%y-%m-%d %H:%M:%S").to_string();

        let ts_color = "\x1b[96m"; // Bright Cyan
        let level_color = match *meta.level() {
            Level::TRACE => "\x1b[90m",
            Level::DEBUG => "\x1b[34m",
            Level::INFO => "\x1b[32m",
            Level::WARN => "\x1b[33m",
            Level::ERROR => "\x1b[31m",
        };
        let msg_color = "\x1b[97m"; // Bright White
        let field_color = "\x1b[90m"; // Dark Grey
        let reset = "\x1b[0m";

        let mut visitor = FieldExtractor::default();
        event.record(&mut visitor);

        // Span fields first (email of the request, ...), then event fields
        let mut fields: Vec<String> = Vec::new();
        if let Some(span) = ctx.lookup_current() {
            if let Some(span_fields) = span.extensions().get::<SpanFields>() {
                let mut sorted: Vec<_> = span_fields.raw_fields.iter().collect();
                sorted.sort();
                fields.extend(sorted.into_iter().map(|(name, value)| format!("{}={}", name, value)));
            }
        }
        fields.extend(visitor.fields);

        write!(writer, "{}{}{} | ", ts_color, now, reset)?;
        write!(writer, "{}{:<5}{} | ", level_color, *meta.level(), reset)?;
        write!(writer, "{}{}{}", msg_color, visitor.message, reset)?;
        if !fields.is_empty() {
            write!(writer, " {}({}){}", field_color, fields.join(", "), reset)?;
        }

        writeln!(writer)
    }
}

#[derive(Default)]
struct FieldExtractor {
    message: String,
    fields: Vec<String>,
}

impl Visit for FieldExtractor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let formatted_value = format!("{:?}", value).trim_matches('"').to_string();
        if field.name() == "message" {
            self.message = formatted_value;
        } else {
            self.fields.push(format!("{}={}", field.name(), formatted_value));
        }
    }
}

// JSON formatter for structured logs, one object per line
pub struct JsonEventFormatter;

#[derive(Default)]
struct JsonFieldVisitor {
    message: Option<String>,
    fields: Map<String, Value>,
}

impl Visit for JsonFieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let v = format!("{:?}", value).trim_matches('"').to_string();
        if field.name() == "message" {
            self.message = Some(v);
        } else {
            self.fields.insert(field.name().to_string(), Value::String(v));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields.insert(field.name().to_string(), Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields.insert(field.name().to_string(), Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields.insert(field.name().to_string(), Value::from(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.insert(field.name().to_string(), Value::String(value.to_string()));
        }
    }
}

impl<S, N> FormatEvent<S, N> for JsonEventFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> std::fmt::Result {
        let meta = event.metadata();
        let ts = Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut visitor = JsonFieldVisitor::default();
        event.record(&mut visitor);

        let mut root = Map::new();
        root.insert("timestamp".to_string(), Value::String(ts));
        root.insert("level".to_string(), Value::String(meta.level().to_string()));
        root.insert("target".to_string(), Value::String(meta.target().to_string()));
        if let Some(file) = meta.file() {
            root.insert("filename".to_string(), Value::String(file.to_string()));
        }
        if let Some(line) = meta.line() {
            root.insert("line_number".to_string(), Value::from(line));
        }
        if let Some(message) = visitor.message.take() {
            root.insert("message".to_string(), Value::String(message));
        }

        let mut all_fields = visitor.fields;
        if let Some(span) = ctx.lookup_current() {
            all_fields.insert("span_name".to_string(), Value::String(span.metadata().name().to_string()));

            if let Some(span_fields) = span.extensions().get::<SpanFields>() {
                for (key, value) in &span_fields.raw_fields {
                    all_fields.entry(key.clone()).or_insert_with(|| Value::String(value.clone()));
                }
            }
        }
        if !all_fields.is_empty() {
            root.insert("fields".to_string(), Value::Object(all_fields));
        }

        let line = serde_json::to_string(&Value::Object(root)).map_err(|_| std::fmt::Error)?;
        writeln!(writer, "{}", line)
    }
}

/// Log output selected through `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON, anything else the pretty console format.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Initialize the tracing subscriber with
/// - PrettyFormatter for console readability (when LOG_FORMAT != "json")
/// - JsonEventFormatter for json logging (when LOG_FORMAT = "json")
///
/// The filter comes from `RUST_LOG`, defaulting to `workforce=info,tower_http=info`.
/// This also installs color_eyre to report panics.
pub fn init_logging() -> WorkforceResult<()> {
    color_eyre::install().map_err(|e| WorkforceError::LoggingError(e.to_string()))?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_DIRECTIVES))
        .map_err(|e| WorkforceError::LoggingError(e.to_string()))?;

    let log_format = LogFormat::from_env_value(std::env::var("LOG_FORMAT").ok().as_deref());

    let fmt_layer = match log_format {
        LogFormat::Json => fmt::layer().with_target(true).event_format(JsonEventFormatter).boxed(),
        LogFormat::Pretty => fmt::layer().with_target(true).event_format(PrettyFormatter).boxed(),
    };

    let subscriber = Registry::default()
        .with(env_filter)
        .with(FieldCollectorLayer)
        .with(fmt_layer)
        .with(ErrorLayer::default());
    tracing::subscriber::set_global_default(subscriber).map_err(|e| WorkforceError::LoggingError(e.to_string()))
}
