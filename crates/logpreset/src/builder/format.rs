//! Record formatting
//!
//! A single [`FormatEvent`] renders both text and JSON records. Fields come
//! in a fixed order: time, level, logger name, caller, message, then the
//! event's own fields. The logger name is written only for events with an
//! explicit target.

use std::fmt;

use nu_ansi_term::Color;
use serde::Serializer as _;
use serde::ser::SerializeMap;
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use tracing::field::{Field, Visit};
use tracing::{Event, Metadata, Subscriber};
use tracing_subscriber::fmt::format::{FmtSpan, Writer};
use tracing_subscriber::fmt::time::{FormatTime, SystemTime, UtcTime};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::Layer;
use tracing_subscriber::registry::LookupSpan;

use super::BoxedLayer;
use crate::config::{
    DurationEncoding, EncodingProfile, Format, Level, LevelEncoding, NameEncoding, TimeEncoding,
};

/// Column width of logger names under [`NameEncoding::FixedWidth`].
const NAME_WIDTH: usize = 18;
/// Column width of capitalized level names.
const LEVEL_WIDTH: usize = 5;

/// Create the layer that renders records for `profile` into `writer`.
pub(super) fn create_format_layer(profile: &EncodingProfile, writer: BoxMakeWriter) -> BoxedLayer {
    let mut layer = tracing_subscriber::fmt::layer()
        .event_format(EventFormat::new(*profile))
        .with_writer(writer);
    layer.set_span_events(span_events(profile));
    layer.boxed()
}

/// Human-readable durations come from span close events, which carry
/// `time.busy` and `time.idle`.
fn span_events(profile: &EncodingProfile) -> FmtSpan {
    match profile.duration {
        DurationEncoding::HumanReadable => FmtSpan::CLOSE,
        DurationEncoding::Default => FmtSpan::NONE,
    }
}

/// Event formatter driven by an [`EncodingProfile`].
#[derive(Debug, Clone, Copy)]
struct EventFormat {
    profile: EncodingProfile,
}

impl EventFormat {
    const fn new(profile: EncodingProfile) -> Self {
        Self { profile }
    }

    fn timestamp(&self) -> Result<Option<String>, fmt::Error> {
        let mut buf = String::new();
        let mut writer = Writer::new(&mut buf);
        match self.profile.time {
            TimeEncoding::Default => SystemTime.format_time(&mut writer)?,
            TimeEncoding::Rfc3339 => UtcTime::new(Rfc3339).format_time(&mut writer)?,
            TimeEncoding::Omitted => return Ok(None),
        }
        Ok(Some(buf))
    }

    fn level_name(&self, level: tracing::Level) -> &'static str {
        if self.profile.level.is_colored() {
            level.as_str()
        } else {
            Level::from(level).as_str()
        }
    }

    fn write_text(&self, writer: &mut Writer<'_>, record: &Record) -> fmt::Result {
        if let Some(time) = &record.time {
            write!(writer, "{time}\t")?;
        }

        let level = *record.metadata.level();
        let name = self.level_name(level);
        match self.profile.level {
            LevelEncoding::Default => writer.write_str(name)?,
            LevelEncoding::CapitalColor => write!(writer, "{}", level_color(level).paint(name))?,
            LevelEncoding::FixedWidthCapitalColor => {
                let padded = format!("{name:<LEVEL_WIDTH$}");
                write!(writer, "{}", level_color(level).paint(padded))?;
            }
        }

        if let Some(logger) = record.logger {
            match self.profile.name {
                NameEncoding::Default => write!(writer, "\t{logger}")?,
                NameEncoding::FixedWidth => write!(writer, "\t{logger:<NAME_WIDTH$}")?,
            }
        }
        if let Some(caller) = &record.caller {
            write!(writer, "\t{caller}")?;
        }
        write!(writer, "\t{}", record.fields.message)?;
        if !record.fields.values.is_empty() {
            write!(writer, "\t{}", ConsoleFields(&record.fields.values))?;
        }
        Ok(())
    }

    fn json(&self, record: &Record) -> serde_json::Result<Vec<u8>> {
        let mut serializer = serde_json::Serializer::new(Vec::new());
        let mut map = (&mut serializer).serialize_map(None)?;

        map.serialize_entry("level", self.level_name(*record.metadata.level()))?;
        if let Some(time) = &record.time {
            map.serialize_entry("ts", time)?;
        }
        if let Some(logger) = record.logger {
            map.serialize_entry("logger", logger)?;
        }
        if let Some(caller) = &record.caller {
            map.serialize_entry("caller", caller)?;
        }
        map.serialize_entry("msg", &record.fields.message)?;
        for (key, value) in &record.fields.values {
            map.serialize_entry(key, value)?;
        }
        map.end()?;

        Ok(serializer.into_inner())
    }
}

impl<S, N> FormatEvent<S, N> for EventFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        let mut fields = FieldCollector::default();
        event.record(&mut fields);

        let record = Record {
            time: self.timestamp()?,
            metadata,
            logger: logger_name(metadata),
            caller: caller(metadata),
            fields,
        };

        match self.profile.format {
            Format::Text => self.write_text(&mut writer, &record)?,
            Format::Json => {
                let json = self.json(&record).map_err(|_| fmt::Error)?;
                writer.write_str(&String::from_utf8(json).map_err(|_| fmt::Error)?)?;
            }
        }
        writeln!(writer)
    }
}

/// Everything a record needs, gathered before rendering.
struct Record {
    time: Option<String>,
    metadata: &'static Metadata<'static>,
    logger: Option<&'static str>,
    caller: Option<String>,
    fields: FieldCollector,
}

/// Events logged without `target:` keep their module path as target and
/// carry no logger name.
fn logger_name(metadata: &Metadata<'static>) -> Option<&'static str> {
    let target = metadata.target();
    (metadata.module_path() != Some(target)).then_some(target)
}

fn caller(metadata: &Metadata<'_>) -> Option<String> {
    let file = metadata.file()?;
    let line = metadata.line()?;
    Some(format!("{}:{line}", trimmed_path(file)))
}

/// Last directory plus file name, e.g. `tests/integration_tests.rs`.
fn trimmed_path(file: &str) -> &str {
    match file.rmatch_indices(['/', '\\']).nth(1) {
        Some((idx, _)) => &file[idx + 1..],
        None => file,
    }
}

fn level_color(level: tracing::Level) -> Color {
    match Level::from(level) {
        Level::Trace | Level::Debug => Color::Purple,
        Level::Info => Color::Blue,
        Level::Warn => Color::Yellow,
        Level::Error => Color::Red,
    }
}

/// Event fields in recording order; `message` is kept apart.
#[derive(Debug, Default)]
struct FieldCollector {
    message: String,
    values: Vec<(&'static str, Value)>,
}

impl FieldCollector {
    fn push(&mut self, field: &Field, value: Value) {
        self.values.push((field.name(), value));
    }
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.message);
        } else {
            self.push(field, Value::from(value));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.push(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.push(field, Value::from(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.push(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.push(field, Value::from(value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let rendered = format!("{value:?}");
        if field.name() == "message" {
            self.message = rendered;
        } else {
            self.push(field, Value::from(rendered));
        }
    }
}

/// Text-mode field block: `{"foo": "bar", "baz": 42}`.
struct ConsoleFields<'a>(&'a [(&'static str, Value)]);

impl fmt::Display for ConsoleFields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {value}", Value::from(*key))?;
        }
        f.write_str("}")
    }
}
