//! Layer that captures a stacktrace for severe events

use std::backtrace::Backtrace;
use std::io::Write;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Context, Layer};

/// Writes a captured backtrace to the error outputs for every event at or
/// above `threshold`.
pub struct StacktraceLayer {
    threshold: Level,
    writer: BoxMakeWriter,
}

impl StacktraceLayer {
    /// Error events only, or warnings and errors in development mode.
    pub fn new(development: bool, writer: BoxMakeWriter) -> Self {
        let threshold = if development { Level::WARN } else { Level::ERROR };
        Self { threshold, writer }
    }

    /// Whether an event at `level` gets a stacktrace.
    #[must_use]
    pub fn captures(&self, level: Level) -> bool {
        // `tracing` orders more verbose levels as greater.
        level <= self.threshold
    }
}

impl std::fmt::Debug for StacktraceLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StacktraceLayer")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

impl<S> Layer<S> for StacktraceLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !self.captures(*metadata.level()) {
            return;
        }

        let backtrace = Backtrace::force_capture();
        let mut writer = self.writer.make_writer_for(metadata);
        // Nowhere left to report a failing error output.
        let _ = writeln!(
            writer,
            "stacktrace for {} event in {}:\n{backtrace}",
            metadata.level(),
            metadata.target()
        );
    }
}
