//! Custom subscriber layers

pub mod stacktrace;

pub use stacktrace::StacktraceLayer;
