//! Output destinations

// Standard library
use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

// External dependencies
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

// Internal crates
use crate::core::{Error, Result};

/// Destination keyword for standard output.
pub const STDOUT: &str = "stdout";
/// Destination keyword for standard error.
pub const STDERR: &str = "stderr";

/// Create one writer that fans out to every destination, in order.
///
/// An empty list yields a writer that discards everything.
pub fn make_writer(paths: &[String]) -> Result<BoxMakeWriter> {
    let mut writers = paths.iter().map(|path| open(path));

    let Some(first) = writers.next().transpose()? else {
        return Ok(BoxMakeWriter::new(io::sink));
    };

    writers.try_fold(first, |tee, next| Ok(BoxMakeWriter::new(tee.and(next?))))
}

/// Open a single destination. Anything that is not a stream keyword is a
/// file path, created if missing and appended to.
fn open(path: &str) -> Result<BoxMakeWriter> {
    let writer = match path {
        STDOUT => BoxMakeWriter::new(io::stdout),
        STDERR => BoxMakeWriter::new(io::stderr),
        _ => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| Error::Sink {
                    path: path.to_owned(),
                    source,
                })?;
            BoxMakeWriter::new(Arc::new(file))
        }
    };
    Ok(writer)
}
