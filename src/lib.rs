//! Filesystem Image Export Library
//!
//! This library converts a decoded snapshot of a filesystem's metadata (a
//! tree of file/directory/symlink records) into a stream of flat text
//! records suitable for ingestion by a log/search pipeline, with support
//! for delimited and JSON Lines output shapes and bounded-batch buffering.

pub mod cli;
pub mod io;
pub mod models;
pub mod services;

pub use models::{Inode, InodeKind, PermissionStatus};
pub use services::format::{EntryFormatter, OutputShape, ProvenanceTags};

use std::result;

/// Default number of record lines buffered per output batch.
pub const DEFAULT_BATCH_SIZE: usize = 1024;

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    InvalidConfiguration(String),
    UnrecognizedEntry(String),
    TruncatedInput,
    Sink(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {msg}"),
            Error::UnrecognizedEntry(path) => {
                write!(f, "No derivation rule for entry variant at '{path}'")
            }
            Error::TruncatedInput => write!(f, "input file ended unexpectedly"),
            Error::Sink(e) => write!(f, "Output sink failure: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Options for an export run
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub shape: OutputShape,
    pub delimiter: String,
    pub batch_size: usize,
    pub tags: ProvenanceTags,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            shape: OutputShape::Delimited,
            delimiter: "\t".to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            tags: ProvenanceTags::default(),
        }
    }
}

/// Export every entry of a decoded image to the given sink
///
/// # Arguments
/// * `loader` - Source of image entries, delivered parent-before-child
/// * `out` - Exclusively-owned output sink for record lines
/// * `opts` - Export options
///
/// # Returns
/// The number of records flushed to the sink
pub fn export(
    loader: &mut dyn io::image::ImageLoader,
    out: &mut dyn services::sink::OutputSink,
    opts: &ExportOptions,
) -> Result<u64> {
    let writer = services::writer::SnapshotWriter::new(opts)?;
    writer.write(loader, out)
}
