//! Decoded-image input: per-entry subscription and the JSON Lines reader.
//!
//! Binary image decoding is out of scope here; the loader consumes an
//! already-decoded stream in which every entry arrives with its parent
//! path resolved, parent before children.

use crate::models::Inode;
use crate::{Error, Result};
use serde::Deserialize;
use std::io::{BufRead, ErrorKind};

/// Per-entry callback: resolved parent path plus the entry itself.
pub type EntryCallback<'a> = dyn FnMut(&str, &Inode) -> Result<()> + 'a;

/// Source of image entries.
///
/// Implementations invoke `emit` once per entry and guarantee that an
/// entry's parent path has been delivered before any of its children.
pub trait ImageLoader {
    fn load(&mut self, emit: &mut EntryCallback<'_>) -> Result<()>;
}

/// One line of the decoded image stream.
#[derive(Debug, Deserialize)]
struct ImageLine {
    #[serde(default)]
    parent: String,
    inode: Inode,
}

/// Reads a decoded image as JSON Lines: one `{"parent", "inode"}` object
/// per line, entries pre-ordered by the producer.
///
/// A record cut off by end of input is reported as [`Error::TruncatedInput`];
/// any other read failure maps to [`Error::Io`]. Entries emitted before the
/// failure have already been handed downstream.
pub struct JsonImageLoader<R: BufRead> {
    reader: R,
}

impl<R: BufRead> JsonImageLoader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> ImageLoader for JsonImageLoader<R> {
    fn load(&mut self, emit: &mut EntryCallback<'_>) -> Result<()> {
        let mut line = String::new();
        let mut line_no: u64 = 0;
        loop {
            line.clear();
            let read = self.reader.read_line(&mut line).map_err(|e| {
                if e.kind() == ErrorKind::UnexpectedEof {
                    Error::TruncatedInput
                } else {
                    Error::Io(e)
                }
            })?;
            if read == 0 {
                return Ok(());
            }
            line_no += 1;

            let trimmed = line.trim_end_matches(['\n', '\r']);
            if trimmed.trim().is_empty() {
                log::warn!("skipping blank image line {line_no}");
                continue;
            }

            let parsed: ImageLine = serde_json::from_str(trimmed).map_err(|e| {
                // A record cut off mid-line reads as an unterminated JSON
                // document; that is truncation, not a malformed image.
                if e.is_eof() {
                    Error::TruncatedInput
                } else {
                    Error::Io(e.into())
                }
            })?;

            emit(&parsed.parent, &parsed.inode)?;
        }
    }
}
