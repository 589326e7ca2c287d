//! Export orchestration: image entries in, batched record lines out.

use crate::io::image::ImageLoader;
use crate::services::batch::BatchAggregator;
use crate::services::format::EntryFormatter;
use crate::services::sink::OutputSink;
use crate::{Error, ExportOptions, Result};

/// Drives one export run.
///
/// For each entry delivered by the loader (parent-before-child), the
/// writer derives a record line and pushes it through a [`BatchAggregator`]
/// whose sink writes to the output, one record per line. The sink is
/// flushed on every exit path, so whatever was written before a failure
/// remains valid output.
pub struct SnapshotWriter {
    formatter: EntryFormatter,
    batch_size: usize,
}

impl SnapshotWriter {
    /// Validates the options; a zero batch size is rejected here, before
    /// any output is produced.
    pub fn new(opts: &ExportOptions) -> Result<Self> {
        if opts.batch_size == 0 {
            return Err(Error::InvalidConfiguration(
                "batch size must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            formatter: EntryFormatter::new(
                opts.shape,
                opts.delimiter.clone(),
                opts.tags.clone(),
            ),
            batch_size: opts.batch_size,
        })
    }

    /// Write one record per image entry to `out`. Returns the number of
    /// records flushed.
    pub fn write(&self, loader: &mut dyn ImageLoader, out: &mut dyn OutputSink) -> Result<u64> {
        let mut written: u64 = 0;
        let result = self.write_entries(loader, out, &mut written);

        let flushed = out.flush().map_err(Error::Sink);
        match (result, flushed) {
            (Ok(()), Ok(())) => Ok(written),
            (Ok(()), Err(sink)) => Err(sink),
            (Err(err), Ok(())) => Err(err),
            (Err(err), Err(sink)) => {
                // The run's failure propagates; the cleanup failure must
                // still be surfaced.
                log::error!("output sink flush failed during cleanup: {sink}");
                Err(err)
            }
        }
    }

    fn write_entries(
        &self,
        loader: &mut dyn ImageLoader,
        out: &mut dyn OutputSink,
        written: &mut u64,
    ) -> Result<()> {
        if let Some(header) = self.formatter.header() {
            out.write_line(&header).map_err(Error::Sink)?;
        }

        let mut aggregator = BatchAggregator::new(self.batch_size, |batch: Vec<String>| {
            for line in &batch {
                out.write_line(line).map_err(Error::Sink)?;
            }
            *written += batch.len() as u64;
            Ok(())
        })?;

        let load_result = loader.load(&mut |parent, inode| {
            let line = self.formatter.format(parent, inode)?;
            aggregator.accept(line)
        });

        // Entries accepted before a mid-stream failure are still delivered;
        // batches flushed earlier stay valid either way.
        let finish_result = aggregator.finish();
        load_result?;
        finish_result
    }
}
