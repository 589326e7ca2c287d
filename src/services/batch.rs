//! Bounded-batch aggregation over an item stream.
//!
//! [`BatchAggregator`] buffers items into fixed-size batches and hands each
//! full batch to a caller-supplied sink. It carries no knowledge of what
//! the items are. Accumulation is thread-confined; independent partition
//! aggregators are combined with [`BatchAggregator::merge`], which flushes
//! each side's leftover through its own sink rather than concatenating, so
//! no delivered batch ever exceeds the configured size.

use crate::{Error, Result};
use rayon::prelude::*;

/// Buffers items into fixed-size batches and invokes a sink per full batch.
pub struct BatchAggregator<T, S>
where
    S: FnMut(Vec<T>) -> Result<()>,
{
    batch_size: usize,
    buffer: Vec<T>,
    sink: S,
}

impl<T, S> BatchAggregator<T, S>
where
    S: FnMut(Vec<T>) -> Result<()>,
{
    /// Create an aggregator delivering batches of at most `batch_size` items.
    ///
    /// A zero batch size is rejected at construction; a sink must exist to
    /// construct at all.
    pub fn new(batch_size: usize, sink: S) -> Result<Self> {
        if batch_size == 0 {
            return Err(Error::InvalidConfiguration(
                "batch size must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            batch_size,
            buffer: Vec::with_capacity(batch_size),
            sink,
        })
    }

    /// Number of items currently buffered.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Append one item. A full buffer is delivered to the sink synchronously
    /// on the accepting thread; the sink may block.
    pub fn accept(&mut self, item: T) -> Result<()> {
        self.buffer.push(item);
        if self.buffer.len() >= self.batch_size {
            self.flush()?;
        }
        Ok(())
    }

    /// Combine two partition aggregators.
    ///
    /// The buffers are not concatenated: each side's non-empty leftover is
    /// delivered through its own sink as a (possibly undersized) batch, and
    /// the returned aggregator starts with an empty buffer. Concatenating
    /// could produce a batch larger than `batch_size`.
    pub fn merge<S2>(mut self, mut other: BatchAggregator<T, S2>) -> Result<Self>
    where
        S2: FnMut(Vec<T>) -> Result<()>,
    {
        self.flush()?;
        other.flush()?;
        Ok(self)
    }

    /// Deliver any remaining items as a final batch and consume the
    /// aggregator. Consuming `self` makes a double finish unrepresentable.
    pub fn finish(mut self) -> Result<()> {
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let batch = std::mem::replace(&mut self.buffer, Vec::with_capacity(self.batch_size));
        (self.sink)(batch)
    }
}

/// Drain `items` through per-partition aggregators on the rayon pool and
/// merge the partitions pairwise.
///
/// `make_sink` is invoked once per partition. Within a partition items keep
/// their relative order; no ordering is guaranteed across partitions. Every
/// item is delivered in exactly one batch, and no batch exceeds
/// `batch_size`.
pub fn drain_parallel<T, S, F>(items: Vec<T>, batch_size: usize, make_sink: F) -> Result<()>
where
    T: Send,
    S: FnMut(Vec<T>) -> Result<()> + Send,
    F: Fn() -> S + Sync,
{
    let reduced = items
        .into_par_iter()
        .fold(
            || BatchAggregator::new(batch_size, make_sink()),
            |aggregator, item| {
                let mut aggregator = aggregator?;
                aggregator.accept(item)?;
                Ok(aggregator)
            },
        )
        .try_reduce_with(|left, right| left.merge(right));

    match reduced {
        Some(aggregator) => aggregator?.finish(),
        None => Ok(()),
    }
}
