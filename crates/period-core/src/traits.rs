//! Core traits for edge-driven measurements
//!
//! A host drives every measurer the same way: zero or more `ingest` calls with
//! time-ordered batches, then one `finalize`. Static dispatch throughout; the
//! batch type is generic so hosts can pass slices, iterators or tuple vectors.

use crate::edge::EdgeEvent;
use crate::error::Result;
use crate::timestamp::Timestamp;

/// Intrinsic properties of a measurer that don't depend on the data
pub trait EdgeMeasurerProperties {
    /// Qualifying edges needed before anything can be reported
    fn minimum_edges(&self) -> usize;

    /// Name of the measurement method
    fn method_name(&self) -> &str;

    /// Check if a session with the given number of qualifying edges can report
    fn can_report(&self, qualifying_edges: usize) -> bool {
        qualifying_edges >= self.minimum_edges()
    }
}

/// A streaming measurement over the edges of one digital channel
pub trait EdgeMeasurer<T: Timestamp>: EdgeMeasurerProperties {
    /// What `finalize` produces
    type Summary;

    /// Process one batch of events in order
    ///
    /// Batches must be ordered relative to each other as well as internally.
    fn ingest<I, E>(&mut self, events: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
        E: Into<EdgeEvent<T>>;

    /// Summarize everything ingested so far
    fn finalize(&self) -> Self::Summary;

    /// Feed several batches in order, stopping at the first rejected one
    fn ingest_batches<B, I, E>(&mut self, batches: B) -> Result<()>
    where
        B: IntoIterator<Item = I>,
        I: IntoIterator<Item = E>,
        E: Into<EdgeEvent<T>>,
    {
        for batch in batches {
            self.ingest(batch)?;
        }
        Ok(())
    }
}
