//! # edge-period-stats
//!
//! Streaming period statistics over the qualifying edges of a digital signal.
//!
//! A waveform-analysis host creates one [`PeriodExtractor`] per measurement
//! session, feeds it time-ordered `(timestamp, level)` batches and finally asks
//! it for a [`PeriodSummary`]: minimum, maximum, mean and standard deviation of
//! the periods, their count and the resulting frequency. Measurements that
//! cannot be computed are absent rather than zero.
//!
//! ## Crates
//!
//! - [`period_core`]: timestamps, edge events, polarity, measurement keys,
//!   the error type and the measurer traits
//! - [`period_stats`]: the period extractor and its summary
//!
//! ## Quick Start
//!
//! ```rust
//! use edge_period_stats::prelude::*;
//!
//! let mut extractor = PeriodExtractor::new(EdgePolarity::Rising);
//! extractor
//!     .ingest([
//!         EdgeEvent::rising(SampleTime::from_seconds(0.0)),
//!         EdgeEvent::falling(SampleTime::from_seconds(0.5)),
//!         EdgeEvent::rising(SampleTime::from_seconds(1.0)),
//!         EdgeEvent::falling(SampleTime::from_seconds(1.5)),
//!         EdgeEvent::rising(SampleTime::from_seconds(2.0)),
//!     ])
//!     .unwrap();
//!
//! let summary = extractor.finalize();
//! assert_eq!(summary.get(Measurement::Count), Some(2.0));
//! assert_eq!(summary.frequency, Some(1.0));
//! ```

pub use period_core;
pub use period_stats;

pub use period_core::{
    EdgeEvent, EdgeMeasurer, EdgeMeasurerProperties, EdgePolarity, Error, Measurement, Result,
    SampleTime, Timestamp,
};
pub use period_stats::{
    ExtractorParameters, ExtractorState, OrderingPolicy, PeriodExtractor, PeriodSummary,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use period_core::prelude::*;
    pub use period_stats::{
        ExtractorParameters, ExtractorState, OrderingPolicy, PeriodExtractor, PeriodSummary,
    };
}
