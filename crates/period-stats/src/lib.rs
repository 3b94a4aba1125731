//! # Period Statistics
//!
//! Streaming statistics over the intervals between successive qualifying edges
//! of a digital signal: minimum, maximum, mean, standard deviation, count and
//! frequency.
//!
//! ## Key Features
//!
//! - **Constant Memory**: Welford's online algorithm, no sample storage
//! - **Batch Invariant**: Results don't depend on how the host splits its data
//! - **Polarity Filtering**: Rising or falling edges, fixed per session
//! - **Explicit Absence**: Unavailable measurements are missing, never zero
//! - **Selectable Ordering Policy**: Trust the host or validate time order
//!
//! ## Usage
//!
//! ```rust
//! use period_core::EdgePolarity;
//! use period_stats::{ExtractorParameters, OrderingPolicy, PeriodExtractor};
//!
//! let params = ExtractorParameters::new(EdgePolarity::Rising)
//!     .with_ordering(OrderingPolicy::Validate);
//! let mut extractor = PeriodExtractor::<f64>::with_parameters(params).unwrap();
//!
//! // Two batches from the host; the falling edges are skipped
//! extractor.ingest([(0.0, true), (0.4, false), (1.0, true)]).unwrap();
//! extractor.ingest([(1.5, false), (4.0, true)]).unwrap();
//!
//! let summary = extractor.finalize();
//! assert_eq!(summary.min, Some(1.0));
//! assert_eq!(summary.max, Some(3.0));
//! assert_eq!(summary.count, Some(2));
//! ```

pub mod extractor;
pub mod summary;
pub mod types;

mod moments;

// Re-exports
pub use extractor::PeriodExtractor;
pub use summary::PeriodSummary;
pub use types::{ExtractorParameters, ExtractorState, OrderingPolicy};
