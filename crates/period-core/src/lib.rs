//! Core traits and types for edge-driven period statistics
//!
//! This crate provides the vocabulary shared by every measurer: the opaque
//! [`Timestamp`] a host hands in, the [`EdgeEvent`] it wraps, the
//! [`EdgePolarity`] that selects qualifying edges, the [`Measurement`] keys a
//! result set can carry and the unified [`Error`] type.
//!
//! # Example
//!
//! ```rust
//! use period_core::{EdgeEvent, EdgePolarity, SampleTime};
//!
//! let edge = EdgeEvent::rising(SampleTime::from_seconds(0.5));
//! assert!(EdgePolarity::Rising.qualifies(edge.level));
//!
//! let later = SampleTime::from_seconds(0.75);
//! assert_eq!(later - edge.time, 0.25);
//! ```

pub mod edge;
pub mod error;
pub mod measurement;
pub mod timestamp;
pub mod traits;

// Re-export core types
pub use error::{Error, Result};

pub use edge::{EdgeEvent, EdgePolarity};
pub use measurement::Measurement;
pub use timestamp::{SampleTime, Timestamp};
pub use traits::{EdgeMeasurer, EdgeMeasurerProperties};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        EdgeEvent, EdgeMeasurer, EdgeMeasurerProperties, EdgePolarity, Measurement, Result,
        SampleTime, Timestamp,
    };

    pub use crate::error::Error;
}
