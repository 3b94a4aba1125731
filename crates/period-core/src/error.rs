//! Error types for edge period statistics
//!
//! Provides a unified error type for all edge-period-stats crates.

use thiserror::Error;

/// Core error type for period extraction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An event's timestamp is earlier than the event before it
    ///
    /// `index` counts events from the start of the session, across batches.
    #[error("Invalid input order: event {index} is {delta} s earlier than the event before it")]
    InvalidInputOrder { index: u64, delta: f64 },

    /// Subtracting two timestamps produced NaN or infinity
    #[error("Non-finite interval ending at event {index}")]
    NonFiniteInterval { index: u64 },

    /// Invalid parameter provided to a constructor
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A measurement key the host asked for is not known
    #[error("Unknown measurement: {0}")]
    UnknownMeasurement(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a timestamp that went backwards
    ///
    /// `delta` is the (negative) interval between the two events; it is
    /// reported as a positive magnitude.
    pub fn out_of_order(index: u64, delta: f64) -> Self {
        Self::InvalidInputOrder {
            index,
            delta: delta.abs(),
        }
    }

    /// Create an error for a NaN/Inf interval
    pub fn non_finite(index: u64) -> Self {
        Self::NonFiniteInterval { index }
    }

    /// Whether this error reports malformed host input rather than bad configuration
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInputOrder { .. } | Self::NonFiniteInterval { .. }
        )
    }
}
