//! Configuration and state types for period extraction

use period_core::{EdgePolarity, Error, Measurement, Result};
use serde::{Deserialize, Serialize};

/// How an extractor treats input that breaks the time-ordering contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderingPolicy {
    /// Accept everything; backwards or non-finite intervals are logged and
    /// folded into the statistics as they are
    #[default]
    Trust,

    /// Reject an event whose timestamp precedes the previous event, or whose
    /// interval is NaN/infinite
    Validate,
}

/// Parameters fixed for the lifetime of one measurement session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorParameters {
    /// Edge direction that marks a period boundary
    pub polarity: EdgePolarity,

    /// Treatment of out-of-order input
    pub ordering: OrderingPolicy,

    /// Measurements reported by `finalize`
    pub requested: Vec<Measurement>,
}

impl Default for ExtractorParameters {
    fn default() -> Self {
        Self {
            polarity: EdgePolarity::default(),
            ordering: OrderingPolicy::default(),
            requested: Measurement::ALL.to_vec(),
        }
    }
}

impl ExtractorParameters {
    pub fn new(polarity: EdgePolarity) -> Self {
        Self {
            polarity,
            ..Self::default()
        }
    }

    pub fn with_ordering(mut self, ordering: OrderingPolicy) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_requested<I>(mut self, requested: I) -> Self
    where
        I: IntoIterator<Item = Measurement>,
    {
        self.requested = requested.into_iter().collect();
        self
    }

    /// Check the parameters describe a session that can report something
    pub fn validate(&self) -> Result<()> {
        if self.requested.is_empty() {
            return Err(Error::InvalidParameter(
                "at least one measurement must be requested".to_string(),
            ));
        }
        Ok(())
    }
}

/// Progress of an extractor through a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorState {
    /// No qualifying edge seen
    Empty,
    /// One qualifying edge seen, awaiting the next
    Seeded,
    /// At least one period recorded
    Accumulating,
}

impl ExtractorState {
    /// Whether `finalize` would report anything from this state
    pub fn has_periods(self) -> bool {
        matches!(self, Self::Accumulating)
    }
}
