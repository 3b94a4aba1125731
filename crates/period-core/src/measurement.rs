//! Named measurements a host can request from a period session

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One entry of a finalized result set
///
/// The serialized form is the key the host displays, e.g. `stdDev`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Measurement {
    #[serde(rename = "min")]
    Min,
    #[serde(rename = "max")]
    Max,
    #[serde(rename = "mean")]
    Mean,
    #[serde(rename = "stdDev")]
    StdDev,
    #[serde(rename = "count")]
    Count,
    #[serde(rename = "frequency")]
    Frequency,
}

impl Measurement {
    /// Every measurement, in reporting order
    pub const ALL: [Measurement; 6] = [
        Measurement::Min,
        Measurement::Max,
        Measurement::Mean,
        Measurement::StdDev,
        Measurement::Count,
        Measurement::Frequency,
    ];

    /// The trio a host lists as supported when it asks for no specific set
    pub const DEFAULT_SUPPORTED: [Measurement; 3] =
        [Measurement::Min, Measurement::Max, Measurement::StdDev];

    /// Key used in the host's result mapping
    pub fn key(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Mean => "mean",
            Self::StdDev => "stdDev",
            Self::Count => "count",
            Self::Frequency => "frequency",
        }
    }

    /// Unit of the reported value
    pub fn unit(self) -> &'static str {
        match self {
            Self::Min | Self::Max | Self::Mean | Self::StdDev => "s",
            Self::Count => "",
            Self::Frequency => "Hz",
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Measurement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.key() == s)
            .ok_or_else(|| Error::UnknownMeasurement(s.to_string()))
    }
}
