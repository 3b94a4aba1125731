//! Finalized result set of a period session

use period_core::Measurement;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Period statistics with every field optional
///
/// A missing field means "not available", never zero. A session with fewer
/// than two qualifying edges produces a summary with no fields at all.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodSummary {
    /// Shortest period in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Longest period in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Mean period in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,

    /// Sample standard deviation of the periods
    #[serde(rename = "stdDev", skip_serializing_if = "Option::is_none")]
    pub std_dev: Option<f64>,

    /// Number of periods
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,

    /// Periods per second, only when the mean period is positive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
}

impl PeriodSummary {
    /// The "insufficient data" result
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of present keys
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn get(&self, measurement: Measurement) -> Option<f64> {
        match measurement {
            Measurement::Min => self.min,
            Measurement::Max => self.max,
            Measurement::Mean => self.mean,
            Measurement::StdDev => self.std_dev,
            Measurement::Count => self.count.map(|c| c as f64),
            Measurement::Frequency => self.frequency,
        }
    }

    pub fn contains(&self, measurement: Measurement) -> bool {
        self.get(measurement).is_some()
    }

    /// Present measurements in reporting order
    pub fn iter(&self) -> impl Iterator<Item = (Measurement, f64)> + '_ {
        Measurement::ALL
            .into_iter()
            .filter_map(move |m| self.get(m).map(|v| (m, v)))
    }

    /// Keep only the listed measurements
    pub fn restricted_to(mut self, requested: &[Measurement]) -> Self {
        for m in Measurement::ALL {
            if !requested.contains(&m) {
                self.clear(m);
            }
        }
        self
    }

    /// The host-facing mapping, keyed by measurement key
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        self.iter().map(|(m, v)| (m.key(), v)).collect()
    }

    fn clear(&mut self, measurement: Measurement) {
        match measurement {
            Measurement::Min => self.min = None,
            Measurement::Max => self.max = None,
            Measurement::Mean => self.mean = None,
            Measurement::StdDev => self.std_dev = None,
            Measurement::Count => self.count = None,
            Measurement::Frequency => self.frequency = None,
        }
    }
}

impl fmt::Display for PeriodSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("no periods");
        }
        for (i, (m, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match m.unit() {
                "" => write!(f, "{m}={v}")?,
                unit => write!(f, "{m}={v} {unit}")?,
            }
        }
        Ok(())
    }
}
