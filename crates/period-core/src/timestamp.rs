//! Opaque timestamps for edge events
//!
//! A host supplies timestamps it owns; the only thing the statistics need is
//! the signed distance between two of them in seconds.

use std::ops::Sub;
use std::time::Instant;

/// A point in capture time whose only capability is subtraction
pub trait Timestamp: Copy {
    /// Signed seconds from `earlier` to `self`
    ///
    /// Negative when `earlier` is actually later than `self`.
    fn seconds_since(self, earlier: Self) -> f64;
}

/// Capture-relative time of a sample
///
/// Values can only be subtracted from one another, yielding `f64` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleTime(f64);

impl SampleTime {
    /// Time `seconds` after the start of the capture
    pub const fn from_seconds(seconds: f64) -> Self {
        Self(seconds)
    }

    /// Time of sample `index` in a capture taken at `sample_rate_hz`
    pub fn from_sample(index: u64, sample_rate_hz: f64) -> Self {
        Self(index as f64 / sample_rate_hz)
    }
}

impl Sub for SampleTime {
    type Output = f64;

    fn sub(self, rhs: Self) -> f64 {
        self.0 - rhs.0
    }
}

impl Timestamp for SampleTime {
    #[inline]
    fn seconds_since(self, earlier: Self) -> f64 {
        self - earlier
    }
}

impl Timestamp for f64 {
    #[inline]
    fn seconds_since(self, earlier: Self) -> f64 {
        self - earlier
    }
}

impl Timestamp for Instant {
    fn seconds_since(self, earlier: Self) -> f64 {
        match self.checked_duration_since(earlier) {
            Some(elapsed) => elapsed.as_secs_f64(),
            None => -earlier.duration_since(self).as_secs_f64(),
        }
    }
}
