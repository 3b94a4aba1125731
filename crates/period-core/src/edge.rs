//! Edge events and polarity selection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which transition direction marks a period boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgePolarity {
    /// Low-to-high transitions (the resulting level is high)
    #[default]
    Rising,
    /// High-to-low transitions (the resulting level is low)
    Falling,
}

impl EdgePolarity {
    /// Logic level a transition must land on to qualify
    pub fn target_level(self) -> bool {
        match self {
            Self::Rising => true,
            Self::Falling => false,
        }
    }

    /// Whether a transition ending at `level` is a qualifying edge
    #[inline]
    pub fn qualifies(self, level: bool) -> bool {
        level == self.target_level()
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Rising => Self::Falling,
            Self::Falling => Self::Rising,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Falling => "falling",
        }
    }
}

/// `true` selects rising edges, `false` falling edges
impl From<bool> for EdgePolarity {
    fn from(want_rising: bool) -> Self {
        if want_rising {
            Self::Rising
        } else {
            Self::Falling
        }
    }
}

impl fmt::Display for EdgePolarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single transition of a digital channel
///
/// `level` is the state the signal settles to after the transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeEvent<T> {
    pub time: T,
    pub level: bool,
}

impl<T> EdgeEvent<T> {
    pub fn new(time: T, level: bool) -> Self {
        Self { time, level }
    }

    pub fn rising(time: T) -> Self {
        Self::new(time, true)
    }

    pub fn falling(time: T) -> Self {
        Self::new(time, false)
    }
}

impl<T> From<(T, bool)> for EdgeEvent<T> {
    fn from((time, level): (T, bool)) -> Self {
        Self { time, level }
    }
}
