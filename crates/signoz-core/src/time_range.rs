//! Date-range choices for the header row selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseTimeRangeError;

/// Relative time window ending now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    #[serde(rename = "15min")]
    Last15Min,
    #[serde(rename = "30min")]
    Last30Min,
    #[serde(rename = "1hr")]
    LastHour,
    #[serde(rename = "6hr")]
    Last6Hours,
    #[serde(rename = "1day")]
    LastDay,
    #[serde(rename = "1week")]
    LastWeek,
}

impl TimeRange {
    /// Selector order.
    pub const ALL: [TimeRange; 6] = [
        Self::Last15Min,
        Self::Last30Min,
        Self::LastHour,
        Self::Last6Hours,
        Self::LastDay,
        Self::LastWeek,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::Last15Min => "15min",
            Self::Last30Min => "30min",
            Self::LastHour => "1hr",
            Self::Last6Hours => "6hr",
            Self::LastDay => "1day",
            Self::LastWeek => "1week",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Last15Min => "Last 15 min",
            Self::Last30Min => "Last 30 min",
            Self::LastHour => "Last 1 hour",
            Self::Last6Hours => "Last 6 hours",
            Self::LastDay => "Last 1 day",
            Self::LastWeek => "Last 1 week",
        }
    }

    pub fn minutes(self) -> u32 {
        match self {
            Self::Last15Min => 15,
            Self::Last30Min => 30,
            Self::LastHour => 60,
            Self::Last6Hours => 6 * 60,
            Self::LastDay => 24 * 60,
            Self::LastWeek => 7 * 24 * 60,
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeRange {
    type Err = ParseTimeRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|range| range.code() == s)
            .ok_or_else(|| ParseTimeRangeError(s.to_string()))
    }
}
