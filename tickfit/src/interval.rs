// Copyright 2025 the Tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interval policies.
//!
//! The policy names follow the string values chart configurations use
//! (`"preserveStart"`, `"preserveEnd"`, …). Parsing is lenient: anything that is
//! not a known name or an integer selects the default policy.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

/// Which ticks to keep, and how.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Interval {
    /// Keep every `(n + 1)`-th tick starting at the first, without gap testing.
    ///
    /// Negative values keep nothing.
    Step(i64),
    /// Greedy forward scan; the first tick is placed before any other.
    PreserveStart,
    /// Greedy backward scan; the last tick is placed before any other.
    #[default]
    PreserveEnd,
    /// Reserve room for the last tick, then scan forward.
    PreserveStartEnd,
    /// Smallest uniform stride whose labels all fit, starting at the first tick.
    EquidistantPreserveStart,
}

impl Interval {
    /// The configuration name of this policy, or `None` for [`Interval::Step`].
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::Step(_) => None,
            Self::PreserveStart => Some("preserveStart"),
            Self::PreserveEnd => Some("preserveEnd"),
            Self::PreserveStartEnd => Some("preserveStartEnd"),
            Self::EquidistantPreserveStart => Some("equidistantPreserveStart"),
        }
    }

    /// Parses an optional configuration value; `None` selects the default.
    #[must_use]
    pub fn from_config(value: Option<&str>) -> Self {
        value.map_or_else(Self::default, |v| v.parse().unwrap_or_default())
    }
}

impl From<i64> for Interval {
    fn from(n: i64) -> Self {
        Self::Step(n)
    }
}

impl From<Option<Self>> for Interval {
    fn from(interval: Option<Self>) -> Self {
        interval.unwrap_or_default()
    }
}

impl FromStr for Interval {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s {
            "preserveStart" => Self::PreserveStart,
            "preserveEnd" => Self::PreserveEnd,
            "preserveStartEnd" => Self::PreserveStartEnd,
            "equidistantPreserveStart" => Self::EquidistantPreserveStart,
            _ => match s.parse::<i64>() {
                Ok(n) => Self::Step(n),
                Err(_) => {
                    log::debug!("unknown interval {s:?}, using preserveEnd");
                    Self::default()
                }
            },
        })
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step(n) => write!(f, "{n}"),
            policy => f.write_str(policy.name().unwrap_or_default()),
        }
    }
}
