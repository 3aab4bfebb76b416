// Copyright 2025 the Tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick inputs and placement results.

use alloc::string::String;

/// A candidate tick: label text plus its pixel position along the axis.
#[derive(Clone, Debug, PartialEq)]
pub struct TickDescriptor {
    /// The label text (before any formatter is applied).
    pub value: String,
    /// Pixel position along the axis.
    pub coordinate: f64,
}

impl TickDescriptor {
    /// Creates a tick descriptor.
    pub fn new(value: impl Into<String>, coordinate: f64) -> Self {
        Self {
            value: value.into(),
            coordinate,
        }
    }
}

/// A tick kept by placement.
///
/// The shape depends on the interval policy: step sampling returns plain
/// descriptors (`tick_coord` and `is_show` are `None`), every gap-testing
/// policy sets both. Renderers that care about the distinction can match on
/// the fields; the others can use [`PlacedTick::anchor`].
///
/// Equidistant fitting also sets `is_show`, although Recharts' own
/// `equidistantPreserveStart` leaves `isShow` unset on the ticks it keeps.
/// Treat `is_show` as a hint rather than a way to tell policies apart.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedTick {
    /// The label text.
    pub value: String,
    /// Pixel position of the tick itself.
    pub coordinate: f64,
    /// Pixel position of the label anchor, pulled inward at the axis ends.
    pub tick_coord: Option<f64>,
    /// Set by gap-testing policies on every tick they keep.
    pub is_show: Option<bool>,
}

impl PlacedTick {
    /// A tick kept without gap testing.
    pub(crate) fn sampled(tick: &TickDescriptor) -> Self {
        Self {
            value: tick.value.clone(),
            coordinate: tick.coordinate,
            tick_coord: None,
            is_show: None,
        }
    }

    /// A tick that passed gap testing, anchored at `tick_coord`.
    pub(crate) fn shown(tick: &TickDescriptor, tick_coord: f64) -> Self {
        Self {
            value: tick.value.clone(),
            coordinate: tick.coordinate,
            tick_coord: Some(tick_coord),
            is_show: Some(true),
        }
    }

    /// Where the label should be drawn.
    #[must_use]
    pub fn anchor(&self) -> f64 {
        self.tick_coord.unwrap_or(self.coordinate)
    }
}
