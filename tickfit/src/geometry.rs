// Copyright 2025 the Tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis geometry.
//!
//! Placement only cares about one dimension: the span of the axis bounding box
//! along the axis direction, and which label dimension (width or height) occupies
//! that span. [`AxisGeometry`] resolves both from the axis `orient`.

use kurbo::Rect;
use tickfit_text::TextMetrics;

use crate::TickDescriptor;

/// Which side of the plot area an axis sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis placed above the plot area.
    Top,
    /// A horizontal axis placed below the plot area.
    Bottom,
    /// A vertical axis placed to the left of the plot area.
    Left,
    /// A vertical axis placed to the right of the plot area.
    Right,
}

impl AxisOrient {
    /// Returns `true` for `top` and `bottom` axes.
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// The label dimension that occupies space along this axis.
    #[must_use]
    pub fn size_key(self) -> SizeKey {
        if self.is_horizontal() {
            SizeKey::Width
        } else {
            SizeKey::Height
        }
    }
}

/// Which dimension of a measured label counts as its footprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeKey {
    /// Horizontal axes: the label's advance width.
    Width,
    /// Vertical axes: the label's line height.
    Height,
}

impl SizeKey {
    /// Extracts the footprint dimension from measured metrics.
    #[must_use]
    pub fn of(self, metrics: &TextMetrics) -> f64 {
        match self {
            Self::Width => metrics.advance_width,
            Self::Height => metrics.line_height(),
        }
    }
}

/// Whether tick coordinates grow or shrink along the tick sequence.
///
/// Vertical axes usually run bottom-to-top, which makes pixel coordinates
/// decrease as the tick index increases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Coordinates increase with the tick index.
    Increasing,
    /// Coordinates decrease with the tick index.
    Decreasing,
}

impl Direction {
    /// Infers the direction from the first two ticks.
    ///
    /// Fewer than two ticks, or two ticks at the same coordinate, count as increasing.
    #[must_use]
    pub fn of_ticks(ticks: &[TickDescriptor]) -> Self {
        match ticks {
            [first, second, ..] if second.coordinate < first.coordinate => Self::Decreasing,
            _ => Self::Increasing,
        }
    }

    /// `1.0` or `-1.0`.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Increasing => 1.0,
            Self::Decreasing => -1.0,
        }
    }
}

/// The first and last pixel position a label may occupy, in scan order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundaries {
    /// Where the scan starts (the edge next to the first tick).
    pub start: f64,
    /// Where the scan ends (the edge next to the last tick).
    pub end: f64,
}

/// Resolved axis geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisGeometry {
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// The axis bounding box.
    ///
    /// This is not normalized: a box whose `x1 < x0` has a negative length.
    pub bounds: Rect,
    /// Whether labels are drawn on the inner side of the axis line.
    ///
    /// Mirroring moves labels across the axis line and never changes
    /// their extent along it.
    pub mirror: bool,
}

impl AxisGeometry {
    /// Creates geometry for `orient` spanning `bounds`.
    #[must_use]
    pub fn new(orient: AxisOrient, bounds: Rect, mirror: bool) -> Self {
        Self {
            orient,
            bounds,
            mirror,
        }
    }

    /// The label dimension that occupies space along this axis.
    #[must_use]
    pub fn size_key(&self) -> SizeKey {
        self.orient.size_key()
    }

    /// Usable pixel length along the axis.
    #[must_use]
    pub fn length(&self) -> f64 {
        match self.size_key() {
            SizeKey::Width => self.bounds.width(),
            SizeKey::Height => self.bounds.height(),
        }
    }

    /// Returns `true` when no label can ever fit (zero, negative or NaN length).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let length = self.length();
        !(length.is_finite() && length > 0.0)
    }

    /// Scan boundaries for ticks laid out in `direction`.
    #[must_use]
    pub fn boundaries(&self, direction: Direction) -> Boundaries {
        let (low, high) = match self.size_key() {
            SizeKey::Width => (self.bounds.x0, self.bounds.x0 + self.bounds.width()),
            SizeKey::Height => (self.bounds.y0, self.bounds.y0 + self.bounds.height()),
        };
        match direction {
            Direction::Increasing => Boundaries {
                start: low,
                end: high,
            },
            Direction::Decreasing => Boundaries {
                start: high,
                end: low,
            },
        }
    }
}
