// Copyright 2025 the Tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement inputs for a single axis.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::Rect;
use tickfit_text::TextStyle;

use crate::{AxisGeometry, AxisOrient, Interval, TickDescriptor};

/// Formats a tick value for display; the second argument is the tick index.
pub type TickFormatter = Arc<dyn Fn(&str, usize) -> String>;

/// Everything placement needs to know about one axis.
#[derive(Clone)]
pub struct AxisLayoutConfig {
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// The axis bounding box.
    ///
    /// Use [`AxisLayoutConfig::bounds_from_xywh`] to build it from an
    /// `x, y, width, height` view box without normalizing negative sizes.
    pub bounds: Rect,
    /// Whether labels are drawn on the inner side of the axis line.
    pub mirror: bool,
    /// Minimum clearance between adjacent labels, in pixels.
    pub min_tick_gap: f64,
    /// Which ticks to keep.
    pub interval: Interval,
    /// Candidate ticks in axis order.
    pub ticks: Vec<TickDescriptor>,
    /// Style used to measure tick labels.
    pub text_style: TextStyle,
    /// Optional unit suffix appended to every label on horizontal axes.
    pub unit: Option<String>,
    /// Tick label rotation angle in degrees (horizontal axes only).
    pub label_angle: f64,
    /// Optional tick label formatter.
    ///
    /// If provided, placement measures the formatted text instead of the raw value.
    pub tick_formatter: Option<TickFormatter>,
}

impl core::fmt::Debug for AxisLayoutConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisLayoutConfig")
            .field("orient", &self.orient)
            .field("bounds", &self.bounds)
            .field("mirror", &self.mirror)
            .field("min_tick_gap", &self.min_tick_gap)
            .field("interval", &self.interval)
            .field("ticks", &self.ticks)
            .field("text_style", &self.text_style)
            .field("unit", &self.unit)
            .field("label_angle", &self.label_angle)
            .field("tick_formatter", &self.tick_formatter.is_some())
            .finish()
    }
}

impl AxisLayoutConfig {
    /// Creates an axis layout with default options.
    ///
    /// The returned config has:
    /// - `min_tick_gap = 5`
    /// - `interval = Interval::PreserveEnd`
    /// - `mirror = false`
    /// - `text_style = TextStyle::default()`
    /// - no unit, no formatter and no label rotation.
    pub fn new(
        orient: AxisOrient,
        bounds: Rect,
        ticks: impl IntoIterator<Item = TickDescriptor>,
    ) -> Self {
        Self {
            orient,
            bounds,
            mirror: false,
            min_tick_gap: 5.0,
            interval: Interval::default(),
            ticks: ticks.into_iter().collect(),
            text_style: TextStyle::default(),
            unit: None,
            label_angle: 0.0,
            tick_formatter: None,
        }
    }

    /// Convenience constructor for a `bottom` axis.
    pub fn bottom(bounds: Rect, ticks: impl IntoIterator<Item = TickDescriptor>) -> Self {
        Self::new(AxisOrient::Bottom, bounds, ticks)
    }

    /// Convenience constructor for a `top` axis.
    pub fn top(bounds: Rect, ticks: impl IntoIterator<Item = TickDescriptor>) -> Self {
        Self::new(AxisOrient::Top, bounds, ticks)
    }

    /// Convenience constructor for a `left` axis.
    pub fn left(bounds: Rect, ticks: impl IntoIterator<Item = TickDescriptor>) -> Self {
        Self::new(AxisOrient::Left, bounds, ticks)
    }

    /// Convenience constructor for a `right` axis.
    pub fn right(bounds: Rect, ticks: impl IntoIterator<Item = TickDescriptor>) -> Self {
        Self::new(AxisOrient::Right, bounds, ticks)
    }

    /// Builds a bounding box from a view box, keeping negative sizes negative.
    #[must_use]
    pub fn bounds_from_xywh(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect::new(x, y, x + width, y + height)
    }

    /// Set the minimum gap between adjacent labels.
    pub fn with_min_tick_gap(mut self, min_tick_gap: f64) -> Self {
        self.min_tick_gap = min_tick_gap;
        self
    }

    /// Set the interval policy.
    pub fn with_interval(mut self, interval: impl Into<Interval>) -> Self {
        self.interval = interval.into();
        self
    }

    /// Mirror labels onto the inner side of the axis line.
    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    /// Set the style used to measure labels.
    pub fn with_text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    /// Set a unit suffix that is measured along with every label.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set tick label rotation angle in degrees.
    pub fn with_label_angle(mut self, angle_degrees: f64) -> Self {
        self.label_angle = angle_degrees;
        self
    }

    /// Set a custom tick label formatter.
    pub fn with_tick_formatter(mut self, f: impl Fn(&str, usize) -> String + 'static) -> Self {
        self.tick_formatter = Some(Arc::new(f));
        self
    }

    /// The resolved along-axis geometry.
    #[must_use]
    pub fn geometry(&self) -> AxisGeometry {
        AxisGeometry::new(self.orient, self.bounds, self.mirror)
    }
}
