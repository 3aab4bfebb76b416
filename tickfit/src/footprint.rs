// Copyright 2025 the Tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label footprints.
//!
//! A label's footprint is the extent it occupies along the axis: its advance
//! width on horizontal axes (including any unit suffix and rotation) and its
//! line height on vertical axes.

use alloc::borrow::Cow;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use tickfit_text::{TextMeasurer, TextMetrics};

use crate::{AxisLayoutConfig, SizeKey, TickDescriptor};

/// Horizontal extent of a `width × height` box rotated by `angle_degrees`.
///
/// The angle is normalized into `[0, 180)`. A box is bounded by its short
/// sides until the rotation passes the diagonal, and by its long sides after.
#[must_use]
pub fn angled_width(width: f64, height: f64, angle_degrees: f64) -> f64 {
    let normalized = ((angle_degrees % 180.0) + 180.0) % 180.0;
    let theta = normalized.to_radians();
    let diagonal = height.atan2(width);
    let extent = if theta > diagonal && theta < core::f64::consts::PI - diagonal {
        height / theta.sin()
    } else {
        width / theta.cos()
    };
    finite_or_zero(extent.abs())
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Measures tick label footprints for one placement call.
pub(crate) struct Footprints<'a> {
    config: &'a AxisLayoutConfig,
    measurer: &'a dyn TextMeasurer,
    size_key: SizeKey,
    unit: TextMetrics,
}

impl<'a> Footprints<'a> {
    pub(crate) fn new(config: &'a AxisLayoutConfig, measurer: &'a dyn TextMeasurer) -> Self {
        let size_key = config.orient.size_key();
        let unit = match (&config.unit, size_key) {
            (Some(unit), SizeKey::Width) => measurer.measure(unit, &config.text_style),
            _ => TextMetrics::ZERO,
        };
        Self {
            config,
            measurer,
            size_key,
            unit,
        }
    }

    /// Footprint of the tick at `index`.
    pub(crate) fn of(&self, tick: &TickDescriptor, index: usize) -> f64 {
        let label = match &self.config.tick_formatter {
            Some(formatter) => Cow::Owned(formatter(&tick.value, index)),
            None => Cow::Borrowed(tick.value.as_str()),
        };
        let metrics = self.measurer.measure(&label, &self.config.text_style);
        let size = match self.size_key {
            SizeKey::Width => angled_width(
                metrics.advance_width + self.unit.advance_width,
                metrics.line_height() + self.unit.line_height(),
                self.config.label_angle,
            ),
            key @ SizeKey::Height => key.of(&metrics),
        };
        finite_or_zero(size)
    }
}
