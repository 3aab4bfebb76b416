// Copyright 2025 the Tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Equidistant label fitting.
//!
//! Picks the smallest stride `s` such that showing every `s`-th tick, starting
//! at the first, leaves every label clear of its predecessor and inside the axis.
//! A stride equal to the tick count shows only the first tick, so a stride is
//! always found.

use alloc::vec;
use alloc::vec::Vec;

use log::trace;

use crate::placement::{ScanContext, fits};
use crate::{Boundaries, PlacedTick};

/// Keeps every `s`-th tick for the smallest stride `s` whose labels all fit.
pub(crate) fn fit(ctx: &ScanContext<'_>) -> Vec<PlacedTick> {
    let len = ctx.ticks.len();
    let mut sizes = vec![None; len];
    let stride = (1..=len)
        .find(|&stride| stride_fits(ctx, stride, &mut sizes))
        .unwrap_or(len)
        .max(1);
    trace!("equidistant stride {stride} for {len} ticks");
    ctx.ticks
        .iter()
        .step_by(stride)
        .map(|tick| PlacedTick::shown(tick, tick.coordinate))
        .collect()
}

/// Tests one stride. Footprints are memoized in `sizes` across strides.
fn stride_fits(ctx: &ScanContext<'_>, stride: usize, sizes: &mut [Option<f64>]) -> bool {
    let sign = ctx.sign();
    let mut bounds = ctx.boundaries;
    for (i, tick) in ctx.ticks.iter().enumerate().step_by(stride) {
        let size = *sizes[i].get_or_insert_with(|| ctx.footprint(i));
        if i > 0 && !fits(sign, tick.coordinate, size, bounds) {
            return false;
        }
        bounds = Boundaries {
            start: tick.coordinate + ctx.reach(size),
            ..bounds
        };
    }
    true
}
