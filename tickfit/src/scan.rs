// Copyright 2025 the Tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy preserve-start / preserve-end scans.
//!
//! Each scan walks the ticks once and compares every candidate against the
//! boundary left behind by the most recently accepted label. Accepting a label
//! moves that boundary past the label plus `min_tick_gap`.

use alloc::vec::Vec;

use log::trace;

use crate::placement::{ScanContext, fits};
use crate::{Boundaries, PlacedTick};

/// Pulls a label anchored at `coordinate` inward so it does not cross `start`.
fn clamp_to_start(sign: f64, coordinate: f64, size: f64, start: f64) -> f64 {
    let gap = sign * (coordinate - sign * size / 2.0 - start);
    if gap < 0.0 {
        coordinate - gap * sign
    } else {
        coordinate
    }
}

/// Pulls a label anchored at `coordinate` inward so it does not cross `end`.
fn clamp_to_end(sign: f64, coordinate: f64, size: f64, end: f64) -> f64 {
    let gap = sign * (coordinate + sign * size / 2.0 - end);
    if gap > 0.0 {
        coordinate - gap * sign
    } else {
        coordinate
    }
}

/// Forward scan over the first `count` ticks within `bounds`.
///
/// The first tick is clamped against the start boundary.
fn forward(ctx: &ScanContext<'_>, bounds: Boundaries, count: usize) -> Vec<PlacedTick> {
    let sign = ctx.sign();
    let (_, kept) = ctx.ticks[..count].iter().enumerate().fold(
        (bounds, Vec::new()),
        |(bounds, mut kept), (i, tick)| {
            let size = ctx.footprint(i);
            let tick_coord = if i == 0 {
                clamp_to_start(sign, tick.coordinate, size, bounds.start)
            } else {
                tick.coordinate
            };
            if !fits(sign, tick_coord, size, bounds) {
                trace!("tick {i} ({:?}) overlaps, hidden", tick.value);
                return (bounds, kept);
            }
            kept.push(PlacedTick::shown(tick, tick_coord));
            let start = tick_coord + ctx.reach(size);
            (Boundaries { start, ..bounds }, kept)
        },
    );
    kept
}

/// Keeps ticks greedily from the start of the axis.
pub(crate) fn preserve_start(ctx: &ScanContext<'_>) -> Vec<PlacedTick> {
    forward(ctx, ctx.boundaries, ctx.ticks.len())
}

/// Keeps ticks greedily from the end of the axis.
pub(crate) fn preserve_end(ctx: &ScanContext<'_>) -> Vec<PlacedTick> {
    let sign = ctx.sign();
    let last = ctx.ticks.len().saturating_sub(1);
    let (_, mut kept) = ctx.ticks.iter().enumerate().rev().fold(
        (ctx.boundaries, Vec::new()),
        |(bounds, mut kept), (i, tick)| {
            let size = ctx.footprint(i);
            let tick_coord = if i == last {
                clamp_to_end(sign, tick.coordinate, size, bounds.end)
            } else {
                tick.coordinate
            };
            if !fits(sign, tick_coord, size, bounds) {
                trace!("tick {i} ({:?}) overlaps, hidden", tick.value);
                return (bounds, kept);
            }
            kept.push(PlacedTick::shown(tick, tick_coord));
            let end = tick_coord - ctx.reach(size);
            (Boundaries { end, ..bounds }, kept)
        },
    );
    kept.reverse();
    kept
}

/// Reserves room for the last tick, then keeps ticks greedily from the start.
///
/// Neither end is guaranteed: on a short axis the tail may not fit, and the
/// head is tested like every other tick.
pub(crate) fn preserve_start_end(ctx: &ScanContext<'_>) -> Vec<PlacedTick> {
    let sign = ctx.sign();
    let Some((tail, head)) = ctx.ticks.split_last() else {
        return Vec::new();
    };
    let last = head.len();
    let size = ctx.footprint(last);
    let tail_coord = clamp_to_end(sign, tail.coordinate, size, ctx.boundaries.end);

    let mut bounds = ctx.boundaries;
    let placed_tail = if fits(sign, tail_coord, size, bounds) {
        bounds.end = tail_coord - ctx.reach(size);
        Some(PlacedTick::shown(tail, tail_coord))
    } else {
        trace!("tail tick ({:?}) does not fit", tail.value);
        None
    };

    let mut kept = forward(ctx, bounds, last);
    kept.extend(placed_tail);
    kept
}
