// Copyright 2025 the Tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-step sampling.

use alloc::vec::Vec;

use crate::{PlacedTick, TickDescriptor};

/// Keeps indices `0, n + 1, 2(n + 1), …`; a negative `n` keeps nothing.
///
/// Labels are not measured and the kept ticks are not decorated.
pub(crate) fn every_nth(ticks: &[TickDescriptor], n: i64) -> Vec<PlacedTick> {
    let Ok(skip) = u64::try_from(n) else {
        return Vec::new();
    };
    let stride = usize::try_from(skip.saturating_add(1)).unwrap_or(usize::MAX);
    ticks.iter().step_by(stride).map(PlacedTick::sampled).collect()
}
