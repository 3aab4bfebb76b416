// Copyright 2025 the Tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for tick placement.

use kurbo::Rect;
use proptest::prelude::*;
use tickfit::{AxisLayoutConfig, Interval, PlacedTick, TickDescriptor, compute_tick_placement};
use tickfit_text::{FnTextMeasurer, TextMetrics, TextStyle};

/// Places ticks whose labels are their own indices; `widths[i]` is the
/// footprint of tick `i`.
fn place(
    coords: &[f64],
    widths: &[f64],
    axis_len: f64,
    min_tick_gap: f64,
    interval: Interval,
) -> Vec<PlacedTick> {
    let measurer = FnTextMeasurer(|text: &str, _: &TextStyle| {
        let i: usize = text.parse().expect("labels are indices");
        TextMetrics::from_box(widths[i], 12.0)
    });
    let ticks = coords
        .iter()
        .enumerate()
        .map(|(i, &c)| TickDescriptor::new(i.to_string(), c));
    let config = AxisLayoutConfig::bottom(Rect::new(0.0, 0.0, axis_len, 30.0), ticks)
        .with_min_tick_gap(min_tick_gap)
        .with_interval(interval);
    compute_tick_placement(&config, &measurer)
}

fn indices(placed: &[PlacedTick]) -> Vec<usize> {
    placed
        .iter()
        .map(|t| t.value.parse().expect("labels are indices"))
        .collect()
}

fn stride(placed: &[PlacedTick], len: usize) -> usize {
    indices(placed).get(1).copied().unwrap_or(len)
}

/// Strictly increasing coordinates in `[10, 990]` plus label widths in `[0, 10]`.
fn roomy_axis() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec((0.5_f64..30.0, 0.0_f64..10.0), 1..30).prop_map(|steps| {
        let mut at = 10.0;
        steps
            .into_iter()
            .map(|(step, width)| {
                let c = at;
                at += step;
                (c, width)
            })
            .unzip()
    })
}

fn any_interval() -> impl Strategy<Value = Interval> {
    prop_oneof![
        Just(Interval::PreserveStart),
        Just(Interval::PreserveEnd),
        Just(Interval::PreserveStartEnd),
        Just(Interval::EquidistantPreserveStart),
        (-3_i64..12).prop_map(Interval::Step),
    ]
}

proptest! {
    #[test]
    fn output_is_an_ordered_subsequence(
        (coords, widths) in roomy_axis(),
        axis_len in 1.0_f64..1000.0,
        gap in 0.0_f64..20.0,
        reversed in any::<bool>(),
        interval in any_interval(),
    ) {
        let coords: Vec<f64> = if reversed {
            coords.iter().map(|c| 1000.0 - c).collect()
        } else {
            coords
        };
        let placed = place(&coords, &widths, axis_len, gap, interval);
        let kept = indices(&placed);
        prop_assert!(kept.windows(2).all(|w| w[0] < w[1]));
        for (t, &i) in placed.iter().zip(&kept) {
            prop_assert_eq!(t.coordinate, coords[i]);
        }
    }

    #[test]
    fn anchors_survive_on_a_roomy_axis(
        (coords, widths) in roomy_axis(),
        gap in 0.0_f64..20.0,
    ) {
        let last = coords.len() - 1;
        let start = indices(&place(&coords, &widths, 1000.0, gap, Interval::PreserveStart));
        prop_assert_eq!(start.first().copied(), Some(0));
        let end = indices(&place(&coords, &widths, 1000.0, gap, Interval::PreserveEnd));
        prop_assert_eq!(end.last().copied(), Some(last));
        let both = indices(&place(&coords, &widths, 1000.0, gap, Interval::PreserveStartEnd));
        prop_assert_eq!(both.last().copied(), Some(last));
    }

    #[test]
    fn plentiful_space_shows_everything(
        widths in prop::collection::vec(0.0_f64..10.0, 1..20),
        gap in 0.0_f64..20.0,
        interval in prop_oneof![
            Just(Interval::PreserveStart),
            Just(Interval::PreserveEnd),
            Just(Interval::PreserveStartEnd),
            Just(Interval::EquidistantPreserveStart),
        ],
    ) {
        let coords: Vec<f64> = (0..widths.len()).map(|i| 20.0 + 100.0 * i as f64).collect();
        let placed = place(&coords, &widths, 2100.0, gap, interval);
        prop_assert_eq!(indices(&placed), (0..widths.len()).collect::<Vec<_>>());
        prop_assert!(placed.iter().all(|t| t.is_show == Some(true)));
    }

    #[test]
    fn step_sampling_is_deterministic(
        (coords, widths) in roomy_axis(),
        n in -5_i64..40,
    ) {
        let placed = place(&coords, &widths, 5.0, 50.0, Interval::Step(n));
        let expected: Vec<usize> = match usize::try_from(n) {
            Ok(n) => (0..coords.len()).step_by(n + 1).collect(),
            Err(_) => Vec::new(),
        };
        prop_assert_eq!(indices(&placed), expected);
        prop_assert!(placed.iter().all(|t| t.tick_coord.is_none() && t.is_show.is_none()));
    }

    #[test]
    fn equidistant_stride_never_shrinks_with_less_room(
        (coords, widths) in roomy_axis(),
        gap in 0.0_f64..10.0,
        extra_gap in 0.0_f64..10.0,
        grow in 1.0_f64..3.0,
    ) {
        let len = coords.len();
        let base = stride(&place(&coords, &widths, 1000.0, gap, Interval::EquidistantPreserveStart), len);

        let wider_gap = place(&coords, &widths, 1000.0, gap + extra_gap, Interval::EquidistantPreserveStart);
        prop_assert!(stride(&wider_gap, len) >= base);

        let grown: Vec<f64> = widths.iter().map(|w| w * grow).collect();
        let wider_labels = place(&coords, &grown, 1000.0, gap, Interval::EquidistantPreserveStart);
        prop_assert!(stride(&wider_labels, len) >= base);
    }
}
