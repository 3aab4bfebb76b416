// Copyright 2025 the Tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick placement entry point.
//!
//! [`compute_tick_placement`] resolves the axis geometry, then hands the ticks
//! to the algorithm selected by [`Interval`]. All gap-testing algorithms share
//! [`ScanContext`] and the [`fits`] visibility test.

use alloc::vec::Vec;

use log::debug;
use tickfit_text::TextMeasurer;

use crate::footprint::Footprints;
use crate::{
    AxisGeometry, AxisLayoutConfig, Boundaries, Direction, Interval, PlacedTick, TickDescriptor,
    equidistant, scan, step,
};

/// Decides which ticks of `config` are shown and where their labels anchor.
///
/// The result is a subsequence of `config.ticks`, in input order. Empty tick
/// lists and axes without positive length produce an empty result.
pub fn compute_tick_placement(
    config: &AxisLayoutConfig,
    measurer: &dyn TextMeasurer,
) -> Vec<PlacedTick> {
    let ticks = config.ticks.as_slice();
    if ticks.is_empty() {
        return Vec::new();
    }
    let geometry = config.geometry();
    if geometry.is_degenerate() {
        debug!(
            "axis {:?} has no usable length ({}), hiding {} ticks",
            geometry.orient,
            geometry.length(),
            ticks.len()
        );
        return Vec::new();
    }

    let context = || ScanContext::new(config, &geometry, measurer);
    let placed = match config.interval {
        Interval::Step(n) => step::every_nth(ticks, n),
        Interval::PreserveStart => scan::preserve_start(&context()),
        Interval::PreserveEnd => scan::preserve_end(&context()),
        Interval::PreserveStartEnd => scan::preserve_start_end(&context()),
        Interval::EquidistantPreserveStart => equidistant::fit(&context()),
    };
    debug!(
        "interval {} kept {} of {} ticks",
        config.interval,
        placed.len(),
        ticks.len()
    );
    placed
}

/// Shared inputs of the gap-testing algorithms.
pub(crate) struct ScanContext<'a> {
    pub(crate) ticks: &'a [TickDescriptor],
    pub(crate) direction: Direction,
    pub(crate) boundaries: Boundaries,
    pub(crate) min_tick_gap: f64,
    footprints: Footprints<'a>,
}

impl<'a> ScanContext<'a> {
    pub(crate) fn new(
        config: &'a AxisLayoutConfig,
        geometry: &AxisGeometry,
        measurer: &'a dyn TextMeasurer,
    ) -> Self {
        let ticks = config.ticks.as_slice();
        let direction = Direction::of_ticks(ticks);
        Self {
            ticks,
            direction,
            boundaries: geometry.boundaries(direction),
            min_tick_gap: config.min_tick_gap,
            footprints: Footprints::new(config, measurer),
        }
    }

    pub(crate) fn sign(&self) -> f64 {
        self.direction.sign()
    }

    /// Measures the tick at `index`.
    pub(crate) fn footprint(&self, index: usize) -> f64 {
        self.footprints.of(&self.ticks[index], index)
    }

    /// How far past `tick_coord` the next label may begin, in scan direction.
    pub(crate) fn reach(&self, size: f64) -> f64 {
        self.sign() * (size / 2.0 + self.min_tick_gap)
    }
}

/// Returns `true` if a label of `size` anchored at `tick_coord` lies within `bounds`.
pub(crate) fn fits(sign: f64, tick_coord: f64, size: f64, bounds: Boundaries) -> bool {
    sign * (tick_coord - sign * size / 2.0 - bounds.start) >= 0.0
        && sign * (tick_coord + sign * size / 2.0 - bounds.end) <= 0.0
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::String;
    use std::vec;
    use std::vec::Vec;

    use kurbo::Rect;
    use tickfit_text::{FnTextMeasurer, TextMetrics, TextStyle};

    use super::*;

    /// Width is the number of characters, height is 20.
    fn by_len() -> FnTextMeasurer<impl Fn(&str, &TextStyle) -> TextMetrics> {
        FnTextMeasurer(|text: &str, _: &TextStyle| {
            TextMetrics::from_box(text.chars().count() as f64, 20.0)
        })
    }

    fn example(width: f64, interval: Interval) -> AxisLayoutConfig {
        let ticks = [
            ("10", 50.0),
            ("1000", 100.0),
            ("20", 150.0),
            ("40", 200.0),
            ("90", 250.0),
            ("A", 300.0),
        ]
        .into_iter()
        .map(|(v, c)| TickDescriptor::new(v, c));
        AxisLayoutConfig::bottom(
            AxisLayoutConfig::bounds_from_xywh(0.0, 0.0, width, 500.0),
            ticks,
        )
        .with_interval(interval)
    }

    fn values(placed: &[PlacedTick]) -> Vec<&str> {
        placed.iter().map(|t| t.value.as_str()).collect()
    }

    fn shown(value: &str, coordinate: f64, tick_coord: f64) -> PlacedTick {
        PlacedTick {
            value: String::from(value),
            coordinate,
            tick_coord: Some(tick_coord),
            is_show: Some(true),
        }
    }

    #[test]
    fn every_tick_is_shown_when_space_is_plentiful() {
        for interval in [
            Interval::PreserveStart,
            Interval::PreserveEnd,
            Interval::PreserveStartEnd,
            Interval::EquidistantPreserveStart,
        ] {
            let placed = compute_tick_placement(&example(500.0, interval), &by_len());
            let expected: Vec<PlacedTick> = example(500.0, interval)
                .ticks
                .iter()
                .map(|t| shown(&t.value, t.coordinate, t.coordinate))
                .collect();
            assert_eq!(placed, expected, "{interval}");
        }
    }

    #[test]
    fn narrow_axis_keeps_only_the_clamped_tail() {
        let tail = vec![shown("A", 300.0, 29.5)];
        for interval in [Interval::PreserveEnd, Interval::PreserveStartEnd] {
            let placed = compute_tick_placement(&example(30.0, interval), &by_len());
            assert_eq!(placed, tail, "{interval}");
        }
        let unset = example(30.0, Interval::from(None));
        assert_eq!(compute_tick_placement(&unset, &by_len()), tail);
    }

    #[test]
    fn narrow_axis_fits_nothing_from_the_start() {
        let placed = compute_tick_placement(&example(30.0, Interval::PreserveStart), &by_len());
        assert!(placed.is_empty());
    }

    #[test]
    fn narrow_axis_equidistant_keeps_the_first_tick() {
        let placed = compute_tick_placement(
            &example(30.0, Interval::EquidistantPreserveStart),
            &by_len(),
        );
        assert_eq!(placed, vec![shown("10", 50.0, 50.0)]);
    }

    #[test]
    fn step_intervals_ignore_label_sizes() {
        let cases: [(i64, &[&str]); 5] = [
            (7, &["10"]),
            (2, &["10", "40"]),
            (1, &["10", "20", "90"]),
            (0, &["10", "1000", "20", "40", "90", "A"]),
            (-1, &[]),
        ];
        for (n, expected) in cases {
            let placed = compute_tick_placement(&example(30.0, Interval::Step(n)), &by_len());
            assert_eq!(values(&placed), expected, "interval {n}");
            assert!(
                placed
                    .iter()
                    .all(|t| t.tick_coord.is_none() && t.is_show.is_none()),
                "step sampling must not decorate ticks"
            );
        }
    }

    #[test]
    fn degenerate_inputs_yield_nothing() {
        let measurer = by_len();
        for interval in [
            Interval::Step(0),
            Interval::PreserveStart,
            Interval::PreserveEnd,
            Interval::PreserveStartEnd,
            Interval::EquidistantPreserveStart,
        ] {
            assert!(compute_tick_placement(&example(0.0, interval), &measurer).is_empty());
            assert!(compute_tick_placement(&example(-30.0, interval), &measurer).is_empty());
            let empty = AxisLayoutConfig::bottom(Rect::new(0.0, 0.0, 100.0, 10.0), [])
                .with_interval(interval);
            assert!(compute_tick_placement(&empty, &measurer).is_empty());
        }
    }

    #[test]
    fn vertical_axes_measure_label_height() {
        // Bottom-to-top axis: coordinates shrink as the index grows.
        let ticks = [("0", 190.0), ("25", 170.0), ("50", 150.0), ("75", 130.0), ("100", 110.0)]
            .into_iter()
            .map(|(v, c)| TickDescriptor::new(v, c));
        let config = AxisLayoutConfig::left(Rect::new(0.0, 100.0, 40.0, 200.0), ticks)
            .with_min_tick_gap(2.0)
            .with_interval(Interval::PreserveStart);
        let placed = compute_tick_placement(&config, &by_len());
        // Labels are 20 tall and ticks 20 apart: only every other one fits.
        assert_eq!(values(&placed), ["0", "50", "100"]);
        assert_eq!(placed[0].tick_coord, Some(190.0));
        assert_eq!(placed[2].tick_coord, Some(110.0));
    }

    #[test]
    fn measurer_is_called_once_per_candidate() {
        let measured = core::cell::RefCell::new(Vec::<String>::new());
        let recording = FnTextMeasurer(|text: &str, _: &TextStyle| {
            measured.borrow_mut().push(String::from(text));
            TextMetrics::from_box(text.chars().count() as f64, 20.0)
        });
        let labels = ["10", "1000", "20", "40", "90", "A"];
        for interval in [
            Interval::PreserveStart,
            Interval::PreserveEnd,
            Interval::PreserveStartEnd,
            Interval::EquidistantPreserveStart,
        ] {
            measured.borrow_mut().clear();
            compute_tick_placement(&example(30.0, interval), &recording);
            let mut seen = measured.borrow().clone();
            seen.sort();
            let mut expected: Vec<String> = labels.iter().map(|l| String::from(*l)).collect();
            expected.sort();
            assert_eq!(seen, expected, "{interval}");
        }

        // A roomy axis settles on stride 1 after measuring each label once.
        measured.borrow_mut().clear();
        compute_tick_placement(
            &example(500.0, Interval::EquidistantPreserveStart),
            &recording,
        );
        assert_eq!(measured.borrow().len(), labels.len());

        measured.borrow_mut().clear();
        compute_tick_placement(&example(30.0, Interval::Step(1)), &recording);
        assert!(measured.borrow().is_empty());
    }

    #[test]
    fn mirroring_does_not_move_labels_along_the_axis() {
        let measurer = by_len();
        for width in [30.0, 120.0, 500.0] {
            for interval in [
                Interval::Step(1),
                Interval::PreserveStart,
                Interval::PreserveEnd,
                Interval::PreserveStartEnd,
                Interval::EquidistantPreserveStart,
            ] {
                let config = example(width, interval);
                let mirrored = config.clone().with_mirror(true);
                assert!(mirrored.geometry().mirror);
                assert_eq!(
                    compute_tick_placement(&mirrored, &measurer),
                    compute_tick_placement(&config, &measurer),
                    "{interval} at width {width}"
                );
            }
        }
    }

    #[test]
    fn unmeasurable_labels_take_no_room() {
        let measurer = FnTextMeasurer(|text: &str, _: &TextStyle| {
            if text == "x" {
                TextMetrics::from_box(f64::NAN, f64::INFINITY)
            } else {
                TextMetrics::from_box(text.chars().count() as f64, 20.0)
            }
        });
        let ticks = [("x", 10.0), ("ab", 20.0), ("x", 30.0)]
            .into_iter()
            .map(|(v, c)| TickDescriptor::new(v, c));
        let base = AxisLayoutConfig::bottom(Rect::new(0.0, 0.0, 100.0, 30.0), ticks)
            .with_label_angle(30.0);
        for interval in [
            Interval::PreserveStart,
            Interval::PreserveEnd,
            Interval::PreserveStartEnd,
            Interval::EquidistantPreserveStart,
        ] {
            let config = base.clone().with_interval(interval);
            let placed = compute_tick_placement(&config, &measurer);
            let expected: Vec<PlacedTick> = config
                .ticks
                .iter()
                .map(|t| shown(&t.value, t.coordinate, t.coordinate))
                .collect();
            assert_eq!(placed, expected, "{interval}");
        }
    }

    #[test]
    fn fits_checks_both_edges() {
        let bounds = Boundaries {
            start: 0.0,
            end: 30.0,
        };
        assert!(fits(1.0, 29.5, 1.0, bounds));
        assert!(!fits(1.0, 29.6, 1.0, bounds));
        assert!(!fits(1.0, 0.4, 1.0, bounds));
        let reversed = Boundaries {
            start: 30.0,
            end: 0.0,
        };
        assert!(fits(-1.0, 29.5, 1.0, reversed));
        assert!(!fits(-1.0, 29.6, 1.0, reversed));
    }
}
