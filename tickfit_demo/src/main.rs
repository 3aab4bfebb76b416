// Copyright 2025 the Tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick placement demos for `tickfit`.
//!
//! Writes `tickfit_demo.html`, which shows every interval policy on a few
//! axes. Set `RUST_LOG=tickfit=trace` to see which ticks were hidden and why.

mod html;
mod svg;

use anyhow::Context as _;
use kurbo::Rect;
use tickfit::{AxisLayoutConfig, Interval, TextMeasurer, TickDescriptor, compute_tick_placement};

use crate::html::Section;

const OUT: &str = "tickfit_demo.html";

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let measurer = measurer();
    let sections = vec![
        policies_demo(measurer.as_ref()),
        shrinking_axis_demo(measurer.as_ref()),
        vertical_demo(measurer.as_ref()),
        label_options_demo(measurer.as_ref()),
    ];

    let html = html::render_report("tickfit demo", &sections);
    std::fs::write(OUT, html).with_context(|| format!("write {OUT}"))?;
    log::info!("wrote {} sections", sections.len());
    println!("wrote {OUT}");
    Ok(())
}

#[cfg(feature = "parley")]
fn measurer() -> Box<dyn TextMeasurer> {
    Box::new(tickfit_text::CachingTextMeasurer::new(
        tickfit_text_parley::ParleyTextMeasurer::new(),
    ))
}

#[cfg(not(feature = "parley"))]
fn measurer() -> Box<dyn TextMeasurer> {
    Box::new(tickfit_text::HeuristicTextMeasurer)
}

const POLICIES: [Interval; 6] = [
    Interval::Step(2),
    Interval::PreserveStart,
    Interval::PreserveEnd,
    Interval::PreserveStartEnd,
    Interval::EquidistantPreserveStart,
    Interval::Step(-1),
];

/// Evenly spaced ticks between `from` and `to` with the given labels.
fn spread<'a>(
    labels: impl IntoIterator<Item = &'a str>,
    from: f64,
    to: f64,
) -> Vec<TickDescriptor> {
    let labels: Vec<&str> = labels.into_iter().collect();
    let step = if labels.len() > 1 {
        (to - from) / (labels.len() - 1) as f64
    } else {
        0.0
    };
    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| TickDescriptor::new(label, from + step * i as f64))
        .collect()
}

fn figure(config: &AxisLayoutConfig, measurer: &dyn TextMeasurer) -> (String, String) {
    let placed = compute_tick_placement(config, measurer);
    let caption = format!(
        "{:?} axis, {}px, interval {}: {} of {} ticks shown",
        config.orient,
        config.geometry().length(),
        config.interval,
        placed.len(),
        config.ticks.len()
    );
    (caption, svg::render_axis(config, &placed))
}

fn policies_demo(measurer: &dyn TextMeasurer) -> Section {
    let bounds = Rect::new(0.0, 0.0, 420.0, 30.0);
    let ticks = spread(MONTHS, 20.0, 400.0);
    let figures = POLICIES
        .iter()
        .map(|&interval| {
            let config = AxisLayoutConfig::bottom(bounds, ticks.clone()).with_interval(interval);
            figure(&config, measurer)
        })
        .collect();
    Section {
        title: "Interval policies".into(),
        description: "The same twelve month labels under every policy.".into(),
        figures,
    }
}

fn shrinking_axis_demo(measurer: &dyn TextMeasurer) -> Section {
    let labels: Vec<String> = (0..=20).map(|i| format!("{}", i * 250)).collect();
    let figures = [600.0, 300.0, 150.0, 60.0]
        .into_iter()
        .map(|width| {
            let ticks = spread(labels.iter().map(String::as_str), 0.0, width);
            let config = AxisLayoutConfig::bottom(Rect::new(0.0, 0.0, width, 30.0), ticks)
                .with_interval(Interval::PreserveStartEnd);
            figure(&config, measurer)
        })
        .collect();
    Section {
        title: "Shrinking axis".into(),
        description: "preserveStartEnd keeps the last label while room allows; end labels are \
                      pulled inside the axis (red dots)."
            .into(),
        figures,
    }
}

fn vertical_demo(measurer: &dyn TextMeasurer) -> Section {
    let labels: Vec<String> = (0..=25).map(|i| format!("{}%", i * 4)).collect();
    // Bottom-to-top: the first tick sits at the largest y.
    let ticks = spread(labels.iter().map(String::as_str), 290.0, 10.0);
    let figures = [Interval::PreserveStart, Interval::PreserveEnd, Interval::Step(4)]
        .into_iter()
        .map(|interval| {
            let config =
                AxisLayoutConfig::left(Rect::new(0.0, 0.0, 60.0, 300.0), ticks.clone())
                    .with_min_tick_gap(2.0)
                    .with_interval(interval);
            figure(&config, measurer)
        })
        .collect();
    Section {
        title: "Vertical axis".into(),
        description: "Left axes measure label height; coordinates decrease along the tick list."
            .into(),
        figures,
    }
}

fn label_options_demo(measurer: &dyn TextMeasurer) -> Section {
    let bounds = Rect::new(0.0, 0.0, 420.0, 60.0);
    let values: Vec<String> = (0..24).map(|i| format!("{}", 1_000 + i * 125)).collect();
    let ticks = spread(values.iter().map(String::as_str), 10.0, 410.0);
    let base = AxisLayoutConfig::bottom(bounds, ticks).with_interval(Interval::PreserveStart);
    let variants = [
        base.clone(),
        base.clone().with_unit(" kg"),
        base.clone().with_tick_formatter(|v, _| {
            format!("{:.1}k", v.parse::<f64>().unwrap_or_default() / 1000.0)
        }),
        base.clone().with_label_angle(-45.0),
        base.with_label_angle(90.0),
    ];
    Section {
        title: "Units, formatters and rotation".into(),
        description: "Footprints include the unit suffix, use formatted text, and shrink when \
                      labels are rotated."
            .into(),
        figures: variants.iter().map(|c| figure(c, measurer)).collect(),
    }
}
