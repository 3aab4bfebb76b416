// Copyright 2025 the Tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump of a placed axis.

use kurbo::Rect;
use tickfit::{AxisLayoutConfig, AxisOrient, PlacedTick};

const TICK_SIZE: f64 = 5.0;
const LABEL_OFFSET: f64 = 4.0;
const PAD: f64 = 40.0;

/// Renders every candidate tick mark plus the labels placement kept.
///
/// Kept labels are drawn at their anchor; a red dot marks anchors that were
/// pulled away from their tick.
pub(crate) fn render_axis(config: &AxisLayoutConfig, placed: &[PlacedTick]) -> String {
    let b = config.bounds;
    let view = Rect::new(b.x0 - PAD, b.y0 - PAD, b.x1 + PAD, b.y1 + PAD);
    let font_size = config.text_style.font_size;
    let mut out = String::new();

    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}" font-family="{}">"#,
        view.x0,
        view.y0,
        view.width(),
        view.height(),
        view.width(),
        view.height(),
        escape_xml(config.text_style.font_family.as_css_family()),
    ));
    out.push('\n');
    out.push_str(&format!(
        r##"<rect x="{}" y="{}" width="{}" height="{}" fill="#f4f6fa" stroke="#d0d4dc"/>"##,
        b.x0,
        b.y0,
        b.width(),
        b.height()
    ));
    out.push('\n');

    let horizontal = config.orient.is_horizontal();
    let ((x1, y1), (x2, y2)) = axis_line(config.orient, b);
    out.push_str(&format!(
        r##"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="#333"/>"##
    ));
    out.push('\n');

    for tick in &config.ticks {
        let (x1, y1, x2, y2) = tick_mark(config.orient, b, tick.coordinate);
        out.push_str(&format!(
            r##"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="#999"/>"##
        ));
        out.push('\n');
    }

    for tick in placed {
        let anchor = tick.anchor();
        let (x, y, text_anchor, baseline) = match config.orient {
            AxisOrient::Bottom => (anchor, b.y0 + TICK_SIZE + LABEL_OFFSET, "middle", "hanging"),
            AxisOrient::Top => (anchor, b.y1 - TICK_SIZE - LABEL_OFFSET, "middle", "alphabetic"),
            AxisOrient::Left => (b.x1 - TICK_SIZE - LABEL_OFFSET, anchor, "end", "middle"),
            AxisOrient::Right => (b.x0 + TICK_SIZE + LABEL_OFFSET, anchor, "start", "middle"),
        };
        out.push_str(&format!(
            r#"<text x="{x}" y="{y}" font-size="{font_size}" text-anchor="{text_anchor}" dominant-baseline="{baseline}""#
        ));
        if horizontal && config.label_angle != 0.0 {
            out.push_str(&format!(r#" transform="rotate({} {x} {y})""#, config.label_angle));
        }
        let label = match &config.tick_formatter {
            Some(formatter) => {
                let index = config
                    .ticks
                    .iter()
                    .position(|t| t.coordinate == tick.coordinate && t.value == tick.value)
                    .unwrap_or_default();
                formatter(&tick.value, index)
            }
            None => tick.value.clone(),
        };
        let unit = if horizontal {
            config.unit.as_deref().unwrap_or_default()
        } else {
            ""
        };
        out.push('>');
        out.push_str(&escape_xml(&label));
        out.push_str(&escape_xml(unit));
        out.push_str("</text>\n");

        if anchor != tick.coordinate {
            let (cx, cy) = if horizontal {
                (anchor, b.y0)
            } else {
                (b.x1, anchor)
            };
            out.push_str(&format!(r##"<circle cx="{cx}" cy="{cy}" r="2" fill="#d33"/>"##));
            out.push('\n');
        }
    }

    out.push_str("</svg>\n");
    out
}

fn axis_line(orient: AxisOrient, b: Rect) -> ((f64, f64), (f64, f64)) {
    match orient {
        AxisOrient::Bottom => ((b.x0, b.y0), (b.x1, b.y0)),
        AxisOrient::Top => ((b.x0, b.y1), (b.x1, b.y1)),
        AxisOrient::Left => ((b.x1, b.y0), (b.x1, b.y1)),
        AxisOrient::Right => ((b.x0, b.y0), (b.x0, b.y1)),
    }
}

fn tick_mark(orient: AxisOrient, b: Rect, at: f64) -> (f64, f64, f64, f64) {
    match orient {
        AxisOrient::Bottom => (at, b.y0, at, b.y0 + TICK_SIZE),
        AxisOrient::Top => (at, b.y1, at, b.y1 - TICK_SIZE),
        AxisOrient::Left => (b.x1, at, b.x1 - TICK_SIZE, at),
        AxisOrient::Right => (b.x0, at, b.x0 + TICK_SIZE, at),
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
