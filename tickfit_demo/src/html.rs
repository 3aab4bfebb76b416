// Copyright 2025 the Tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-file HTML report for the demo sections.

use crate::svg::escape_xml;

/// One titled group of rendered axes.
#[derive(Debug)]
pub(crate) struct Section {
    pub(crate) title: String,
    pub(crate) description: String,
    /// `(caption, svg)` pairs.
    pub(crate) figures: Vec<(String, String)>,
}

pub(crate) fn render_report(title: &str, sections: &[Section]) -> String {
    let title = escape_xml(title);
    let mut out = String::new();
    out.push_str("<!doctype html>\n<html><head><meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{title}</title>\n"));
    out.push_str(
        "<style>body{font-family:sans-serif;margin:2em;color:#222}\
         figure{margin:0 0 1.5em 0}figcaption{font-size:12px;color:#555}</style>\n",
    );
    out.push_str(&format!("</head><body>\n<h1>{title}</h1>\n"));
    for section in sections {
        out.push_str(&format!(
            "<h2>{}</h2>\n<p>{}</p>\n",
            escape_xml(&section.title),
            escape_xml(&section.description)
        ));
        for (caption, svg) in &section.figures {
            out.push_str(&format!(
                "<figure>{svg}<figcaption>{}</figcaption></figure>\n",
                escape_xml(caption)
            ));
        }
    }
    out.push_str("</body></html>\n");
    out
}
