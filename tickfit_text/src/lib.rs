// Copyright 2025 the Tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for tick label placement.
//!
//! `tickfit` decides which axis tick labels fit along an axis. It never touches
//! a rendering surface: label extents come from a [`TextMeasurer`] supplied by
//! the caller, so native shaping engines, web canvas measurement and simple
//! heuristics can all drive the same placement code.
//!
//! This crate is:
//! - small and dependency-light,
//! - `no_std`-friendly (it uses `alloc` for owned font family names and the
//!   memoizing measurer), and
//! - renderer-agnostic.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use core::cell::RefCell;

use hashbrown::HashMap;

/// A minimal text measurement interface used by tick placement.
///
/// Implementations can be:
/// - heuristic (fast, but inaccurate),
/// - backed by a shaping engine (e.g. Parley),
/// - a closure wrapped in [`FnTextMeasurer`], or
/// - a memoizing wrapper around any of the above ([`CachingTextMeasurer`]).
///
/// Measurement is treated as a potentially expensive pure function of
/// `(text, style)`.
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as a single line; callers should split on `\n` if they
    /// want multi-line layout.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

/// Text styling inputs relevant to measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in the chart’s coordinate system (typically pixels).
    pub font_size: f64,
    /// Extra spacing added after every character, in the same units as `font_size`.
    pub letter_spacing: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
}

impl TextStyle {
    /// Creates a default `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            letter_spacing: 0.0,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
        }
    }

    /// Sets the letter spacing.
    #[must_use]
    pub fn with_letter_spacing(mut self, letter_spacing: f64) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_font_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_font_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }

    fn cache_key(&self) -> StyleKey {
        StyleKey {
            font_size: self.font_size.to_bits(),
            letter_spacing: self.letter_spacing.to_bits(),
            font_family: self.font_family.clone(),
            font_weight: self.font_weight,
            font_style: self.font_style,
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`, `"Helvetica Neue"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// CSS-style font styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width (the label's horizontal extent).
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Metrics of an empty string.
    pub const ZERO: Self = Self {
        advance_width: 0.0,
        ascent: 0.0,
        descent: 0.0,
        leading: 0.0,
    };

    /// Builds metrics from a plain `width × height` box.
    ///
    /// The whole height is attributed to `ascent`.
    #[must_use]
    pub fn from_box(width: f64, height: f64) -> Self {
        Self {
            advance_width: width,
            ascent: height,
            descent: 0.0,
            leading: 0.0,
        }
    }

    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// A tiny heuristic text measurer suitable for demos and early layout.
///
/// It assumes an average glyph width of ~0.6em (plus letter spacing) and a
/// baseline at ~0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let glyphs = text.chars().count() as f64;
        let advance_width = (0.6 * style.font_size + style.letter_spacing) * glyphs;
        TextMetrics {
            advance_width: advance_width.max(0.0),
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
            leading: 0.0,
        }
    }
}

/// Adapts a closure into a [`TextMeasurer`].
///
/// ```
/// use tickfit_text::{FnTextMeasurer, TextMeasurer, TextMetrics, TextStyle};
///
/// let m = FnTextMeasurer(|text: &str, _: &TextStyle| {
///     TextMetrics::from_box(text.len() as f64, 20.0)
/// });
/// assert_eq!(m.measure("abc", &TextStyle::default()).advance_width, 3.0);
/// ```
#[derive(Clone, Copy)]
pub struct FnTextMeasurer<F>(pub F);

impl<F> core::fmt::Debug for FnTextMeasurer<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnTextMeasurer").finish_non_exhaustive()
    }
}

impl<F> TextMeasurer for FnTextMeasurer<F>
where
    F: Fn(&str, &TextStyle) -> TextMetrics,
{
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (self.0)(text, style)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct StyleKey {
    font_size: u64,
    letter_spacing: u64,
    font_family: FontFamily,
    font_weight: FontWeight,
    font_style: FontStyle,
}

/// A memoizing wrapper around another [`TextMeasurer`].
///
/// Placement code measures every candidate label on every pass; embedders that
/// re-run placement on each frame can wrap their measurer in this type so each
/// distinct `(text, style)` pair is measured once.
pub struct CachingTextMeasurer<M> {
    inner: M,
    cache: RefCell<HashMap<(String, StyleKey), TextMetrics>>,
}

impl<M: core::fmt::Debug> core::fmt::Debug for CachingTextMeasurer<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CachingTextMeasurer")
            .field("inner", &self.inner)
            .field("cached", &self.cache.borrow().len())
            .finish()
    }
}

impl<M: TextMeasurer> CachingTextMeasurer<M> {
    /// Wraps `inner` with an empty cache.
    #[must_use]
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Returns `true` if nothing has been measured yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    /// Drops all cached measurements (e.g. after fonts finished loading).
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }

    /// Returns the wrapped measurer.
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: TextMeasurer> TextMeasurer for CachingTextMeasurer<M> {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let key = (String::from(text), style.cache_key());
        if let Some(metrics) = self.cache.borrow().get(&key) {
            return *metrics;
        }
        let metrics = self.inner.measure(text, style);
        self.cache.borrow_mut().insert(key, metrics);
        metrics
    }
}
