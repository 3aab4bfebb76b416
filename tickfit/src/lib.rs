// Copyright 2025 the Tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis tick label placement.
//!
//! Given the candidate ticks of one axis (label text plus pixel coordinate), the
//! axis bounding box and a [`TextMeasurer`], this crate decides which labels are
//! shown so that none overlap, and where each shown label anchors:
//! - [`Interval`] selects the policy (fixed step, preserve start/end, both ends,
//!   or equidistant fitting).
//! - [`AxisLayoutConfig`] carries the axis geometry and label options.
//! - [`compute_tick_placement`] returns the kept ticks as [`PlacedTick`]s.
//!
//! Tick value generation and rendering are out of scope; measurement is
//! delegated to `tickfit_text` backends.
//!
//! ```
//! use kurbo::Rect;
//! use tickfit::{AxisLayoutConfig, Interval, TickDescriptor, compute_tick_placement};
//! use tickfit_text::HeuristicTextMeasurer;
//!
//! let ticks = (0..=10).map(|i| TickDescriptor::new(format!("{}", i * 1000), 10.0 + 20.0 * i as f64));
//! let config = AxisLayoutConfig::bottom(Rect::new(0.0, 0.0, 220.0, 30.0), ticks)
//!     .with_interval(Interval::PreserveStart);
//! let placed = compute_tick_placement(&config, &HeuristicTextMeasurer);
//! assert_eq!(placed[0].value, "0");
//! assert!(placed.len() < 11);
//! ```

#![no_std]

extern crate alloc;

mod config;
mod equidistant;
#[cfg(not(feature = "std"))]
mod float;
mod footprint;
mod geometry;
mod interval;
mod placement;
mod scan;
mod step;
mod tick;

pub use config::{AxisLayoutConfig, TickFormatter};
pub use footprint::angled_width;
pub use geometry::{AxisGeometry, AxisOrient, Boundaries, Direction, SizeKey};
pub use interval::Interval;
pub use placement::compute_tick_placement;
pub use tick::{PlacedTick, TickDescriptor};
pub use tickfit_text::{TextMeasurer, TextStyle};
