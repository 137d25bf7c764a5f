// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vitrine_grid --heading-base-level=0

//! Vitrine Grid: square-cell grid geometry and cell zoom transforms.
//!
//! This crate is headless and does no measuring of its own. Callers supply
//! plain numbers and bounding boxes; the crate answers:
//! - Where each cell of a uniform grid sits ([`GridLayout`], [`CellPosition`]).
//! - Which cell lies under a point ([`GridLayout::item_at_point`]).
//! - How to translate and scale the whole grid surface so one cell is
//!   enlarged onto the center of a viewport ([`TransformCalculator`]).
//! - How many columns to show for a viewport width and zoom step
//!   ([`responsive`]).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use vitrine_grid::{GridLayout, Measurements, TransformCalculator, TransformConfig};
//!
//! // Two columns in a 400px wide container.
//! let layout = GridLayout::new(2, 400.0, 0.0).unwrap();
//! let cell = layout.position(2);
//! assert_eq!(cell.center(), Point::new(100.0, 300.0));
//! assert_eq!(layout.item_at_point(cell.center(), 4), Some(2));
//!
//! // Zoom the third of four items into an 800x600 viewport.
//! let calc = TransformCalculator::new(TransformConfig {
//!     viewport_margin: 0.0,
//!     ..TransformConfig::default()
//! });
//! let m = Measurements::new(
//!     Rect::new(0.0, 0.0, 400.0, 400.0),
//!     Rect::new(0.0, 0.0, 800.0, 600.0),
//! );
//! let ids = ["a", "b", "c", "d"];
//! let t = calc.compute(&"c", 2, &m, &ids).unwrap();
//! assert_eq!(t.scale, 2.0);
//!
//! // The cell center lands on the viewport center.
//! let moved = t.apply(Rect::new(0.0, 0.0, 400.0, 400.0), cell.center());
//! assert_eq!(moved, Point::new(400.0, 300.0));
//! ```
//!
//! ## Design notes
//!
//! - Scaling is anchored at the selected cell's center, so the translation
//!   is simply the vector between the cell center and the target center.
//! - The default [`ScalePolicy::Floor`] keeps the zoom integral to avoid
//!   sub-pixel seams between cells, at the cost of a slightly looser fit.
//! - A selection that is no longer part of the active collection yields
//!   [`Transform::IDENTITY`] rather than an error.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod error;
mod layout;
pub mod responsive;
mod transform;

pub use error::LayoutError;
pub use layout::{CellPosition, GridLayout};
pub use transform::{
    Measurements, ScalePolicy, Transform, TransformCalculator, TransformConfig,
    TransformDebugInfo, TransformOrigin,
};
