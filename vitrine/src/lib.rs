// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vitrine --heading-base-level=0

//! Vitrine: zoom-to-inspect for product grids.
//!
//! A product grid shows many items as uniform square cells. Picking one
//! enlarges the whole grid surface so that cell fills the center of an
//! inspection viewport; from there the user moves between items (vertically)
//! and between each item's media (horizontally) without zooming back out.
//!
//! This crate is the controller that ties the pieces together:
//!
//! - [`grid`] (`vitrine_grid`): cell geometry and the zoom transform.
//! - [`nav`] (`vitrine_nav`): the two-axis navigator, its transition lock,
//!   and the wheel/keyboard/touch adapters.
//! - [`Inspector`]: owns the transform and the open navigation session, and
//!   keeps them in step as input, filters, and measurements change.
//!
//! Hosts measure and paint; the inspector only computes. Time is passed in
//! as milliseconds on any monotonic clock, and [`Inspector::tick`] is polled
//! from a frame or timer callback ([`Inspector::next_deadline`] says when).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use vitrine::grid::{Measurements, TransformConfig};
//! use vitrine::nav::Item;
//! use vitrine::nav::input::{InputEvent, Key};
//! use vitrine::{Inspector, InspectorConfig};
//!
//! let items: Vec<Item<u32>> = (1..=4)
//!     .map(|id| Item::new(id, [format!("{id}.png")]).unwrap())
//!     .collect();
//!
//! let config = InspectorConfig {
//!     transform: TransformConfig {
//!         viewport_margin: 0.0,
//!         ..TransformConfig::default()
//!     },
//!     ..InspectorConfig::default()
//! };
//! let mut inspector = Inspector::new(config, 2).unwrap();
//! inspector.set_measurements(
//!     Measurements::new(
//!         Rect::new(0.0, 0.0, 400.0, 400.0),
//!         Rect::new(0.0, 0.0, 800.0, 600.0),
//!     ),
//!     0,
//! );
//!
//! // Zoom into the third item.
//! inspector.open(items, &3, 0).unwrap();
//! assert_eq!(inspector.transform().scale, 2.0);
//!
//! // Arrow down moves on to the fourth item.
//! inspector
//!     .handle_input(InputEvent::KeyDown(Key::ArrowDown), 10)
//!     .unwrap();
//! assert_eq!(inspector.snapshot().unwrap().item_id, 4);
//!
//! // Closing zooms out, then settles back to identity.
//! inspector.close(20);
//! assert!(inspector.transform().is_identity());
//! assert!(inspector.tick(220).unwrap().settled);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use vitrine_grid as grid;
pub use vitrine_nav as nav;

mod config;
mod error;
mod inspector;

pub use config::InspectorConfig;
pub use error::InspectError;
pub use inspector::{Inspector, Tick};
