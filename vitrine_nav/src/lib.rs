// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vitrine_nav --heading-base-level=0

//! Vitrine Nav: two-axis navigation for a zoomed-in inspection view.
//!
//! Inside inspection mode the user moves along two independent axes:
//!
//! - **longitudinal**: from item to item, clamped at both ends and paced by a
//!   transition lock so a burst of input cannot outrun the animation;
//! - **lateral**: through the media entries of the current item, wrapping
//!   around, with each item remembering where the user left it.
//!
//! The crate is split into small pieces:
//!
//! - [`Navigator`]: the state machine. Every successful change returns a
//!   [`Snapshot`] for the renderer.
//! - [`input`]: wheel, keyboard, and touch adapters that produce [`Intent`]s.
//! - [`swipe`]: flick recognition for touch input.
//! - [`motion`]: axes, directions, and the [`motion::Slide`] metadata used to
//!   pick animation variants.
//! - [`timer`]: host-clocked deadlines used for the transition lock.
//!
//! Nothing here reads a clock, spawns a task, or paints. Hosts pass the
//! current time in milliseconds into the calls that need it and poll
//! [`Navigator::tick`] to release the lock on schedule.
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_nav::motion::{Axis, Direction, Edge};
//! use vitrine_nav::{Item, Navigator, NavigationConfig};
//!
//! let items = vec![
//!     Item::new("tee", ["tee.mp4", "tee-1.png", "tee-2.png"]).unwrap(),
//!     Item::new("jeans", ["jeans.mp4", "jeans-1.png"]).unwrap(),
//! ];
//! let mut nav = Navigator::open(items, &"tee", NavigationConfig::default()).unwrap();
//!
//! let snap = nav.retreat_image().unwrap();
//! assert_eq!(snap.image_index, 2);
//! assert_eq!(snap.slide().enter_edge(), Some(Edge::Left));
//!
//! let snap = nav.advance_item(0).unwrap();
//! assert_eq!(snap.item_id, "jeans");
//! assert_eq!((snap.axis, snap.direction), (Axis::Longitudinal, Direction::Forward));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod error;
pub mod input;
mod item;
pub mod motion;
mod navigator;
pub mod swipe;
pub mod timer;

pub use error::NavError;
pub use item::{Item, MediaKind, MediaRef};
pub use navigator::{CloseReason, Intent, NavigationConfig, Navigator, Snapshot, Transition};
