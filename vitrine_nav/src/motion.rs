// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axes, directions, and the slide metadata a renderer derives from them.
//!
//! The navigator only records *which* axis moved and *which way*. Choosing
//! the edge an incoming media entry slides in from is a pure function of
//! that pair, captured by [`Slide`].
//!
//! ```
//! use kurbo::Vec2;
//! use vitrine_nav::motion::{Axis, Direction, Edge, Slide, SlideDistances};
//!
//! let slide = Slide::new(Axis::Lateral, Direction::Forward);
//! assert_eq!(slide.enter_edge(), Some(Edge::Right));
//! assert_eq!(slide.exit_edge(), Some(Edge::Left));
//! assert_eq!(
//!     slide.enter_offset(&SlideDistances::default()),
//!     Vec2::new(1000.0, 0.0)
//! );
//! ```

use kurbo::Vec2;

/// Navigation axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Axis {
    /// Between the media entries of the current item.
    Lateral,
    /// Between items.
    Longitudinal,
}

/// Direction of the most recent move along an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// Toward higher indices.
    Forward,
    /// Toward lower indices.
    Backward,
    /// No move has happened on this axis yet.
    #[default]
    None,
}

impl Direction {
    /// `1.0`, `-1.0`, or `0.0`.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
            Self::None => 0.0,
        }
    }

    /// The opposite direction; [`Direction::None`] stays as it is.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
            Self::None => Self::None,
        }
    }
}

/// Edge of the media frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
}

impl Edge {
    /// Offset that places content just beyond this edge.
    #[must_use]
    pub fn offset(self, distances: &SlideDistances) -> Vec2 {
        match self {
            Self::Left => Vec2::new(-distances.lateral, 0.0),
            Self::Right => Vec2::new(distances.lateral, 0.0),
            Self::Top => Vec2::new(0.0, -distances.longitudinal),
            Self::Bottom => Vec2::new(0.0, distances.longitudinal),
        }
    }
}

/// How far and how long slide animations travel.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SlideDistances {
    /// Horizontal travel for media changes.
    pub lateral: f64,
    /// Vertical travel for item changes.
    pub longitudinal: f64,
    /// Duration of one slide.
    pub duration_ms: u64,
}

impl Default for SlideDistances {
    fn default() -> Self {
        Self {
            lateral: 1000.0,
            longitudinal: 600.0,
            duration_ms: 300,
        }
    }
}

/// Animation variant for a navigation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Slide {
    /// Axis that moved.
    pub axis: Axis,
    /// Direction it moved in.
    pub direction: Direction,
}

impl Slide {
    /// Creates a slide descriptor.
    #[must_use]
    pub fn new(axis: Axis, direction: Direction) -> Self {
        Self { axis, direction }
    }

    /// Edge the incoming content enters from, or `None` for an in-place fade.
    #[must_use]
    pub fn enter_edge(self) -> Option<Edge> {
        match (self.axis, self.direction) {
            (_, Direction::None) => None,
            (Axis::Lateral, Direction::Forward) => Some(Edge::Right),
            (Axis::Lateral, Direction::Backward) => Some(Edge::Left),
            (Axis::Longitudinal, Direction::Forward) => Some(Edge::Bottom),
            (Axis::Longitudinal, Direction::Backward) => Some(Edge::Top),
        }
    }

    /// Edge the outgoing content leaves through.
    #[must_use]
    pub fn exit_edge(self) -> Option<Edge> {
        Self::new(self.axis, self.direction.reversed()).enter_edge()
    }

    /// Starting offset of the incoming content.
    #[must_use]
    pub fn enter_offset(self, distances: &SlideDistances) -> Vec2 {
        self.enter_edge()
            .map_or(Vec2::ZERO, |edge| edge.offset(distances))
    }

    /// Final offset of the outgoing content.
    #[must_use]
    pub fn exit_offset(self, distances: &SlideDistances) -> Vec2 {
        self.exit_edge()
            .map_or(Vec2::ZERO, |edge| edge.offset(distances))
    }
}
