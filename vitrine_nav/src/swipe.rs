// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe state helper: recognize vertical flicks from touch start/end pairs.
//!
//! ## Usage
//!
//! 1) Call [`SwipeState::start`] on touch start with the vertical position and time.
//! 2) Optionally call [`SwipeState::offset`] while the finger moves.
//! 3) Call [`SwipeState::end`] on touch end; it returns a [`Swipe`] when the
//!    gesture was long enough and fast enough to count as a flick.
//!
//! The recognizer only looks at the start and end of the gesture. A slow drag
//! that happens to cover the distance is not a flick.
//!
//! ## Minimal example
//!
//! ```
//! use vitrine_nav::motion::Direction;
//! use vitrine_nav::swipe::{SwipeConfig, SwipeState};
//!
//! let mut swipe = SwipeState::default();
//! let config = SwipeConfig::default();
//!
//! // Finger moves up by 80 units in 120ms: a forward flick.
//! swipe.start(500.0, 1_000);
//! let flick = swipe.end(420.0, 1_120, &config).unwrap();
//! assert_eq!(flick.direction, Direction::Forward);
//! assert_eq!(flick.distance, 80.0);
//! assert!(!swipe.is_tracking());
//! ```

use crate::motion::Direction;

/// Thresholds for flick recognition.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwipeConfig {
    /// Travel the gesture must exceed.
    pub min_distance: f64,
    /// Time the gesture must stay under.
    pub max_duration_ms: u64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            min_distance: 50.0,
            max_duration_ms: 300,
        }
    }
}

/// A recognized flick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swipe {
    /// [`Direction::Forward`] for an upward flick, [`Direction::Backward`] for downward.
    pub direction: Direction,
    /// Absolute vertical travel.
    pub distance: f64,
    /// Gesture duration.
    pub duration_ms: u64,
}

/// Tracks an in-progress touch gesture.
#[derive(Debug, Clone, Default, Copy)]
pub struct SwipeState {
    /// Vertical position where the touch started
    pub start_y: Option<f64>,
    /// Time the touch started
    pub start_time: Option<u64>,
}

impl SwipeState {
    /// Start tracking a new gesture, replacing any gesture in progress.
    pub fn start(&mut self, y: f64, now: u64) {
        self.start_y = Some(y);
        self.start_time = Some(now);
    }

    /// Signed travel from the start position; positive when moving up.
    pub fn offset(&self, y: f64) -> Option<f64> {
        self.start_y.map(|start_y| start_y - y)
    }

    /// Finish the gesture and classify it.
    ///
    /// Returns `None` when no gesture was in progress, when either position is
    /// not finite, when the travel is not strictly greater than
    /// [`SwipeConfig::min_distance`], or when the gesture took
    /// [`SwipeConfig::max_duration_ms`] or longer.
    pub fn end(&mut self, y: f64, now: u64, config: &SwipeConfig) -> Option<Swipe> {
        let (start_y, start_time) = (self.start_y.take()?, self.start_time.take()?);
        let delta = start_y - y;
        let duration_ms = now.saturating_sub(start_time);
        if !delta.is_finite()
            || delta.abs() <= config.min_distance
            || duration_ms >= config.max_duration_ms
        {
            return None;
        }
        Some(Swipe {
            direction: if delta > 0.0 {
                Direction::Forward
            } else {
                Direction::Backward
            },
            distance: delta.abs(),
            duration_ms,
        })
    }

    /// Abandon the gesture in progress.
    pub fn cancel(&mut self) {
        self.start_y = None;
        self.start_time = None;
    }

    /// Returns `true` while a gesture is in progress
    pub fn is_tracking(&self) -> bool {
        self.start_y.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_swipe_state_is_idle() {
        let swipe = SwipeState::default();
        assert!(!swipe.is_tracking());
        assert!(swipe.start_time.is_none());
    }

    #[test]
    fn downward_flick_is_backward() {
        let mut swipe = SwipeState::default();
        swipe.start(100.0, 0);
        let flick = swipe.end(190.0, 200, &SwipeConfig::default()).unwrap();
        assert_eq!(flick.direction, Direction::Backward);
        assert_eq!(flick.distance, 90.0);
        assert_eq!(flick.duration_ms, 200);
    }

    #[test]
    fn short_travel_is_ignored() {
        let mut swipe = SwipeState::default();
        swipe.start(100.0, 0);
        assert_eq!(swipe.end(50.0, 10, &SwipeConfig::default()), None);
        assert!(!swipe.is_tracking());
    }

    #[test]
    fn slow_gesture_is_ignored() {
        let mut swipe = SwipeState::default();
        swipe.start(400.0, 0);
        assert_eq!(swipe.end(100.0, 300, &SwipeConfig::default()), None);
    }

    #[test]
    fn non_finite_positions_are_ignored() {
        let config = SwipeConfig::default();
        let mut swipe = SwipeState::default();
        swipe.start(f64::NAN, 0);
        assert_eq!(swipe.end(100.0, 50, &config), None);
        assert!(!swipe.is_tracking());

        swipe.start(300.0, 0);
        assert_eq!(swipe.end(f64::NAN, 50, &config), None);

        swipe.start(300.0, 0);
        assert_eq!(swipe.end(f64::INFINITY, 50, &config), None);
    }

    #[test]
    fn end_without_start_is_ignored() {
        let mut swipe = SwipeState::default();
        assert_eq!(swipe.end(0.0, 0, &SwipeConfig::default()), None);
    }

    #[test]
    fn offset_tracks_from_start() {
        let mut swipe = SwipeState::default();
        assert_eq!(swipe.offset(10.0), None);
        swipe.start(300.0, 0);
        assert_eq!(swipe.offset(280.0), Some(20.0));
        assert_eq!(swipe.offset(310.0), Some(-10.0));
    }

    #[test]
    fn start_overwrites_previous_gesture() {
        let mut swipe = SwipeState::default();
        swipe.start(0.0, 0);
        swipe.start(500.0, 1_000);
        let flick = swipe.end(400.0, 1_100, &SwipeConfig::default()).unwrap();
        assert_eq!(flick.distance, 100.0);
        assert_eq!(flick.duration_ms, 100);
    }

    #[test]
    fn cancel_resets_state() {
        let mut swipe = SwipeState::default();
        swipe.start(10.0, 5);
        swipe.cancel();
        assert!(!swipe.is_tracking());
        assert_eq!(swipe.end(-100.0, 6, &SwipeConfig::default()), None);
    }
}
