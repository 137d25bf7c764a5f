// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input adapters: wheel, keyboard, and touch funnelled into [`Intent`]s.
//!
//! Each channel has its own filter (a wheel deadzone, a key map, a flick
//! recognizer) but they all end in the same guarded [`Navigator`]
//! operations. No adapter tracks the transition lock itself; a wheel burst
//! during the cooldown produces intents that the navigator drops.
//!
//! ```
//! use vitrine_nav::input::{InputEvent, InputRouter, Key};
//! use vitrine_nav::{Item, Navigator, NavigationConfig};
//!
//! let items = vec![
//!     Item::new('a', ["a.png"]).unwrap(),
//!     Item::new('b', ["b.png"]).unwrap(),
//! ];
//! let mut nav = Navigator::open(items, &'a', NavigationConfig::default()).unwrap();
//! let mut input = InputRouter::default();
//!
//! // Two small wheel ticks add up past the deadzone.
//! assert!(input.dispatch(&mut nav, InputEvent::Wheel { delta_y: 6.0 }, 0).is_none());
//! let moved = input.dispatch(&mut nav, InputEvent::Wheel { delta_y: 6.0 }, 16).unwrap();
//! assert_eq!(moved.snapshot().unwrap().item_id, 'b');
//!
//! // Escape leaves inspection mode.
//! input.dispatch(&mut nav, InputEvent::KeyDown(Key::Escape), 20);
//! assert!(!nav.is_open());
//! ```

use core::hash::Hash;

use crate::motion::{Axis, Direction};
use crate::navigator::{Intent, Navigator, Transition};
use crate::swipe::{SwipeConfig, SwipeState};

/// Keys the key map understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Escape.
    Escape,
    /// Anything else.
    Other,
}

/// A raw input event from the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Vertical wheel or trackpad scroll; positive scrolls down.
    Wheel {
        /// Scroll delta.
        delta_y: f64,
    },
    /// A key was pressed.
    KeyDown(Key),
    /// A finger touched down.
    TouchStart {
        /// Vertical touch position.
        y: f64,
    },
    /// A finger lifted.
    TouchEnd {
        /// Vertical touch position.
        y: f64,
    },
    /// A media indicator dot was clicked.
    IndicatorClick {
        /// Media entry the dot stands for.
        index: usize,
    },
}

/// Tuning for [`InputRouter`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputConfig {
    /// Accumulated wheel travel needed to fire one intent.
    pub wheel_threshold: f64,
    /// Flick recognition thresholds.
    pub swipe: SwipeConfig,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            wheel_threshold: 10.0,
            swipe: SwipeConfig::default(),
        }
    }
}

/// Maps a key press to an intent.
///
/// Down/up move between items, right/left between media entries, and escape
/// leaves inspection mode.
#[must_use]
pub fn key_intent(key: Key) -> Option<Intent> {
    match key {
        Key::ArrowDown => Some(Intent::Advance(Axis::Longitudinal)),
        Key::ArrowUp => Some(Intent::Retreat(Axis::Longitudinal)),
        Key::ArrowRight => Some(Intent::Advance(Axis::Lateral)),
        Key::ArrowLeft => Some(Intent::Retreat(Axis::Lateral)),
        Key::Escape => Some(Intent::Cancel),
        Key::Other => None,
    }
}

fn longitudinal(direction: Direction) -> Option<Intent> {
    match direction {
        Direction::Forward => Some(Intent::Advance(Axis::Longitudinal)),
        Direction::Backward => Some(Intent::Retreat(Axis::Longitudinal)),
        Direction::None => None,
    }
}

/// Wheel deadzone: sums deltas until they cross the threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelAccumulator {
    threshold: f64,
    accumulated: f64,
}

impl Default for WheelAccumulator {
    fn default() -> Self {
        Self::new(InputConfig::default().wheel_threshold)
    }
}

impl WheelAccumulator {
    /// Creates an accumulator firing every `threshold` units of travel.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            accumulated: 0.0,
        }
    }

    /// Travel accumulated since the last fired intent.
    #[must_use]
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Adds a wheel delta. Returns the direction once the accumulated travel
    /// reaches the threshold, then starts over. Reversing direction discards
    /// travel accumulated the other way.
    pub fn push(&mut self, delta: f64) -> Option<Direction> {
        if !delta.is_finite() || delta == 0.0 {
            return None;
        }
        if self.accumulated != 0.0 && (self.accumulated > 0.0) != (delta > 0.0) {
            self.accumulated = 0.0;
        }
        self.accumulated += delta;
        if self.accumulated.abs() < self.threshold {
            return None;
        }
        let direction = if self.accumulated > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.accumulated = 0.0;
        Some(direction)
    }

    /// Discards accumulated travel.
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}

/// Turns raw events from every channel into navigator intents.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputRouter {
    config: InputConfig,
    wheel: WheelAccumulator,
    swipe: SwipeState,
}

impl InputRouter {
    /// Creates a router with the given thresholds.
    #[must_use]
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            wheel: WheelAccumulator::new(config.wheel_threshold),
            swipe: SwipeState::default(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Classifies an event. Gesture state is updated even when no intent results.
    pub fn intent(&mut self, event: InputEvent, now: u64) -> Option<Intent> {
        match event {
            InputEvent::Wheel { delta_y } => self.wheel.push(delta_y).and_then(longitudinal),
            InputEvent::KeyDown(key) => key_intent(key),
            InputEvent::TouchStart { y } => {
                self.swipe.start(y, now);
                None
            }
            InputEvent::TouchEnd { y } => self
                .swipe
                .end(y, now, &self.config.swipe)
                .and_then(|flick| longitudinal(flick.direction)),
            InputEvent::IndicatorClick { index } => Some(Intent::SelectImage(index)),
        }
    }

    /// Classifies an event and applies the resulting intent to `navigator`.
    ///
    /// Events arriving while the navigator is closed are discarded along with
    /// any partial gesture, so nothing carries over into the next session.
    pub fn dispatch<K: Clone + Eq + Hash>(
        &mut self,
        navigator: &mut Navigator<K>,
        event: InputEvent,
        now: u64,
    ) -> Option<Transition<K>> {
        if !navigator.is_open() {
            self.reset();
            return None;
        }
        let intent = self.intent(event, now)?;
        let transition = navigator.apply(intent, now);
        #[cfg(feature = "tracing")]
        if transition.is_none() {
            tracing::trace!(?intent, now, "intent had no effect");
        }
        if matches!(transition, Some(Transition::Closed(_))) {
            self.reset();
        }
        transition
    }

    /// Forgets partial wheel travel and any touch in progress.
    pub fn reset(&mut self) {
        self.wheel.reset();
        self.swipe.cancel();
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{InputConfig, InputEvent, InputRouter, Key, WheelAccumulator, key_intent};
    use crate::motion::{Axis, Direction};
    use crate::navigator::{CloseReason, Intent, NavigationConfig, Navigator, Transition};
    use crate::Item;

    fn navigator(count: u32, media: usize) -> Navigator<u32> {
        let items: Vec<Item<u32>> = (1..=count)
            .map(|id| Item::new(id, (0..media).map(|m| alloc::format!("{id}/{m}.png"))).unwrap())
            .collect();
        Navigator::open(items, &1, NavigationConfig::default()).unwrap()
    }

    #[test]
    fn wheel_fires_at_threshold_and_rearms() {
        let mut wheel = WheelAccumulator::new(10.0);
        assert_eq!(wheel.push(4.0), None);
        assert_eq!(wheel.push(6.0), Some(Direction::Forward));
        assert_eq!(wheel.accumulated(), 0.0);
        assert_eq!(wheel.push(-12.0), Some(Direction::Backward));
    }

    #[test]
    fn wheel_reversal_discards_travel() {
        let mut wheel = WheelAccumulator::new(10.0);
        assert_eq!(wheel.push(9.0), None);
        assert_eq!(wheel.push(-3.0), None);
        assert_eq!(wheel.accumulated(), -3.0);
        assert_eq!(wheel.push(0.0), None);
        assert_eq!(wheel.push(f64::NAN), None);
        assert_eq!(wheel.accumulated(), -3.0);
    }

    #[test]
    fn key_map() {
        assert_eq!(
            key_intent(Key::ArrowDown),
            Some(Intent::Advance(Axis::Longitudinal))
        );
        assert_eq!(key_intent(Key::ArrowLeft), Some(Intent::Retreat(Axis::Lateral)));
        assert_eq!(key_intent(Key::Escape), Some(Intent::Cancel));
        assert_eq!(key_intent(Key::Other), None);
    }

    #[test]
    fn wheel_burst_moves_one_item() {
        let mut nav = navigator(5, 1);
        let mut input = InputRouter::default();
        let moves = (0..20_u64)
            .filter_map(|i| input.dispatch(&mut nav, InputEvent::Wheel { delta_y: 40.0 }, i * 10))
            .count();
        assert_eq!(moves, 1);
        assert_eq!(nav.item_index(), Some(1));
    }

    #[test]
    fn all_channels_share_the_lock() {
        let mut nav = navigator(5, 1);
        let mut input = InputRouter::default();
        assert!(
            input
                .dispatch(&mut nav, InputEvent::KeyDown(Key::ArrowDown), 0)
                .is_some()
        );
        input.dispatch(&mut nav, InputEvent::TouchStart { y: 400.0 }, 10);
        assert!(
            input
                .dispatch(&mut nav, InputEvent::TouchEnd { y: 300.0 }, 60)
                .is_none()
        );
        assert!(
            input
                .dispatch(&mut nav, InputEvent::Wheel { delta_y: 50.0 }, 100)
                .is_none()
        );
        assert_eq!(nav.item_index(), Some(1));

        input.dispatch(&mut nav, InputEvent::TouchStart { y: 300.0 }, 400);
        let t = input
            .dispatch(&mut nav, InputEvent::TouchEnd { y: 400.0 }, 450)
            .unwrap();
        assert_eq!(t.snapshot().unwrap().item_index, 0);
    }

    #[test]
    fn non_finite_touch_does_not_move() {
        let mut nav = navigator(3, 1);
        let mut input = InputRouter::default();
        nav.advance_item(0);
        input.dispatch(&mut nav, InputEvent::TouchStart { y: 300.0 }, 1_000);
        assert!(
            input
                .dispatch(&mut nav, InputEvent::TouchEnd { y: f64::NAN }, 1_050)
                .is_none()
        );
        assert_eq!(nav.item_index(), Some(1));
    }

    #[test]
    fn lateral_keys_and_indicator() {
        let mut nav = navigator(1, 3);
        let mut input = InputRouter::new(InputConfig::default());
        let t = input
            .dispatch(&mut nav, InputEvent::KeyDown(Key::ArrowLeft), 0)
            .unwrap();
        assert_eq!(t.snapshot().unwrap().image_index, 2);
        let t = input
            .dispatch(&mut nav, InputEvent::IndicatorClick { index: 0 }, 1)
            .unwrap();
        assert_eq!(t.snapshot().unwrap().direction, Direction::Backward);
    }

    #[test]
    fn close_discards_partial_gestures() {
        let mut nav = navigator(3, 1);
        let mut input = InputRouter::default();
        input.dispatch(&mut nav, InputEvent::Wheel { delta_y: 8.0 }, 0);
        input.dispatch(&mut nav, InputEvent::TouchStart { y: 100.0 }, 0);
        assert_eq!(
            input.dispatch(&mut nav, InputEvent::KeyDown(Key::Escape), 5),
            Some(Transition::Closed(CloseReason::Cancelled))
        );
        assert_eq!(input.wheel.accumulated(), 0.0);
        assert!(!input.swipe.is_tracking());
        assert!(
            input
                .dispatch(&mut nav, InputEvent::KeyDown(Key::ArrowDown), 10)
                .is_none()
        );
    }
}
