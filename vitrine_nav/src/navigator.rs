// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-axis navigation over items and their media.
//!
//! ## Usage
//!
//! 1) Open a session with [`Navigator::open`], seeded with the item the user
//!    zoomed into.
//! 2) Feed intents (directly, or through [`crate::input::InputRouter`]) and
//!    hand every returned [`Snapshot`] to the renderer.
//! 3) Call [`Navigator::tick`] from the host's timer or frame callback so the
//!    transition lock is released on time.
//! 4) When the active collection changes, call [`Navigator::reconcile`]; if
//!    the current item disappeared the session closes.
//!
//! ## Axes
//!
//! - Longitudinal moves (between items) clamp at both ends and arm a
//!   transition lock for [`NavigationConfig::cooldown_ms`]. While the lock is
//!   held further longitudinal moves are dropped. The lock is checked and set
//!   inside the same `&mut self` call, so no other input can slip in between.
//! - Lateral moves (between media entries) wrap around and are never locked.
//!   Each item remembers its own media index, so returning to an item shows
//!   the entry that was last on screen.
//!
//! ## Minimal example
//!
//! ```
//! use vitrine_nav::{Item, Navigator, NavigationConfig};
//!
//! let items = vec![
//!     Item::new(1_u32, ["1.mp4", "1-1.png", "1-2.png"]).unwrap(),
//!     Item::new(2_u32, ["2.mp4", "2-1.png"]).unwrap(),
//! ];
//! let mut nav = Navigator::open(items, &1, NavigationConfig::default()).unwrap();
//!
//! nav.advance_image();
//! let snap = nav.advance_item(0).unwrap();
//! assert_eq!((snap.item_id, snap.image_index), (2, 0));
//!
//! // Still inside the 300ms cooldown: ignored.
//! assert!(nav.retreat_item(100).is_none());
//!
//! let snap = nav.retreat_item(300).unwrap();
//! assert_eq!((snap.item_id, snap.image_index), (1, 1));
//! ```

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::motion::{Axis, Direction, Slide};
use crate::timer::Deadline;
use crate::{Item, NavError};

/// Tuning for [`Navigator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavigationConfig {
    /// How long a longitudinal move locks out the next one.
    pub cooldown_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self { cooldown_ms: 300 }
    }
}

/// A navigation request, independent of the input channel that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Move forward along an axis.
    Advance(Axis),
    /// Move backward along an axis.
    Retreat(Axis),
    /// Jump straight to a media entry of the current item.
    SelectImage(usize),
    /// Leave inspection mode.
    Cancel,
}

/// Why a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CloseReason {
    /// The user asked to leave.
    Cancelled,
    /// The current item is no longer part of the active collection.
    ItemRemoved,
}

/// Immutable view of the navigation state after a successful change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot<K> {
    /// Key of the item on screen.
    pub item_id: K,
    /// Ordinal of that item within the active collection.
    pub item_index: usize,
    /// Media entry on screen.
    pub image_index: usize,
    /// Number of media entries of the item on screen.
    pub image_count: usize,
    /// Axis of the most recent move.
    pub axis: Axis,
    /// Direction of the most recent move on that axis.
    pub direction: Direction,
}

impl<K> Snapshot<K> {
    /// Animation variant for the move that produced this snapshot.
    #[must_use]
    pub fn slide(&self) -> Slide {
        Slide::new(self.axis, self.direction)
    }
}

/// Outcome of a state change, for the rendering collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition<K> {
    /// The item or media on screen changed.
    Moved(Snapshot<K>),
    /// The session ended.
    Closed(CloseReason),
}

impl<K> Transition<K> {
    /// The snapshot, if this is a move.
    #[must_use]
    pub fn snapshot(&self) -> Option<&Snapshot<K>> {
        match self {
            Self::Moved(snapshot) => Some(snapshot),
            Self::Closed(_) => None,
        }
    }
}

/// Last-viewed media index per item key. Keys never seen read as `0`.
#[derive(Clone, Debug)]
struct ImageMemory<K> {
    indices: HashMap<K, usize>,
}

impl<K: Eq + Hash> ImageMemory<K> {
    fn new() -> Self {
        Self {
            indices: HashMap::new(),
        }
    }

    fn get(&self, id: &K, media_len: usize) -> usize {
        self.indices
            .get(id)
            .map_or(0, |&index| index % media_len.max(1))
    }

    fn set(&mut self, id: K, index: usize) {
        self.indices.insert(id, index);
    }

    fn retain_items(&mut self, items: &[Item<K>]) {
        self.indices
            .retain(|id, _| items.iter().any(|item| item.id() == id));
    }
}

#[derive(Clone, Debug)]
struct Session<K> {
    items: Vec<Item<K>>,
    item_index: usize,
    memory: ImageMemory<K>,
    last_axis: Axis,
    longitudinal: Direction,
    lateral: Direction,
    lock: Deadline,
}

impl<K: Clone + Eq + Hash> Session<K> {
    fn current(&self) -> &Item<K> {
        &self.items[self.item_index]
    }

    fn image_index(&self) -> usize {
        let item = self.current();
        self.memory.get(item.id(), item.media_len())
    }

    fn snapshot(&self) -> Snapshot<K> {
        let item = self.current();
        let direction = match self.last_axis {
            Axis::Lateral => self.lateral,
            Axis::Longitudinal => self.longitudinal,
        };
        Snapshot {
            item_id: item.id().clone(),
            item_index: self.item_index,
            image_index: self.image_index(),
            image_count: item.media_len(),
            axis: self.last_axis,
            direction,
        }
    }

    fn set_image(&mut self, index: usize, direction: Direction) -> Snapshot<K> {
        let id = self.items[self.item_index].id().clone();
        self.memory.set(id, index);
        self.lateral = direction;
        self.last_axis = Axis::Lateral;
        self.snapshot()
    }
}

/// State machine tracking the item and media on screen in inspection mode.
///
/// A navigator is either open (a session is in progress) or closed. Every
/// operation on a closed navigator is a no-op returning `None`. Closing drops
/// the session together with its transition lock, so nothing scheduled by the
/// session can fire afterwards.
#[derive(Clone, Debug)]
pub struct Navigator<K> {
    session: Option<Session<K>>,
    config: NavigationConfig,
}

impl<K: Clone + Eq + Hash> Navigator<K> {
    /// Opens a session over `items`, starting at the item keyed `start`.
    ///
    /// # Errors
    ///
    /// - [`NavError::EmptyCollection`] if `items` is empty.
    /// - [`NavError::NotFound`] if no item is keyed `start`.
    pub fn open(
        items: Vec<Item<K>>,
        start: &K,
        config: NavigationConfig,
    ) -> Result<Self, NavError> {
        if items.is_empty() {
            return Err(NavError::EmptyCollection);
        }
        let item_index = items
            .iter()
            .position(|item| item.id() == start)
            .ok_or(NavError::NotFound)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(item_index, items = items.len(), "navigation opened");

        Ok(Self {
            session: Some(Session {
                items,
                item_index,
                memory: ImageMemory::new(),
                last_axis: Axis::Lateral,
                longitudinal: Direction::None,
                lateral: Direction::None,
                lock: Deadline::new(),
            }),
            config,
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Returns `true` while a session is in progress.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// The active collection, empty once closed.
    #[must_use]
    pub fn items(&self) -> &[Item<K>] {
        match &self.session {
            Some(session) => &session.items,
            None => &[],
        }
    }

    /// The item on screen.
    #[must_use]
    pub fn current_item(&self) -> Option<&Item<K>> {
        self.session.as_ref().map(Session::current)
    }

    /// Ordinal of the item on screen.
    #[must_use]
    pub fn item_index(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.item_index)
    }

    /// Media entry on screen.
    #[must_use]
    pub fn image_index(&self) -> Option<usize> {
        self.session.as_ref().map(Session::image_index)
    }

    /// Remembered media index for any item of the active collection.
    ///
    /// Returns `None` if the navigator is closed or the item is not active.
    #[must_use]
    pub fn image_index_of(&self, id: &K) -> Option<usize> {
        let session = self.session.as_ref()?;
        let item = session.items.iter().find(|item| item.id() == id)?;
        Some(session.memory.get(id, item.media_len()))
    }

    /// Axis of the most recent move.
    #[must_use]
    pub fn last_axis(&self) -> Option<Axis> {
        self.session.as_ref().map(|s| s.last_axis)
    }

    /// Direction of the most recent move along `axis`.
    #[must_use]
    pub fn direction(&self, axis: Axis) -> Direction {
        self.session.as_ref().map_or(Direction::None, |s| match axis {
            Axis::Lateral => s.lateral,
            Axis::Longitudinal => s.longitudinal,
        })
    }

    /// Returns `true` while longitudinal moves are locked out at `now`.
    #[must_use]
    pub fn is_locked(&self, now: u64) -> bool {
        self.session.as_ref().is_some_and(|s| s.lock.is_pending(now))
    }

    /// Time at which the transition lock expires, if armed.
    #[must_use]
    pub fn lock_expiry(&self) -> Option<u64> {
        self.session.as_ref().and_then(|s| s.lock.due())
    }

    /// The current state, without changing anything.
    #[must_use]
    pub fn snapshot(&self) -> Option<Snapshot<K>> {
        self.session.as_ref().map(Session::snapshot)
    }

    /// Releases the transition lock if it has expired at `now`.
    ///
    /// Returns `true` if the lock was released by this call. The lock guard
    /// also treats an expired lock as released, so missing a tick never keeps
    /// the user locked out; ticking just keeps [`Navigator::lock_expiry`]
    /// accurate.
    pub fn tick(&mut self, now: u64) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let released = session.lock.fire(now);
        #[cfg(feature = "tracing")]
        if released {
            tracing::trace!(now, "transition lock released");
        }
        released
    }

    /// Moves to the next item, unless locked or already on the last item.
    pub fn advance_item(&mut self, now: u64) -> Option<Snapshot<K>> {
        self.step_item(Direction::Forward, now)
    }

    /// Moves to the previous item, unless locked or already on the first item.
    pub fn retreat_item(&mut self, now: u64) -> Option<Snapshot<K>> {
        self.step_item(Direction::Backward, now)
    }

    /// Shows the next media entry of the current item, wrapping to the first.
    pub fn advance_image(&mut self) -> Option<Snapshot<K>> {
        self.step_image(Direction::Forward)
    }

    /// Shows the previous media entry of the current item, wrapping to the last.
    pub fn retreat_image(&mut self) -> Option<Snapshot<K>> {
        self.step_image(Direction::Backward)
    }

    /// Moves forward along `axis`.
    pub fn advance(&mut self, axis: Axis, now: u64) -> Option<Snapshot<K>> {
        match axis {
            Axis::Longitudinal => self.advance_item(now),
            Axis::Lateral => self.advance_image(),
        }
    }

    /// Moves backward along `axis`.
    pub fn retreat(&mut self, axis: Axis, now: u64) -> Option<Snapshot<K>> {
        match axis {
            Axis::Longitudinal => self.retreat_item(now),
            Axis::Lateral => self.retreat_image(),
        }
    }

    /// Jumps to media entry `target` of the current item.
    ///
    /// The recorded direction is forward for a higher index and backward for
    /// a lower one. Selecting the entry already on screen, or an index past
    /// the end, changes nothing.
    pub fn select_image(&mut self, target: usize) -> Option<Snapshot<K>> {
        let session = self.session.as_mut()?;
        let len = session.current().media_len();
        let current = session.image_index();
        if target >= len || target == current {
            return None;
        }
        let direction = if target > current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        Some(session.set_image(target, direction))
    }

    /// Applies an intent from any input channel.
    pub fn apply(&mut self, intent: Intent, now: u64) -> Option<Transition<K>> {
        match intent {
            Intent::Advance(axis) => self.advance(axis, now).map(Transition::Moved),
            Intent::Retreat(axis) => self.retreat(axis, now).map(Transition::Moved),
            Intent::SelectImage(index) => self.select_image(index).map(Transition::Moved),
            Intent::Cancel => self.close(CloseReason::Cancelled),
        }
    }

    /// Ends the session, dropping its lock. Returns `None` if already closed.
    pub fn close(&mut self, reason: CloseReason) -> Option<Transition<K>> {
        self.session.take()?;
        #[cfg(feature = "tracing")]
        tracing::debug!(?reason, "navigation closed");
        Some(Transition::Closed(reason))
    }

    /// Adopts a new active collection.
    ///
    /// If the item on screen is missing from `items`, the session closes with
    /// [`CloseReason::ItemRemoved`]; no neighbor is picked in its place. If it
    /// is still present but at a different ordinal, the ordinal is updated and
    /// a move is reported with [`Direction::None`], since the item on screen
    /// did not change. Remembered media indices are kept for items that are
    /// still present and forgotten for the rest.
    pub fn reconcile(&mut self, items: Vec<Item<K>>) -> Option<Transition<K>> {
        let session = self.session.as_mut()?;
        let current = session.current().id();
        let Some(item_index) = items.iter().position(|item| item.id() == current) else {
            #[cfg(feature = "tracing")]
            tracing::debug!("current item left the active collection");
            return self.close(CloseReason::ItemRemoved);
        };

        let moved = item_index != session.item_index;
        session.memory.retain_items(&items);
        session.items = items;
        session.item_index = item_index;
        if !moved {
            return None;
        }
        session.longitudinal = Direction::None;
        session.last_axis = Axis::Longitudinal;
        Some(Transition::Moved(session.snapshot()))
    }

    fn step_item(&mut self, direction: Direction, now: u64) -> Option<Snapshot<K>> {
        let cooldown = self.config.cooldown_ms;
        let session = self.session.as_mut()?;
        if session.lock.is_pending(now) {
            #[cfg(feature = "tracing")]
            tracing::trace!(now, "item move dropped by transition lock");
            return None;
        }

        let target = match direction {
            Direction::Forward => session
                .item_index
                .checked_add(1)
                .filter(|&next| next < session.items.len())?,
            Direction::Backward => session.item_index.checked_sub(1)?,
            Direction::None => return None,
        };

        session.lock.schedule(now, cooldown);
        session.item_index = target;
        session.longitudinal = direction;
        session.last_axis = Axis::Longitudinal;

        #[cfg(feature = "tracing")]
        tracing::trace!(item_index = target, until = ?session.lock.due(), "transition lock armed");

        Some(session.snapshot())
    }

    fn step_image(&mut self, direction: Direction) -> Option<Snapshot<K>> {
        let session = self.session.as_mut()?;
        let len = session.current().media_len();
        if len < 2 {
            return None;
        }
        let current = session.image_index();
        let next = match direction {
            Direction::Forward => (current + 1) % len,
            Direction::Backward => (current + len - 1) % len,
            Direction::None => return None,
        };
        Some(session.set_image(next, direction))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{CloseReason, Intent, NavigationConfig, Navigator, Transition};
    use crate::Item;
    use crate::motion::{Axis, Direction};

    fn items(lens: &[usize]) -> Vec<Item<u32>> {
        lens.iter()
            .enumerate()
            .map(|(i, &len)| {
                let id = u32::try_from(i).unwrap() + 1;
                Item::new(id, (0..len).map(|m| alloc::format!("{id}-{m}.png"))).unwrap()
            })
            .collect()
    }

    fn open(lens: &[usize], start: u32) -> Navigator<u32> {
        Navigator::open(items(lens), &start, NavigationConfig::default()).unwrap()
    }

    #[test]
    fn open_seeds_from_start_item() {
        let nav = open(&[3, 3, 3], 2);
        let snap = nav.snapshot().unwrap();
        assert_eq!(snap.item_id, 2);
        assert_eq!(snap.item_index, 1);
        assert_eq!(snap.image_index, 0);
        assert_eq!(snap.direction, Direction::None);
        assert!(!nav.is_locked(0));
    }

    #[test]
    fn open_rejects_unknown_or_empty() {
        assert_eq!(
            Navigator::open(items(&[1]), &7, NavigationConfig::default()).unwrap_err(),
            crate::NavError::NotFound
        );
        assert_eq!(
            Navigator::<u32>::open(Vec::new(), &1, NavigationConfig::default()).unwrap_err(),
            crate::NavError::EmptyCollection
        );
    }

    #[test]
    fn item_moves_clamp_at_ends() {
        let mut nav = open(&[1, 1], 1);
        assert!(nav.retreat_item(0).is_none());
        assert_eq!(nav.item_index(), Some(0));

        assert!(nav.advance_item(0).is_some());
        assert!(nav.advance_item(1_000).is_none());
        assert_eq!(nav.item_index(), Some(1));
    }

    #[test]
    fn clamped_move_does_not_arm_lock() {
        let mut nav = open(&[1, 1], 1);
        assert!(nav.retreat_item(0).is_none());
        assert!(!nav.is_locked(0));
        assert!(nav.advance_item(1).is_some());
    }

    #[test]
    fn lock_blocks_item_moves_for_cooldown() {
        let mut nav = open(&[1, 1, 1, 1], 1);
        assert!(nav.advance_item(1_000).is_some());
        assert!(nav.is_locked(1_000));
        assert_eq!(nav.lock_expiry(), Some(1_300));
        assert!(nav.advance_item(1_299).is_none());
        assert!(nav.retreat_item(1_150).is_none());
        assert_eq!(nav.item_index(), Some(1));

        assert!(!nav.tick(1_299));
        assert!(nav.tick(1_300));
        assert_eq!(nav.lock_expiry(), None);
        assert!(nav.advance_item(1_300).is_some());
        assert_eq!(nav.item_index(), Some(2));
    }

    #[test]
    fn image_moves_are_not_locked() {
        let mut nav = open(&[3, 1], 1);
        nav.advance_item(0);
        nav.retreat_item(300);
        assert!(nav.is_locked(300));
        assert!(nav.advance_image().is_some());
        assert!(nav.advance_image().is_some());
        assert_eq!(nav.image_index(), Some(2));
    }

    #[test]
    fn image_moves_wrap() {
        let mut nav = open(&[3], 1);
        let snap = nav.retreat_image().unwrap();
        assert_eq!(snap.image_index, 2);
        assert_eq!(snap.axis, Axis::Lateral);
        assert_eq!(snap.direction, Direction::Backward);
        assert_eq!(nav.advance_image().unwrap().image_index, 0);
    }

    #[test]
    fn single_media_item_ignores_image_moves() {
        let mut nav = open(&[1], 1);
        assert!(nav.advance_image().is_none());
        assert!(nav.retreat_image().is_none());
        assert!(nav.select_image(0).is_none());
    }

    #[test]
    fn select_image_derives_direction() {
        let mut nav = open(&[4], 1);
        let snap = nav.select_image(3).unwrap();
        assert_eq!((snap.image_index, snap.direction), (3, Direction::Forward));
        let snap = nav.select_image(1).unwrap();
        assert_eq!((snap.image_index, snap.direction), (1, Direction::Backward));
        assert!(nav.select_image(1).is_none());
        assert!(nav.select_image(4).is_none());
    }

    #[test]
    fn item_memory_survives_round_trip() {
        let mut nav = open(&[3, 2], 1);
        nav.select_image(2);
        nav.advance_item(0);
        assert_eq!(nav.image_index(), Some(0));
        nav.advance_image();
        let snap = nav.retreat_item(300).unwrap();
        assert_eq!(snap.image_index, 2);
        assert_eq!(nav.image_index_of(&2), Some(1));
    }

    #[test]
    fn snapshot_reports_axis_of_last_move() {
        let mut nav = open(&[2, 2], 1);
        let snap = nav.advance_item(0).unwrap();
        assert_eq!((snap.axis, snap.direction), (Axis::Longitudinal, Direction::Forward));
        let snap = nav.advance_image().unwrap();
        assert_eq!((snap.axis, snap.direction), (Axis::Lateral, Direction::Forward));
        assert_eq!(nav.direction(Axis::Longitudinal), Direction::Forward);
    }

    #[test]
    fn reconcile_follows_moved_item() {
        let mut nav = open(&[2, 2, 2], 2);
        nav.advance_item(0);
        nav.advance_image();
        let mut filtered = items(&[2, 2, 2]);
        filtered.remove(0);
        let t = nav.reconcile(filtered).unwrap();
        let snap = t.snapshot().unwrap();
        assert_eq!((snap.item_id, snap.item_index, snap.image_index), (3, 1, 1));
        assert_eq!((snap.axis, snap.direction), (Axis::Longitudinal, Direction::None));
        assert_eq!(snap.slide().enter_edge(), None);

        // Same ordinal: nothing to report.
        let mut same = items(&[2, 2, 2]);
        same.remove(1);
        assert_eq!(nav.reconcile(same), None);
        assert!(nav.is_open());
        assert_eq!(nav.image_index(), Some(1));
    }

    #[test]
    fn reconcile_forgets_removed_items() {
        let mut nav = open(&[2, 2], 1);
        nav.advance_item(0);
        nav.advance_image();
        nav.retreat_item(300);

        let mut only_first = items(&[2, 2]);
        only_first.truncate(1);
        assert_eq!(nav.reconcile(only_first), None);
        assert_eq!(nav.reconcile(items(&[2, 2])), None);
        assert_eq!(nav.image_index_of(&2), Some(0));
    }

    #[test]
    fn reconcile_closes_when_item_removed() {
        let mut nav = open(&[1, 1, 1], 2);
        let mut filtered = items(&[1, 1, 1]);
        filtered.remove(1);
        assert_eq!(
            nav.reconcile(filtered),
            Some(Transition::Closed(CloseReason::ItemRemoved))
        );
        assert!(!nav.is_open());
        assert!(nav.items().is_empty());
    }

    #[test]
    fn closed_navigator_ignores_everything() {
        let mut nav = open(&[2, 2], 1);
        nav.advance_item(0);
        assert_eq!(
            nav.apply(Intent::Cancel, 10),
            Some(Transition::Closed(CloseReason::Cancelled))
        );
        assert_eq!(nav.lock_expiry(), None);
        assert!(!nav.is_locked(10));
        assert!(nav.advance_item(1_000).is_none());
        assert!(nav.advance_image().is_none());
        assert!(nav.close(CloseReason::Cancelled).is_none());
        assert!(nav.reconcile(items(&[2, 2])).is_none());
        assert!(!nav.tick(10_000));
    }

    #[test]
    fn apply_routes_intents() {
        let mut nav = open(&[2, 2], 1);
        let t = nav.apply(Intent::Advance(Axis::Lateral), 0).unwrap();
        assert_eq!(t.snapshot().unwrap().image_index, 1);
        let t = nav.apply(Intent::Advance(Axis::Longitudinal), 0).unwrap();
        assert_eq!(t.snapshot().unwrap().item_id, 2);
        let t = nav.apply(Intent::SelectImage(1), 0).unwrap();
        assert_eq!(t.snapshot().unwrap().image_index, 1);
    }
}
