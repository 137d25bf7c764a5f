// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::hash::Hash;

use kurbo::Point;
use vitrine_grid::{
    GridLayout, LayoutError, Measurements, Transform, TransformCalculator, TransformDebugInfo,
};
use vitrine_nav::input::{InputEvent, InputRouter};
use vitrine_nav::motion::Axis;
use vitrine_nav::timer::Deadline;
use vitrine_nav::{CloseReason, Item, Navigator, Snapshot, Transition};

use crate::{InspectError, InspectorConfig};

/// What a call to [`Inspector::tick`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tick {
    /// The transition lock was released.
    pub lock_released: bool,
    /// A debounced measurement change was applied and the zoom re-framed.
    pub reframed: bool,
    /// The zoom-out finished and the transform is back to identity.
    pub settled: bool,
}

impl Tick {
    /// Returns `true` if nothing happened.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        !(self.lock_released || self.reframed || self.settled)
    }
}

/// State that only exists while an item is zoomed in.
///
/// Dropping it drops the transition lock and any pending resize with it.
#[derive(Clone, Debug)]
struct Session<K> {
    navigator: Navigator<K>,
    input: InputRouter,
    resize: Deadline,
}

/// Zoom-to-inspect controller for a product grid.
///
/// The inspector owns the grid's zoom transform and, while an item is zoomed
/// in, a [`Navigator`] and an [`InputRouter`] for it. All state changes happen
/// synchronously in `&mut self` calls; deferred work (lock release, debounced
/// re-framing after a resize, and snapping back to identity after a zoom-out)
/// runs from [`Inspector::tick`].
#[derive(Clone, Debug)]
pub struct Inspector<K> {
    config: InspectorConfig,
    calculator: TransformCalculator,
    columns: usize,
    measurements: Measurements,
    session: Option<Session<K>>,
    transform: Transform,
    settle: Deadline,
}

impl<K: Clone + Eq + Hash> Inspector<K> {
    /// Creates a closed inspector for a grid of `columns` columns.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::InvalidColumns`] when `columns` is zero.
    /// - [`LayoutError::InvalidGap`] when the configured gap is negative or
    ///   not finite.
    pub fn new(config: InspectorConfig, columns: usize) -> Result<Self, InspectError> {
        if columns == 0 {
            return Err(LayoutError::InvalidColumns.into());
        }
        let gap = config.transform.gap;
        if !gap.is_finite() || gap < 0.0 {
            return Err(LayoutError::InvalidGap(gap).into());
        }
        Ok(Self {
            config,
            calculator: TransformCalculator::new(config.transform),
            columns,
            measurements: Measurements::default(),
            session: None,
            transform: Transform::IDENTITY,
            settle: Deadline::new(),
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// Current column count.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Latest measurements, including any not yet applied.
    #[must_use]
    pub fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    /// Transform the grid surface should be painted with.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Returns `true` while an item is zoomed in.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Returns `true` while a zoom-out is running.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.settle.is_scheduled()
    }

    /// The navigator of the open session.
    #[must_use]
    pub fn navigator(&self) -> Option<&Navigator<K>> {
        self.session.as_ref().map(|s| &s.navigator)
    }

    /// Navigation state of the open session.
    #[must_use]
    pub fn snapshot(&self) -> Option<Snapshot<K>> {
        self.navigator().and_then(Navigator::snapshot)
    }

    /// Earliest time [`Inspector::tick`] has work to do, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        let session = self.session.as_ref();
        [
            session.and_then(|s| s.navigator.lock_expiry()),
            session.and_then(|s| s.resize.due()),
            self.settle.due(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Ordinal of the grid cell under `point`, given in the same coordinate
    /// space as the container measurement.
    ///
    /// Returns `Ok(None)` before the container has been measured (or while it
    /// has no width), over a gap, or past the last of `item_count` cells.
    ///
    /// # Errors
    ///
    /// Propagates [`LayoutError`] if no layout fits the measured container.
    pub fn hit_test(
        &self,
        point: Point,
        item_count: usize,
    ) -> Result<Option<usize>, InspectError> {
        let Some(container) = self.measurements.container else {
            return Ok(None);
        };
        if container.width() <= 0.0 {
            return Ok(None);
        }
        let layout = GridLayout::new(self.columns, container.width(), self.config.transform.gap)?;
        let local = point - container.origin().to_vec2();
        Ok(layout.item_at_point(local, item_count))
    }

    /// Zooms into the item keyed `id` and starts navigating `items`.
    ///
    /// `items` is the active collection in display order. An inspection
    /// already in progress is replaced, and a running zoom-out is cut short.
    ///
    /// # Errors
    ///
    /// - [`NavError`](vitrine_nav::NavError) if `items` is empty or does not
    ///   contain `id`.
    /// - [`LayoutError`] if no layout fits the measured container.
    ///
    /// On error the inspector is left as it was.
    pub fn open(&mut self, items: Vec<Item<K>>, id: &K, now: u64) -> Result<(), InspectError> {
        let navigator = Navigator::open(items, id, self.config.navigation)?;
        let transform = self.frame(&navigator)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(now, scale = transform.scale, "inspection opened");
        #[cfg(not(feature = "tracing"))]
        let _ = now;

        self.session = Some(Session {
            navigator,
            input: InputRouter::new(self.config.input),
            resize: Deadline::new(),
        });
        self.transform = transform;
        self.settle.cancel();
        Ok(())
    }

    /// Routes a raw input event to the open session.
    ///
    /// An item change re-frames the zoom onto the new item; a cancel starts
    /// the zoom-out. Events arriving while closed are dropped.
    ///
    /// # Errors
    ///
    /// Propagates [`LayoutError`] if re-framing fails. The navigation change
    /// itself has already happened.
    pub fn handle_input(
        &mut self,
        event: InputEvent,
        now: u64,
    ) -> Result<Option<Transition<K>>, InspectError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(None);
        };
        let transition = session.input.dispatch(&mut session.navigator, event, now);
        match &transition {
            Some(Transition::Moved(snapshot)) if snapshot.axis == Axis::Longitudinal => {
                self.reframe()?;
            }
            Some(Transition::Closed(_)) => self.zoom_out(now),
            _ => {}
        }
        Ok(transition)
    }

    /// Replaces the active collection, for example after a filter change.
    ///
    /// If the zoomed item is gone the inspection closes and zooms out. If it
    /// moved to another cell the zoom follows it.
    ///
    /// # Errors
    ///
    /// Propagates [`LayoutError`] if re-framing fails.
    pub fn set_items(
        &mut self,
        items: Vec<Item<K>>,
        now: u64,
    ) -> Result<Option<Transition<K>>, InspectError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(None);
        };
        let transition = session.navigator.reconcile(items);
        match &transition {
            Some(Transition::Moved(_)) => self.reframe()?,
            Some(Transition::Closed(_)) => self.zoom_out(now),
            None => {}
        }
        Ok(transition)
    }

    /// Changes the column count and re-frames immediately.
    ///
    /// # Errors
    ///
    /// [`LayoutError::InvalidColumns`] when `columns` is zero; otherwise
    /// propagates re-framing errors.
    pub fn set_columns(&mut self, columns: usize) -> Result<(), InspectError> {
        if columns == 0 {
            return Err(LayoutError::InvalidColumns.into());
        }
        if columns == self.columns {
            return Ok(());
        }
        self.columns = columns;
        if let Some(session) = self.session.as_mut() {
            session.resize.cancel();
        }
        self.reframe()
    }

    /// Records new measurements.
    ///
    /// While open, re-framing waits until measurements have been quiet for
    /// [`InspectorConfig::resize_debounce_ms`]; each call pushes it out.
    pub fn set_measurements(&mut self, measurements: Measurements, now: u64) {
        self.measurements = measurements;
        if let Some(session) = self.session.as_mut() {
            session.resize.schedule(now, self.config.resize_debounce_ms);
        }
    }

    /// Runs every deferred step that is due at `now`.
    ///
    /// # Errors
    ///
    /// Propagates [`LayoutError`] if a debounced re-frame fails.
    pub fn tick(&mut self, now: u64) -> Result<Tick, InspectError> {
        let mut tick = Tick::default();
        if let Some(session) = self.session.as_mut() {
            tick.lock_released = session.navigator.tick(now);
            if session.resize.fire(now) {
                self.reframe()?;
                tick.reframed = true;
            }
        }
        if self.settle.fire(now) {
            self.transform = Transform::IDENTITY;
            tick.settled = true;
            #[cfg(feature = "tracing")]
            tracing::trace!(now, "zoom-out settled");
        }
        Ok(tick)
    }

    /// Leaves inspection mode and starts the zoom-out.
    ///
    /// Pending lock and resize timers are dropped immediately. Returns `None`
    /// if nothing was open.
    pub fn close(&mut self, now: u64) -> Option<Transition<K>> {
        let mut session = self.session.take()?;
        let transition = session.navigator.close(CloseReason::Cancelled);
        self.zoom_out(now);
        transition
    }

    /// Intermediate values of the current zoom computation.
    ///
    /// # Errors
    ///
    /// Propagates [`LayoutError`] if no layout fits the measured container.
    pub fn debug_info(&self) -> Result<Option<TransformDebugInfo>, InspectError> {
        let Some(navigator) = self.navigator() else {
            return Ok(None);
        };
        let Some(item) = navigator.current_item() else {
            return Ok(None);
        };
        Ok(self.calculator.debug_info(
            item.id(),
            self.columns,
            &self.measurements,
            navigator.items().iter().map(Item::id),
        )?)
    }

    fn frame(&self, navigator: &Navigator<K>) -> Result<Transform, LayoutError> {
        let Some(item) = navigator.current_item() else {
            return Ok(Transform::IDENTITY);
        };
        self.calculator.compute(
            item.id(),
            self.columns,
            &self.measurements,
            navigator.items().iter().map(Item::id),
        )
    }

    fn reframe(&mut self) -> Result<(), InspectError> {
        let Some(session) = self.session.as_ref() else {
            return Ok(());
        };
        self.transform = self.frame(&session.navigator)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(
            scale = self.transform.scale,
            translate_x = self.transform.translate.x,
            translate_y = self.transform.translate.y,
            "zoom re-framed"
        );
        Ok(())
    }

    fn zoom_out(&mut self, now: u64) {
        self.session = None;
        self.transform = self.transform.released();
        self.settle.schedule(now, self.config.settle_ms);
        #[cfg(feature = "tracing")]
        tracing::debug!(now, settle_ms = self.config.settle_ms, "inspection closed");
    }
}
