// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-clocked one-shot deadlines.
//!
//! Nothing here reads a clock or spawns anything. The host passes the
//! current time (milliseconds on any monotonic clock) into every call and
//! polls [`Deadline::fire`] from its frame or timer callback. A deadline
//! that is dropped or cancelled can never fire.
//!
//! ```
//! use vitrine_nav::timer::Deadline;
//!
//! let mut debounce = Deadline::new();
//! debounce.schedule(1_000, 100);
//! // Re-scheduling pushes the deadline out.
//! debounce.schedule(1_050, 100);
//! assert!(!debounce.fire(1_120));
//! assert!(debounce.fire(1_150));
//! // One-shot: it does not fire twice.
//! assert!(!debounce.fire(1_200));
//! ```

/// A cancellable one-shot deadline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Deadline {
    due: Option<u64>,
}

impl Deadline {
    /// Creates an idle deadline.
    #[must_use]
    pub const fn new() -> Self {
        Self { due: None }
    }

    /// Arms the deadline `delay_ms` after `now`, replacing any earlier schedule.
    pub fn schedule(&mut self, now: u64, delay_ms: u64) {
        self.due = Some(now.saturating_add(delay_ms));
    }

    /// Disarms the deadline. Returns `true` if it was armed.
    pub fn cancel(&mut self) -> bool {
        self.due.take().is_some()
    }

    /// The time the deadline fires at, if armed.
    #[must_use]
    pub fn due(&self) -> Option<u64> {
        self.due
    }

    /// Returns `true` if the deadline is armed, whether or not it has passed.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.due.is_some()
    }

    /// Returns `true` if the deadline is armed and has not been reached at `now`.
    #[must_use]
    pub fn is_pending(&self, now: u64) -> bool {
        self.due.is_some_and(|due| now < due)
    }

    /// Disarms and returns `true` if the deadline has been reached at `now`.
    pub fn fire(&mut self, now: u64) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}
