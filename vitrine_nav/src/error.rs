// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Error returned when navigation data is ingested or a session is opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum NavError {
    /// An item was supplied without any media.
    #[error("item has no media entries")]
    EmptyMedia,
    /// A session was opened over an empty collection.
    #[error("navigation needs at least one item")]
    EmptyCollection,
    /// The requested item is not part of the active collection.
    #[error("item is not in the active collection")]
    NotFound,
}

impl NavError {
    /// Returns `true` for contract violations by the caller.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::EmptyMedia | Self::EmptyCollection)
    }

    /// Returns `true` if the error means the referenced item went away.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
