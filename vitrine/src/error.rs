// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;
use vitrine_grid::LayoutError;
use vitrine_nav::NavError;

/// Error returned by [`Inspector`](crate::Inspector) operations.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum InspectError {
    /// Grid geometry could not be computed.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// Navigation could not be started.
    #[error(transparent)]
    Nav(#[from] NavError),
}

impl InspectError {
    /// Returns `true` if the error means the requested item is not active.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Nav(err) if err.is_not_found())
    }
}
