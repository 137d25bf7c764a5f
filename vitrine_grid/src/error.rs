// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Error returned when grid geometry is requested with invalid arguments.
///
/// Every variant is a contract violation by the caller. None of them are
/// coerced into a "best effort" layout.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum LayoutError {
    /// The grid was asked to lay out zero columns.
    #[error("grid needs at least one column")]
    InvalidColumns,
    /// The container width was negative, NaN, or infinite.
    #[error("container width must be finite and non-negative, got {0}")]
    InvalidWidth(f64),
    /// The gap was negative, NaN, or infinite.
    #[error("gap must be finite and non-negative, got {0}")]
    InvalidGap(f64),
    /// A signed ordinal below zero was supplied.
    #[error("ordinal must be non-negative, got {0}")]
    NegativeOrdinal(isize),
    /// The gaps alone consume the whole container width.
    #[error("{columns} columns with a gap of {gap} leave no room in a container {width} wide")]
    DegenerateCell {
        /// Requested column count.
        columns: usize,
        /// Container width that was supplied.
        width: f64,
        /// Gap between adjacent cells.
        gap: f64,
    },
}
