// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform square-cell grid geometry.
//!
//! All coordinates are relative to the top-left corner of the grid container.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

use crate::LayoutError;

/// Geometry shared by every cell of a grid with a fixed column count.
///
/// Cells are square: the item height always equals the item width. The
/// layout is derived from the container width and is meant to be rebuilt
/// whenever that width or the column count changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    columns: usize,
    item_width: f64,
    item_height: f64,
    gap: f64,
}

/// Position of a single cell inside its grid container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellPosition {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Cell width.
    pub width: f64,
    /// Cell height.
    pub height: f64,
    /// Horizontal center.
    pub center_x: f64,
    /// Vertical center.
    pub center_y: f64,
    /// Zero-based column.
    pub column: usize,
    /// Zero-based row.
    pub row: usize,
    /// Ordinal the position was computed for.
    pub index: usize,
}

impl CellPosition {
    /// Returns the center of the cell.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Returns the cell bounds.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.left,
            self.top,
            self.left + self.width,
            self.top + self.height,
        )
    }
}

impl GridLayout {
    /// Computes the layout for `columns` cells per row in a container
    /// `container_width` wide, with `gap` between adjacent cells.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::InvalidColumns`] when `columns` is zero.
    /// - [`LayoutError::InvalidWidth`] / [`LayoutError::InvalidGap`] when the
    ///   width or gap is negative or not finite.
    /// - [`LayoutError::DegenerateCell`] when no width is left for the cells.
    pub fn new(columns: usize, container_width: f64, gap: f64) -> Result<Self, LayoutError> {
        if columns == 0 {
            return Err(LayoutError::InvalidColumns);
        }
        if !container_width.is_finite() || container_width < 0.0 {
            return Err(LayoutError::InvalidWidth(container_width));
        }
        if !gap.is_finite() || gap < 0.0 {
            return Err(LayoutError::InvalidGap(gap));
        }

        let total_gap = gap * (columns - 1) as f64;
        let item_width = (container_width - total_gap) / columns as f64;
        if item_width <= 0.0 {
            return Err(LayoutError::DegenerateCell {
                columns,
                width: container_width,
                gap,
            });
        }

        Ok(Self {
            columns,
            item_width,
            item_height: item_width,
            gap,
        })
    }

    /// Number of columns.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Width of every cell.
    #[must_use]
    pub fn item_width(&self) -> f64 {
        self.item_width
    }

    /// Height of every cell (equal to [`GridLayout::item_width`]).
    #[must_use]
    pub fn item_height(&self) -> f64 {
        self.item_height
    }

    /// Gap between adjacent cells, both horizontally and vertically.
    #[must_use]
    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Width spanned by one full row, which matches the container width the
    /// layout was built from.
    #[must_use]
    pub fn row_width(&self) -> f64 {
        self.item_width * self.columns as f64 + self.gap * (self.columns - 1) as f64
    }

    /// Computes the position of the cell at `ordinal`.
    #[must_use]
    pub fn position(&self, ordinal: usize) -> CellPosition {
        let column = ordinal % self.columns;
        let row = ordinal / self.columns;

        let left = column as f64 * (self.item_width + self.gap);
        let top = row as f64 * (self.item_height + self.gap);

        CellPosition {
            left,
            top,
            width: self.item_width,
            height: self.item_height,
            center_x: left + self.item_width / 2.0,
            center_y: top + self.item_height / 2.0,
            column,
            row,
            index: ordinal,
        }
    }

    /// Like [`GridLayout::position`], for hosts that track ordinals as signed
    /// integers.
    ///
    /// # Errors
    ///
    /// [`LayoutError::NegativeOrdinal`] when `ordinal < 0`.
    pub fn try_position(&self, ordinal: isize) -> Result<CellPosition, LayoutError> {
        let ordinal = usize::try_from(ordinal).map_err(|_| LayoutError::NegativeOrdinal(ordinal))?;
        Ok(self.position(ordinal))
    }

    /// Returns the bounds of the cell at `ordinal`.
    #[must_use]
    pub fn cell_rect(&self, ordinal: usize) -> Rect {
        self.position(ordinal).rect()
    }

    /// Maps a container-relative point back to the ordinal of the cell under it.
    ///
    /// Returns `None` if the point lies outside the grid, inside a gap, or in
    /// a slot at or beyond `item_count`.
    #[must_use]
    pub fn item_at_point(&self, pt: Point, item_count: usize) -> Option<usize> {
        if !pt.x.is_finite() || !pt.y.is_finite() || pt.x < 0.0 || pt.y < 0.0 {
            return None;
        }

        let pitch_x = self.item_width + self.gap;
        let pitch_y = self.item_height + self.gap;
        let column = (pt.x / pitch_x).floor();
        let row = (pt.y / pitch_y).floor();
        if column >= self.columns as f64 {
            return None;
        }
        if pt.x - column * pitch_x >= self.item_width || pt.y - row * pitch_y >= self.item_height {
            return None;
        }

        #[expect(
            clippy::cast_possible_truncation,
            reason = "Both values are non-negative and floored; oversized rows saturate and are rejected below"
        )]
        let (column, row) = (column as usize, row as usize);
        let ordinal = row.checked_mul(self.columns)?.checked_add(column)?;
        (ordinal < item_count).then_some(ordinal)
    }

    /// Total height of a grid holding `item_count` cells.
    #[must_use]
    pub fn grid_height(&self, item_count: usize) -> f64 {
        if item_count == 0 {
            return 0.0;
        }
        let rows = item_count.div_ceil(self.columns);
        rows as f64 * self.item_height + self.gap * (rows - 1) as f64
    }
}
