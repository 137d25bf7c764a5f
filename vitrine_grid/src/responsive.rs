// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Width breakpoints and per-zoom-level column counts.
//!
//! The grid shows fewer, larger cells as the user steps through
//! [`ZoomLevel`]s. How many columns each level uses depends on the viewport
//! width class ([`Breakpoint`]).
//!
//! ```rust
//! use vitrine_grid::responsive::{Breakpoint, ZoomLevel};
//!
//! let bp = Breakpoint::for_width(1920.0);
//! assert_eq!(bp, Breakpoint::FullHd);
//! assert_eq!(bp.config().columns_for(ZoomLevel::OVERVIEW), 9);
//! assert_eq!(bp.config().columns_for(ZoomLevel::OVERVIEW.next()), 6);
//! ```

/// Viewport width class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Breakpoint {
    /// Below 640.
    Mobile,
    /// 640 up to 768.
    TabletPortrait,
    /// 768 up to 1024.
    TabletLandscape,
    /// 1024 up to 1440.
    SmallDesktop,
    /// 1440 up to 1920.
    Desktop,
    /// 1920 up to 2560.
    FullHd,
    /// 2560 up to 3840.
    Qhd,
    /// 3840 and wider.
    UltraWide,
}

/// Grid and detail-view settings for one [`Breakpoint`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BreakpointConfig {
    /// Human-readable name.
    pub label: &'static str,
    /// Smallest viewport width (inclusive) this breakpoint applies to.
    pub min_width: f64,
    /// Column count for each zoom level, overview first.
    pub columns: [usize; ZoomLevel::COUNT],
    /// Gap between grid cells.
    pub gap: f64,
    /// Whether zooming into a cell is offered at all.
    pub enable_zoom: bool,
    /// Width of the inspection view as a fraction of the viewport width.
    pub detail_width_fraction: f64,
    /// Height of the inspection view as a fraction of the viewport height.
    pub detail_height_fraction: f64,
}

impl BreakpointConfig {
    /// Column count to use at `level`.
    #[must_use]
    pub fn columns_for(&self, level: ZoomLevel) -> usize {
        self.columns[level.index().min(ZoomLevel::COUNT - 1)]
    }
}

const MOBILE: BreakpointConfig = BreakpointConfig {
    label: "Mobile",
    min_width: 0.0,
    columns: [2, 2, 1],
    gap: 16.0,
    enable_zoom: false,
    detail_width_fraction: 0.90,
    detail_height_fraction: 0.60,
};

const TABLET_PORTRAIT: BreakpointConfig = BreakpointConfig {
    label: "Tablet Portrait",
    min_width: 640.0,
    columns: [3, 2, 1],
    gap: 20.0,
    enable_zoom: true,
    detail_width_fraction: 0.85,
    detail_height_fraction: 0.65,
};

const TABLET_LANDSCAPE: BreakpointConfig = BreakpointConfig {
    label: "Tablet Landscape",
    min_width: 768.0,
    columns: [4, 3, 2],
    gap: 24.0,
    enable_zoom: true,
    detail_width_fraction: 0.80,
    detail_height_fraction: 0.65,
};

const SMALL_DESKTOP: BreakpointConfig = BreakpointConfig {
    label: "Small Desktop",
    min_width: 1024.0,
    columns: [5, 4, 3],
    gap: 32.0,
    enable_zoom: true,
    detail_width_fraction: 0.75,
    detail_height_fraction: 0.70,
};

const DESKTOP: BreakpointConfig = BreakpointConfig {
    label: "Desktop",
    min_width: 1440.0,
    columns: [7, 5, 4],
    gap: 40.0,
    enable_zoom: true,
    detail_width_fraction: 0.72,
    detail_height_fraction: 0.70,
};

const FULL_HD: BreakpointConfig = BreakpointConfig {
    label: "Full HD",
    min_width: 1920.0,
    columns: [9, 6, 4],
    gap: 48.0,
    enable_zoom: true,
    detail_width_fraction: 0.70,
    detail_height_fraction: 0.70,
};

const QHD: BreakpointConfig = BreakpointConfig {
    label: "QHD",
    min_width: 2560.0,
    columns: [10, 7, 5],
    gap: 56.0,
    enable_zoom: true,
    detail_width_fraction: 0.68,
    detail_height_fraction: 0.72,
};

const ULTRA_WIDE: BreakpointConfig = BreakpointConfig {
    label: "4K+",
    min_width: 3840.0,
    columns: [12, 8, 6],
    gap: 64.0,
    enable_zoom: true,
    detail_width_fraction: 0.65,
    detail_height_fraction: 0.75,
};

impl Breakpoint {
    /// All breakpoints, narrowest first.
    pub const ALL: [Self; 8] = [
        Self::Mobile,
        Self::TabletPortrait,
        Self::TabletLandscape,
        Self::SmallDesktop,
        Self::Desktop,
        Self::FullHd,
        Self::Qhd,
        Self::UltraWide,
    ];

    /// Classifies a viewport width.
    ///
    /// Widths that are negative or not finite fall back to [`Breakpoint::FullHd`].
    #[must_use]
    pub fn for_width(width: f64) -> Self {
        if !width.is_finite() || width < 0.0 {
            return Self::FullHd;
        }
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|bp| width >= bp.config().min_width)
            .unwrap_or(Self::FullHd)
    }

    /// Returns the settings for this breakpoint.
    #[must_use]
    pub fn config(self) -> &'static BreakpointConfig {
        match self {
            Self::Mobile => &MOBILE,
            Self::TabletPortrait => &TABLET_PORTRAIT,
            Self::TabletLandscape => &TABLET_LANDSCAPE,
            Self::SmallDesktop => &SMALL_DESKTOP,
            Self::Desktop => &DESKTOP,
            Self::FullHd => &FULL_HD,
            Self::Qhd => &QHD,
            Self::UltraWide => &ULTRA_WIDE,
        }
    }
}

/// Grid zoom step; higher levels show fewer, larger cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomLevel(u8);

impl ZoomLevel {
    /// Number of zoom levels.
    pub const COUNT: usize = 3;
    /// The initial, most zoomed-out level.
    pub const OVERVIEW: Self = Self(0);
    /// The most zoomed-in level.
    pub const MAX: Self = Self(2);

    /// Creates a level, or `None` if `level` is out of range.
    #[must_use]
    pub fn new(level: u8) -> Option<Self> {
        (usize::from(level) < Self::COUNT).then_some(Self(level))
    }

    /// Zero-based index of this level.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Steps one level in, wrapping back to the overview after the last.
    #[must_use]
    pub fn next(self) -> Self {
        if self == Self::MAX {
            Self::OVERVIEW
        } else {
            Self(self.0 + 1)
        }
    }
}
