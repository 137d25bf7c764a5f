// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom transforms that frame a single grid cell inside a viewport.
//!
//! The calculator is pure: it reads caller-supplied measurements and never
//! touches navigation state. Scaling is anchored at the selected cell's own
//! center, so the translation is just the straight line from that center to
//! the viewport's target center and no scale-dependent correction is needed.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::{CellPosition, GridLayout, LayoutError};

/// Point about which a [`Transform`] scales.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum TransformOrigin {
    /// Geometric center of the container.
    #[default]
    Center,
    /// Explicit point in container-local coordinates.
    At(Point),
}

impl TransformOrigin {
    /// Resolves the origin against a container of the given size.
    #[must_use]
    pub fn resolve(self, container: Size) -> Point {
        match self {
            Self::Center => Point::new(container.width / 2.0, container.height / 2.0),
            Self::At(pt) => pt,
        }
    }
}

/// Translate-then-scale transform applied to the whole grid surface.
///
/// Mapping a container-local point `p` into the shared coordinate space is
/// `container_origin + origin + translate + scale * (p - origin)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Translation applied after scaling.
    pub translate: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
    /// Scaling anchor.
    pub origin: TransformOrigin,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The un-zoomed transform: no translation, unit scale, centered origin.
    pub const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        scale: 1.0,
        origin: TransformOrigin::Center,
    };

    /// Returns `true` if this transform leaves every point where it is.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.translate == Vec2::ZERO && self.scale == 1.0
    }

    /// Horizontal translation.
    #[must_use]
    pub fn translate_x(&self) -> f64 {
        self.translate.x
    }

    /// Vertical translation.
    #[must_use]
    pub fn translate_y(&self) -> f64 {
        self.translate.y
    }

    /// Returns the zoom-out target for this transform.
    ///
    /// The origin is kept so the surface shrinks back around the same anchor
    /// it grew from; hosts swap in [`Transform::IDENTITY`] once that
    /// animation has settled.
    #[must_use]
    pub fn released(self) -> Self {
        Self {
            translate: Vec2::ZERO,
            scale: 1.0,
            origin: self.origin,
        }
    }

    /// Builds the affine map from container-local coordinates into the shared
    /// coordinate space the container was measured in.
    #[must_use]
    pub fn to_affine(&self, container: Rect) -> Affine {
        let origin = self.origin.resolve(container.size()).to_vec2();
        Affine::translate(container.origin().to_vec2() + origin + self.translate)
            * Affine::scale(self.scale)
            * Affine::translate(-origin)
    }

    /// Maps a container-local point into the shared coordinate space.
    #[must_use]
    pub fn apply(&self, container: Rect, local: Point) -> Point {
        self.to_affine(container) * local
    }
}

/// How the raw fit ratio is turned into the final zoom scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScalePolicy {
    /// Round down to a whole number so cell edges stay on device pixels.
    #[default]
    Floor,
    /// Round to the nearest whole number.
    Round,
    /// Use the exact fit ratio.
    Exact,
}

impl ScalePolicy {
    /// Applies the policy to a raw fit ratio.
    #[must_use]
    pub fn apply(self, raw: f64) -> f64 {
        match self {
            Self::Floor => raw.floor(),
            Self::Round => raw.round(),
            Self::Exact => raw,
        }
    }
}

/// Tuning for [`TransformCalculator`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransformConfig {
    /// Padding inside the viewport box that the zoomed cell must stay clear of.
    pub viewport_margin: f64,
    /// Fraction of the padded viewport the zoomed cell should fill.
    pub target_fraction: f64,
    /// Gap between grid cells, as laid out by the host.
    pub gap: f64,
    /// Rounding applied to the fit ratio.
    pub scale_policy: ScalePolicy,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            viewport_margin: 40.0,
            target_fraction: 0.7,
            gap: 0.0,
            scale_policy: ScalePolicy::Floor,
        }
    }
}

/// Bounding boxes supplied by the measurement provider.
///
/// Both boxes live in one shared coordinate space (typically the window).
/// Either may be missing before the host has laid anything out.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Measurements {
    /// Bounds of the un-zoomed grid surface.
    pub container: Option<Rect>,
    /// Bounds of the inspection region.
    pub viewport: Option<Rect>,
}

impl Measurements {
    /// Creates measurements with both boxes present.
    #[must_use]
    pub fn new(container: Rect, viewport: Rect) -> Self {
        Self {
            container: Some(container),
            viewport: Some(viewport),
        }
    }
}

/// Intermediate values of a zoom computation, for debugging and inspection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformDebugInfo {
    /// The resulting transform.
    pub transform: Transform,
    /// Ordinal of the selected item within the active collection.
    pub ordinal: usize,
    /// Grid layout derived from the container width.
    pub layout: GridLayout,
    /// Container-local position of the selected cell.
    pub cell: CellPosition,
    /// Center of the selected cell in the shared coordinate space.
    pub item_center: Point,
    /// Center of the padded viewport in the shared coordinate space.
    pub target_center: Point,
    /// Fit ratio before the scale policy was applied.
    pub raw_scale: f64,
}

/// Computes the transform that enlarges a selected grid cell onto the
/// viewport's content center.
#[derive(Clone, Copy, Debug, Default)]
pub struct TransformCalculator {
    config: TransformConfig,
}

impl TransformCalculator {
    /// Creates a calculator with the given configuration.
    #[must_use]
    pub fn new(config: TransformConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Computes the zoom transform for `selected`.
    ///
    /// `active` is the currently visible collection in display order; the
    /// selected item's ordinal is resolved against it rather than against any
    /// master list. When a measurement is missing or the item is no longer
    /// active, [`Transform::IDENTITY`] is returned.
    ///
    /// # Errors
    ///
    /// Propagates [`LayoutError`] for an invalid column count or gap.
    pub fn compute<'a, K, I>(
        &self,
        selected: &K,
        columns: usize,
        measurements: &Measurements,
        active: I,
    ) -> Result<Transform, LayoutError>
    where
        K: PartialEq + 'a,
        I: IntoIterator<Item = &'a K>,
    {
        Ok(self
            .debug_info(selected, columns, measurements, active)?
            .map_or(Transform::IDENTITY, |info| info.transform))
    }

    /// Like [`TransformCalculator::compute`], but exposes every intermediate
    /// value. Returns `Ok(None)` where `compute` would return the identity.
    ///
    /// # Errors
    ///
    /// Propagates [`LayoutError`] for an invalid column count or gap.
    pub fn debug_info<'a, K, I>(
        &self,
        selected: &K,
        columns: usize,
        measurements: &Measurements,
        active: I,
    ) -> Result<Option<TransformDebugInfo>, LayoutError>
    where
        K: PartialEq + 'a,
        I: IntoIterator<Item = &'a K>,
    {
        if columns == 0 {
            return Err(LayoutError::InvalidColumns);
        }
        let (Some(container), Some(viewport)) = (measurements.container, measurements.viewport)
        else {
            return Ok(None);
        };
        if container.width() <= 0.0 {
            return Ok(None);
        }
        let Some(target_center) = self.target_center(viewport) else {
            return Ok(None);
        };

        let Some(ordinal) = active.into_iter().position(|id| id == selected) else {
            #[cfg(feature = "tracing")]
            tracing::warn!("selected item is not in the active collection; using identity");
            return Ok(None);
        };

        let layout = GridLayout::new(columns, container.width(), self.config.gap)?;
        let cell = layout.position(ordinal);
        let item_center = container.origin() + cell.center().to_vec2();

        let content = self.content_box(viewport);
        let target_width = content.width() * self.config.target_fraction;
        let target_height = content.height() * self.config.target_fraction;
        let raw_scale = (target_width / cell.width).min(target_height / cell.height);
        let scale = self.config.scale_policy.apply(raw_scale).max(1.0);

        let transform = Transform {
            translate: target_center - item_center,
            scale,
            origin: TransformOrigin::At(cell.center()),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            ordinal,
            column = cell.column,
            row = cell.row,
            raw_scale,
            scale,
            translate_x = transform.translate.x,
            translate_y = transform.translate.y,
            "computed zoom transform"
        );

        Ok(Some(TransformDebugInfo {
            transform,
            ordinal,
            layout,
            cell,
            item_center,
            target_center,
            raw_scale,
        }))
    }

    /// Returns the viewport box with the configured margin removed.
    #[must_use]
    pub fn content_box(&self, viewport: Rect) -> Rect {
        viewport.inset(-self.config.viewport_margin)
    }

    /// Returns the center of the padded viewport, or `None` if the margin
    /// leaves no content area.
    #[must_use]
    pub fn target_center(&self, viewport: Rect) -> Option<Point> {
        let content = self.content_box(viewport);
        (content.width() > 0.0 && content.height() > 0.0).then(|| content.center())
    }
}
