// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use vitrine_grid::TransformConfig;
use vitrine_nav::NavigationConfig;
use vitrine_nav::input::InputConfig;
use vitrine_nav::motion::SlideDistances;

/// Everything an [`Inspector`](crate::Inspector) can be tuned with.
///
/// Every field has a usable default, so hosts usually override one or two:
///
/// ```
/// use vitrine::InspectorConfig;
///
/// let config = InspectorConfig {
///     resize_debounce_ms: 250,
///     ..InspectorConfig::default()
/// };
/// assert_eq!(config.navigation.cooldown_ms, 300);
/// assert_eq!(config.settle_ms, 200);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InspectorConfig {
    /// Zoom framing.
    pub transform: TransformConfig,
    /// Transition lock.
    pub navigation: NavigationConfig,
    /// Wheel and touch thresholds.
    pub input: InputConfig,
    /// Slide animation distances, passed through to the renderer.
    pub slide: SlideDistances,
    /// Quiet period after the last measurement change before re-framing.
    pub resize_debounce_ms: u64,
    /// How long the zoom-out runs before the transform snaps to identity.
    pub settle_ms: u64,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            transform: TransformConfig::default(),
            navigation: NavigationConfig::default(),
            input: InputConfig::default(),
            slide: SlideDistances::default(),
            resize_debounce_ms: 100,
            settle_ms: 200,
        }
    }
}
