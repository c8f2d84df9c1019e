// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Pan+zoom state: a uniform scale and a translation in pixel space.
///
/// The identity value (`scale == 1`, zero translation) shows the scene
/// centered in the container. Scale is kept inside [`ZoomLimits`] by the
/// owning [`crate::Viewport`]; translation is deliberately unconstrained, so
/// panning past the content edge is allowed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewTransform {
    /// Uniform zoom factor.
    pub scale: f64,
    /// Translation in pixels, applied outside the scaled term.
    pub translate: Vec2,
}

impl ViewTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate: Vec2::ZERO,
    };

    /// Creates a transform from a scale and translation.
    #[must_use]
    pub fn new(scale: f64, translate: Vec2) -> Self {
        Self { scale, translate }
    }

    /// Returns this transform with the scale clamped into `limits`.
    #[must_use]
    pub fn clamped(self, limits: ZoomLimits) -> Self {
        Self {
            scale: limits.clamp(self.scale),
            translate: self.translate,
        }
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Inclusive bounds on the zoom factor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ZoomLimits {
    /// Minimum zoom factor.
    pub min: f64,
    /// Maximum zoom factor.
    pub max: f64,
}

impl ZoomLimits {
    /// Creates zoom limits, normalizing so that `min <= max`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Clamps a zoom factor into the limits.
    #[must_use]
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }
}

impl Default for ZoomLimits {
    /// The reference range for the floor-plan viewer: half size to 3x.
    fn default() -> Self {
        Self { min: 0.5, max: 3.0 }
    }
}
