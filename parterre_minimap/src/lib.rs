// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parterre Minimap: a small overview of the whole scene plus a viewport
//! indicator.
//!
//! The minimap answers two questions for the user: *what does the whole floor
//! plan look like* and *which part of it am I looking at*. [`project`]
//! derives both from the scene view box, the container size, and a committed
//! `parterre_viewport::ViewTransform`:
//!
//! - A uniform scale that fits the entire view box into the minimap
//!   rectangle, preserving aspect ratio.
//! - A viewport indicator [`kurbo::Rect`] sized from the on-screen viewport
//!   converted back to scene units, positioned from the scene center offset
//!   by the pan, and clamped so it never leaves the minimap bounds.
//!
//! Seat dots are projected through [`MinimapFrame::project_point`]; the
//! caller iterates its own seat snapshot so this crate stays free of any
//! scene dependency.
//!
//! ## Update policy
//!
//! Recomputing the overview on every gesture frame buys little: the scene
//! dots never move and the indicator chases the finger. The reference policy
//! recomputes at gesture end, and only when the transform moved by more than
//! the [`MinimapConfig`] deltas; [`significant_change`] implements that
//! check. This is a configurable performance/consistency tradeoff, not a
//! correctness rule — a host wanting continuous sync simply calls [`project`]
//! every frame and skips the check.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use parterre_minimap::{MinimapConfig, project};
//! use parterre_viewport::ViewTransform;
//!
//! let view_box = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let frame = project(
//!     view_box,
//!     Size::new(800.0, 600.0),
//!     ViewTransform::IDENTITY,
//!     &MinimapConfig::default(),
//! );
//!
//! // The scene corner lands at the minimap corner.
//! assert_eq!(frame.project_point(Point::ORIGIN), Point::ORIGIN);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Point, Rect, Size, Vec2};
use parterre_viewport::ViewTransform;

/// Minimap dimensions and throttling thresholds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MinimapConfig {
    /// Overview width in pixels.
    pub width: f64,
    /// Overview height in pixels.
    pub height: f64,
    /// Minimum committed-scale change that warrants a recompute.
    pub min_scale_delta: f64,
    /// Minimum committed-translation change, in pixels, that warrants a
    /// recompute.
    pub min_translate_delta: f64,
}

impl Default for MinimapConfig {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 80.0,
            min_scale_delta: 0.05,
            min_translate_delta: 5.0,
        }
    }
}

/// One computed overview frame: the scene→minimap projection plus the
/// viewport indicator rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MinimapFrame {
    /// Uniform scene→minimap scale.
    pub scale: f64,
    /// Scene view-box origin subtracted before scaling.
    pub origin: Point,
    /// Viewport indicator in minimap pixels, clamped inside the minimap.
    pub viewport_rect: Rect,
}

impl MinimapFrame {
    /// Projects a scene-space point into minimap pixels.
    #[must_use]
    pub fn project_point(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.origin.x) * self.scale,
            (pt.y - self.origin.y) * self.scale,
        )
    }
}

/// Computes an overview frame from the committed viewport state.
///
/// `view_box` is expected to be the finite, positive-area rectangle produced
/// by the scene's bounds derivation (which falls back to a fixed default for
/// degenerate scenes); non-positive extents are nudged to avoid division by
/// zero rather than trusted.
#[must_use]
pub fn project(
    view_box: Rect,
    container: Size,
    transform: ViewTransform,
    config: &MinimapConfig,
) -> MinimapFrame {
    let vb_w = view_box.width().max(f64::MIN_POSITIVE);
    let vb_h = view_box.height().max(f64::MIN_POSITIVE);
    // Uniform fit: the whole scene is always visible in the overview.
    let scale = (config.width / vb_w).min(config.height / vb_h);

    // On-screen viewport size back in scene units, then into minimap units.
    let zoom = transform.scale.max(f64::MIN_POSITIVE);
    let rect_w = ((container.width / zoom) * scale).min(config.width);
    let rect_h = ((container.height / zoom) * scale).min(config.height);

    // Start from the scene center, then shift opposite the pan (a positive
    // pan moves content right, which moves the visible window left).
    let center = Vec2::new(vb_w / 2.0 * scale, vb_h / 2.0 * scale);
    let pan = transform.translate * (scale / zoom);
    let x = (center.x - rect_w / 2.0 - pan.x).clamp(0.0, config.width - rect_w);
    let y = (center.y - rect_h / 2.0 - pan.y).clamp(0.0, config.height - rect_h);

    MinimapFrame {
        scale,
        origin: view_box.origin(),
        viewport_rect: Rect::new(x, y, x + rect_w, y + rect_h),
    }
}

/// Returns `true` when the transform moved enough since the last projected
/// frame to warrant recomputing the overview.
#[must_use]
pub fn significant_change(
    prev: ViewTransform,
    next: ViewTransform,
    config: &MinimapConfig,
) -> bool {
    (next.scale - prev.scale).abs() > config.min_scale_delta
        || (next.translate.x - prev.translate.x).abs() > config.min_translate_delta
        || (next.translate.y - prev.translate.y).abs() > config.min_translate_delta
}
