// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parterre Viewport: the transform between screen pixels and scene units.
//!
//! This crate owns the pan+zoom state of the floor-plan viewer and the
//! bidirectional mapping it induces. It focuses on:
//! - A small transform state ([`ViewTransform`]) of uniform scale plus a 2D
//!   translation, with scale clamped into [`ZoomLimits`].
//! - Paired forward/inverse [`kurbo::Affine`]s that are always rebuilt
//!   together, so `screen_to_scene(scene_to_screen(p)) == p` holds up to
//!   floating-point tolerance.
//! - Two explicit state slots: the **committed** transform that renderers and
//!   the minimap read between gestures, and an optional **live** transform
//!   owned by an in-flight gesture and published only at commit.
//!
//! It does **not** recognize gestures or know anything about seats; see
//! `parterre_gesture` and `parterre_scene` for those. Callers supply the
//! container size in pixels and the scene view box in scene units.
//!
//! ## Composition order
//!
//! The mapping centers the view box in the container at identity, then applies
//! translation in *pixel* space outside the scaled term:
//!
//! ```text
//! screen = base + translate + scale * (scene - view_box.origin)
//! base   = (container - view_box.size) / 2
//! ```
//!
//! The [`ComposeTransform`] strategy trait captures this as a single seam so a
//! platform that composes differently swaps one implementation at the call
//! site, keeping forward and inverse mapping algebraically paired by
//! construction (the inverse is always derived from the forward affine).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use parterre_viewport::Viewport;
//!
//! let mut vp = Viewport::new(Size::new(400.0, 300.0), Rect::new(0.0, 0.0, 400.0, 300.0));
//!
//! // Identity transform: screen and scene coincide here.
//! let p = Point::new(120.0, 80.0);
//! assert_eq!(vp.screen_to_scene_point(vp.scene_to_screen_point(p)), p);
//!
//! // A gesture pans by 50 px, then commits.
//! vp.begin_gesture();
//! vp.update_live(|t| t.translate.x += 50.0);
//! vp.commit();
//! assert_eq!(vp.committed().translate.x, 50.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod compose;
mod transform;
mod viewport;

pub use compose::{CenteredCompose, ComposeTransform};
pub use transform::{ViewTransform, ZoomLimits};
pub use viewport::{Viewport, ViewportDebugInfo};
