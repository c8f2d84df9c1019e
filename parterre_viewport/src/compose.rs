// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect, Size, Vec2};

use crate::transform::ViewTransform;

/// Strategy for building the scene→screen affine from viewport state.
///
/// A platform that centers or offsets content differently implements this
/// trait once and selects it where the [`crate::Viewport`] is constructed.
/// The inverse mapping is always derived from the affine produced here, so
/// forward and inverse stay algebraically paired no matter which strategy is
/// active.
pub trait ComposeTransform {
    /// Builds the scene→screen affine for the given container size, scene
    /// view box, and transform state.
    fn compose(&self, container: Size, view_box: Rect, state: ViewTransform) -> Affine;
}

/// The reference composition: content centered at identity, translation in
/// pixel space outside the scaled term.
///
/// ```text
/// screen = base + translate + scale * (scene - view_box.origin)
/// base   = (container - view_box.size) / 2
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CenteredCompose;

impl ComposeTransform for CenteredCompose {
    fn compose(&self, container: Size, view_box: Rect, state: ViewTransform) -> Affine {
        let base = Vec2::new(
            (container.width - view_box.width()) / 2.0,
            (container.height - view_box.height()) / 2.0,
        );
        // Rightmost factor applies first: shift the view-box origin to zero,
        // scale, then translate into place in pixel space.
        Affine::translate(base + state.translate)
            * Affine::scale(state.scale)
            * Affine::translate(-view_box.origin().to_vec2())
    }
}
