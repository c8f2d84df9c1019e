// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size};

use crate::compose::{CenteredCompose, ComposeTransform};
use crate::transform::{ViewTransform, ZoomLimits};

/// Viewport over a floor-plan scene.
///
/// `Viewport` tracks the container size in pixels, the scene view box in
/// scene units, and two transform slots:
///
/// - The **committed** transform, visible to renderers and the minimap. The
///   cached forward/inverse affines always reflect this slot.
/// - An optional **live** transform, owned by an in-flight gesture. It is
///   seeded from the committed slot by [`Viewport::begin_gesture`], mutated
///   through [`Viewport::update_live`], and published by
///   [`Viewport::commit`] (or discarded by [`Viewport::cancel`]).
///
/// Keeping the slots separate means a frame rendered between gestures never
/// sees a half-committed transform, and a gesture abandoned below its
/// recognition threshold leaves no drift behind.
#[derive(Clone, Debug)]
pub struct Viewport<C: ComposeTransform = CenteredCompose> {
    container: Size,
    view_box: Rect,
    limits: ZoomLimits,
    committed: ViewTransform,
    live: Option<ViewTransform>,
    compose: C,
    scene_to_screen: Affine,
    screen_to_scene: Affine,
}

impl Viewport<CenteredCompose> {
    /// Creates a viewport with the reference composition strategy, identity
    /// transform, and default zoom limits.
    #[must_use]
    pub fn new(container: Size, view_box: Rect) -> Self {
        Self::with_compose(container, view_box, CenteredCompose)
    }
}

impl<C: ComposeTransform> Viewport<C> {
    /// Creates a viewport with an explicit composition strategy.
    ///
    /// The strategy is chosen once here; every forward mapping goes through
    /// it and every inverse mapping is derived from its output.
    #[must_use]
    pub fn with_compose(container: Size, view_box: Rect, compose: C) -> Self {
        let mut vp = Self {
            container,
            view_box,
            limits: ZoomLimits::default(),
            committed: ViewTransform::IDENTITY,
            live: None,
            compose,
            scene_to_screen: Affine::IDENTITY,
            screen_to_scene: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Returns the container size in pixels.
    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    /// Sets the container size in pixels.
    pub fn set_container(&mut self, container: Size) {
        if self.container == container {
            return;
        }
        self.container = container;
        self.rebuild_transforms();
    }

    /// Returns the scene view box.
    #[must_use]
    pub fn view_box(&self) -> Rect {
        self.view_box
    }

    /// Sets the scene view box.
    pub fn set_view_box(&mut self, view_box: Rect) {
        if self.view_box == view_box {
            return;
        }
        self.view_box = view_box;
        self.rebuild_transforms();
    }

    /// Returns the current zoom limits.
    #[must_use]
    pub fn zoom_limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Sets the zoom limits, clamping the committed (and any live) scale
    /// into the new range.
    pub fn set_zoom_limits(&mut self, limits: ZoomLimits) {
        self.limits = limits;
        self.committed = self.committed.clamped(limits);
        if let Some(live) = self.live.as_mut() {
            *live = live.clamped(limits);
        }
        self.rebuild_transforms();
    }

    /// Returns the committed transform.
    ///
    /// This is the slot renderers and the minimap read; it never reflects an
    /// in-flight gesture.
    #[must_use]
    pub fn committed(&self) -> ViewTransform {
        self.committed
    }

    /// Returns the live transform if a gesture is in flight, otherwise the
    /// committed one.
    ///
    /// Gesture code baselines follow-on interactions (for example a pan
    /// continuing after a pinch finger lifts) from this value so the view
    /// never jumps back to the last committed state mid-gesture.
    #[must_use]
    pub fn effective(&self) -> ViewTransform {
        self.live.unwrap_or(self.committed)
    }

    /// Returns `true` while a gesture owns the live slot.
    #[must_use]
    pub fn is_gesture_active(&self) -> bool {
        self.live.is_some()
    }

    /// Seeds the live slot from the committed transform.
    ///
    /// If a gesture is already in flight the existing live value is kept, so
    /// overlapping recognizers sharing one pointer stream can all call this.
    pub fn begin_gesture(&mut self) {
        if self.live.is_none() {
            self.live = Some(self.committed);
        }
    }

    /// Mutates the live transform, then clamps its scale into the limits.
    ///
    /// No-op when no gesture is in flight. The committed slot and the cached
    /// affines are untouched until [`Viewport::commit`].
    pub fn update_live(&mut self, f: impl FnOnce(&mut ViewTransform)) {
        if let Some(live) = self.live.as_mut() {
            f(live);
            *live = live.clamped(self.limits);
        }
    }

    /// Publishes the live transform into the committed slot and clears it.
    ///
    /// Returns `true` if the committed transform changed. No-op (returning
    /// `false`) when no gesture is in flight.
    pub fn commit(&mut self) -> bool {
        match self.live.take() {
            Some(live) => {
                let next = live.clamped(self.limits);
                let changed = next != self.committed;
                self.committed = next;
                if changed {
                    self.rebuild_transforms();
                }
                changed
            }
            None => false,
        }
    }

    /// Discards the live transform without publishing it.
    ///
    /// Used when a pointer sequence ends below every recognition threshold:
    /// jitter must not accumulate into the committed state.
    pub fn cancel(&mut self) {
        self.live = None;
    }

    /// Resets the committed transform to identity.
    ///
    /// This is the one transform mutation outside the gesture path. It does
    /// not cancel an in-flight gesture: if one is active, its own commit may
    /// later overwrite the reset. That last-writer-wins race is accepted and
    /// intentional; hosts that want exclusivity should gate reset on
    /// [`Viewport::is_gesture_active`].
    pub fn reset_view(&mut self) {
        self.committed = ViewTransform::IDENTITY;
        self.rebuild_transforms();
    }

    /// Returns the committed scene→screen affine.
    #[must_use]
    pub fn scene_to_screen(&self) -> Affine {
        self.scene_to_screen
    }

    /// Returns the committed screen→scene affine.
    #[must_use]
    pub fn screen_to_scene(&self) -> Affine {
        self.screen_to_scene
    }

    /// Converts a scene-space point into screen pixels (committed transform).
    #[must_use]
    pub fn scene_to_screen_point(&self, pt: Point) -> Point {
        self.scene_to_screen * pt
    }

    /// Converts a screen-pixel point into scene space (committed transform).
    ///
    /// Tap hit-testing goes through this: the inverse is derived from the
    /// same affine the renderer uses, so the two can not drift apart.
    #[must_use]
    pub fn screen_to_scene_point(&self, pt: Point) -> Point {
        self.screen_to_scene * pt
    }

    /// Returns the scene-space rectangle currently visible in the container
    /// (committed transform).
    #[must_use]
    pub fn visible_scene_rect(&self) -> Rect {
        let p0 = self.screen_to_scene * Point::ORIGIN;
        let p1 = self.screen_to_scene * Point::new(self.container.width, self.container.height);
        Rect::from_points(p0, p1)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            container: self.container,
            view_box: self.view_box,
            committed: self.committed,
            live: self.live,
            limits: self.limits,
            visible_scene_rect: self.visible_scene_rect(),
        }
    }

    fn rebuild_transforms(&mut self) {
        self.scene_to_screen = self
            .compose
            .compose(self.container, self.view_box, self.committed);
        self.screen_to_scene = self.scene_to_screen.inverse();
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Copy, Clone, Debug)]
pub struct ViewportDebugInfo {
    /// Container size in pixels.
    pub container: Size,
    /// Scene view box.
    pub view_box: Rect,
    /// Committed transform.
    pub committed: ViewTransform,
    /// Live transform, if a gesture is in flight.
    pub live: Option<ViewTransform>,
    /// Zoom limits.
    pub limits: ZoomLimits,
    /// Scene rectangle visible under the committed transform.
    pub visible_scene_rect: Rect,
}
