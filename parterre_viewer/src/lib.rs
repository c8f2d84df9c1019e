// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parterre Viewer: the assembled floor-plan viewer core.
//!
//! [`Viewer`] owns one scene snapshot, one viewport, and one gesture
//! composer, and exposes the contract a hosting screen consumes:
//!
//! - Feed raw pointer input into [`Viewer::handle_pointer`]; get back
//!   [`ViewerEvent`]s. A tap that resolves to a seat within the hit tolerance
//!   yields [`ViewerEvent::SeatSelected`]; a tap that misses every seat
//!   yields nothing.
//! - Pull a [`parterre_render::DrawOp`] display list for the committed
//!   transform via [`Viewer::display_list`].
//! - Pull overview frames via [`Viewer::minimap_frame`] (unthrottled) or
//!   [`Viewer::minimap_frame_if_changed`] (delta-threshold policy).
//!
//! ## Threading contract
//!
//! The viewer is single-owner: one logical context mutates it. Gesture
//! recognition may run on a high-priority input context as long as committed
//! state is read back on the owning context afterwards. Hit testing reads
//! only the owned scene snapshot — never externally shared mutable seat data
//! — so tap resolution is a pure function of this struct's state. During a
//! gesture, renderers keep painting the last committed display list and may
//! apply [`Viewer::effective_transform`] as a transient overlay matrix; the
//! list itself is rebuilt when [`ViewerEvent::GestureEnded`] reports a
//! change.
//!
//! ## Scene lifecycle
//!
//! Scenes are replaced wholesale ([`Viewer::replace_scene`]); there is no
//! incremental seat diffing. Replacing the scene re-derives the view box but
//! leaves the committed transform alone — a data refresh never moves the
//! user's view. The one in-place mutation is [`Viewer::set_seat_status`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use parterre_gesture::{PointerEvent, PointerId};
//! use parterre_scene::{Scene, Seat, SeatId};
//! use parterre_viewer::{Viewer, ViewerConfig, ViewerEvent};
//!
//! let scene = Scene::new(vec![Seat::new(SeatId(1), Point::new(400.0, 300.0), "A1")], vec![]);
//! let mut viewer = Viewer::new(scene, Size::new(800.0, 600.0), ViewerConfig::default());
//!
//! let finger = PointerId(0);
//! viewer.handle_pointer(PointerEvent::Down { id: finger, pos: Point::new(400.0, 300.0) });
//! let events = viewer.handle_pointer(PointerEvent::Up { id: finger, pos: Point::new(400.0, 300.0) });
//! assert!(matches!(events[0], ViewerEvent::SeatSelected(ref s) if s.id == SeatId(1)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Size;
use parterre_gesture::{GestureComposer, GestureEvent, PointerEvent};
use parterre_hit::{HitParams, nearest_seat};
use parterre_minimap::{MinimapConfig, MinimapFrame, project, significant_change};
use parterre_render::{DrawOp, RenderOptions, build_display_list};
use parterre_scene::{CategoryStyle, Scene, SeatId, SeatStatus, VIEW_BOX_MARGIN};
use parterre_viewport::{ViewTransform, Viewport, ViewportDebugInfo, ZoomLimits};

pub use parterre_gesture::GestureConfig;

/// Configuration for the assembled viewer.
///
/// Every tunable of the core is surfaced here so one floor plan can use a
/// tighter hit tolerance or a larger minimap than another without touching
/// the member crates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    /// Margin added around the seat bounding box when deriving the view box.
    pub view_box_margin: f64,
    /// Hit-test tolerance parameters.
    pub hit: HitParams,
    /// Zoom clamp range.
    pub zoom_limits: ZoomLimits,
    /// Gesture recognition thresholds.
    pub gestures: GestureConfig,
    /// Minimap dimensions and throttling deltas.
    pub minimap: MinimapConfig,
    /// Display-list building knobs.
    pub render: RenderOptions,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            view_box_margin: VIEW_BOX_MARGIN,
            hit: HitParams::default(),
            zoom_limits: ZoomLimits::default(),
            gestures: GestureConfig::default(),
            minimap: MinimapConfig::default(),
            render: RenderOptions::default(),
        }
    }
}

/// A resolved seat selection delivered to the hosting screen.
#[derive(Clone, Debug, PartialEq)]
pub struct SeatSelection {
    /// The selected seat's id.
    pub id: SeatId,
    /// Its display label.
    pub label: String,
    /// Its status at selection time.
    pub status: SeatStatus,
    /// Its resolved appearance (category colors or the default fallback).
    pub style: CategoryStyle,
}

/// Events emitted by [`Viewer::handle_pointer`].
#[derive(Clone, Debug, PartialEq)]
pub enum ViewerEvent {
    /// A tap resolved to this seat. Taps that miss every seat emit nothing.
    SeatSelected(SeatSelection),
    /// The live transform changed; hosts may update a transient overlay
    /// matrix from [`Viewer::effective_transform`].
    ViewChanged,
    /// The pointer sequence ended. When `changed` is set the committed
    /// transform moved and the display list and minimap are stale.
    GestureEnded {
        /// Whether the committed transform changed.
        changed: bool,
    },
}

/// The assembled viewer core.
#[derive(Clone, Debug)]
pub struct Viewer {
    scene: Scene,
    viewport: Viewport,
    composer: GestureComposer,
    config: ViewerConfig,
    last_minimap: Option<ViewTransform>,
}

impl Viewer {
    /// Creates a viewer over a scene snapshot.
    ///
    /// The viewport starts at the identity transform with the view box
    /// derived from the scene (falling back to the documented default for
    /// degenerate scenes).
    #[must_use]
    pub fn new(scene: Scene, container: Size, config: ViewerConfig) -> Self {
        let view_box = scene.view_box(config.view_box_margin);
        let mut viewport = Viewport::new(container, view_box);
        viewport.set_zoom_limits(config.zoom_limits);
        Self {
            scene,
            viewport,
            composer: GestureComposer::new(config.gestures),
            config,
            last_minimap: None,
        }
    }

    /// Returns the current scene snapshot.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Returns the viewport (committed transform, mappings, debug info).
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Returns the transform a host should apply while a gesture is in
    /// flight: live if present, committed otherwise.
    #[must_use]
    pub fn effective_transform(&self) -> ViewTransform {
        self.viewport.effective()
    }

    /// Replaces the scene wholesale and re-derives the view box.
    ///
    /// The committed transform is untouched: refreshing data must not move
    /// the user's view.
    pub fn replace_scene(&mut self, scene: Scene) {
        self.scene = scene;
        let view_box = self.scene.view_box(self.config.view_box_margin);
        self.viewport.set_view_box(view_box);
    }

    /// Updates one seat's status in place. Returns `false` for unknown ids.
    pub fn set_seat_status(&mut self, id: SeatId, status: SeatStatus) -> bool {
        self.scene.set_seat_status(id, status)
    }

    /// Updates the container size (layout change, rotation).
    pub fn set_container(&mut self, container: Size) {
        self.viewport.set_container(container);
    }

    /// Resets the committed transform to identity.
    ///
    /// Composable with an in-flight gesture on last-writer-wins terms; see
    /// `parterre_viewport::Viewport::reset_view`.
    pub fn reset_view(&mut self) {
        self.viewport.reset_view();
    }

    /// Feeds one raw pointer event through gesture recognition, converting
    /// recognized taps into seat selections.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Vec<ViewerEvent> {
        let gesture_events = self.composer.handle_event(event, &mut self.viewport);
        let mut events = Vec::with_capacity(gesture_events.len());
        for ge in gesture_events {
            match ge {
                GestureEvent::TapAt(screen_pt) => {
                    // A recognized tap implies no transform change, so the
                    // committed inverse mapping is the right one to use.
                    let scene_pt = self.viewport.screen_to_scene_point(screen_pt);
                    if let Some(hit) = nearest_seat(scene_pt, &self.scene.seats, &self.config.hit)
                    {
                        let seat = &self.scene.seats[hit.index];
                        events.push(ViewerEvent::SeatSelected(SeatSelection {
                            id: seat.id,
                            label: seat.label.clone(),
                            status: seat.status,
                            style: self.scene.resolve_category(seat),
                        }));
                    }
                }
                GestureEvent::TransformChanged => events.push(ViewerEvent::ViewChanged),
                GestureEvent::Ended { changed } => {
                    events.push(ViewerEvent::GestureEnded { changed });
                }
            }
        }
        events
    }

    /// Builds the display list for the committed transform.
    #[must_use]
    pub fn display_list(&self) -> Vec<DrawOp> {
        build_display_list(&self.scene, &self.viewport, &self.config.render)
    }

    /// Computes an overview frame from the committed transform,
    /// unconditionally.
    #[must_use]
    pub fn minimap_frame(&self) -> MinimapFrame {
        project(
            self.viewport.view_box(),
            self.viewport.container(),
            self.viewport.committed(),
            &self.config.minimap,
        )
    }

    /// Computes an overview frame only when the committed transform moved
    /// past the configured deltas since the last frame this method returned.
    ///
    /// This is the reference gesture-end throttling policy; hosts wanting
    /// continuous sync call [`Viewer::minimap_frame`] instead.
    pub fn minimap_frame_if_changed(&mut self) -> Option<MinimapFrame> {
        let committed = self.viewport.committed();
        let stale = match self.last_minimap {
            Some(prev) => significant_change(prev, committed, &self.config.minimap),
            None => true,
        };
        if !stale {
            return None;
        }
        self.last_minimap = Some(committed);
        Some(self.minimap_frame())
    }

    /// Snapshot of the viewport state for debugging.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        self.viewport.debug_info()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use kurbo::{Point, Rect, Vec2};
    use parterre_gesture::PointerId;
    use parterre_scene::Seat;

    use super::*;

    const F0: PointerId = PointerId(0);
    const F1: PointerId = PointerId(1);

    /// Two seats at (100,100) and (200,100) derive the view box
    /// (0,0)-(300,200); sizing the container to match keeps screen and scene
    /// coordinates identical at the identity transform, which makes tap
    /// positions easy to read.
    fn two_seat_viewer() -> Viewer {
        let scene = Scene::new(
            vec![
                Seat::new(SeatId(1), Point::new(100.0, 100.0), "A1"),
                Seat::new(SeatId(2), Point::new(200.0, 100.0), "A2"),
            ],
            vec![],
        );
        let view_box = scene.view_box(VIEW_BOX_MARGIN);
        let container = Size::new(view_box.width(), view_box.height());
        let mut viewer = Viewer::new(scene, container, ViewerConfig::default());
        // With the container equal to the view box and identity transform,
        // screen (x, y) maps to scene (x + minX, y + minY).
        assert_eq!(viewer.viewport().view_box(), view_box);
        assert_eq!(viewer.effective_transform(), ViewTransform::IDENTITY);
        let _ = viewer.minimap_frame_if_changed();
        viewer
    }

    fn tap(viewer: &mut Viewer, screen: Point) -> Vec<ViewerEvent> {
        viewer.handle_pointer(PointerEvent::Down {
            id: F0,
            pos: screen,
        });
        viewer.handle_pointer(PointerEvent::Up {
            id: F0,
            pos: screen,
        })
    }

    fn screen_for_scene(viewer: &Viewer, scene_pt: Point) -> Point {
        viewer.viewport().scene_to_screen_point(scene_pt)
    }

    #[test]
    fn tap_selects_the_nearest_seat_within_tolerance() {
        let mut viewer = two_seat_viewer();
        let screen = screen_for_scene(&viewer, Point::new(110.0, 100.0));
        let events = tap(&mut viewer, screen);
        match &events[0] {
            ViewerEvent::SeatSelected(sel) => {
                assert_eq!(sel.id, SeatId(1));
                assert_eq!(sel.label, "A1");
                assert_eq!(sel.status, SeatStatus::Available);
                assert_eq!(sel.style, CategoryStyle::DEFAULT);
            }
            other => panic!("expected a selection, got {other:?}"),
        }
    }

    #[test]
    fn tap_equidistant_beyond_tolerance_selects_nothing() {
        let mut viewer = two_seat_viewer();
        // (150,100) is 50 scene units from both seats; tolerance is 40.
        let screen = screen_for_scene(&viewer, Point::new(150.0, 100.0));
        let events = tap(&mut viewer, screen);
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, ViewerEvent::SeatSelected(_))),
            "no seat should be selected: {events:?}"
        );
    }

    #[test]
    fn pan_then_tap_uses_the_committed_transform() {
        let mut viewer = two_seat_viewer();
        let seat_screen = screen_for_scene(&viewer, Point::new(100.0, 100.0));

        // Pan right by 50 px and release.
        viewer.handle_pointer(PointerEvent::Down {
            id: F0,
            pos: Point::new(300.0, 50.0),
        });
        viewer.handle_pointer(PointerEvent::Move {
            id: F0,
            pos: Point::new(350.0, 50.0),
        });
        let events = viewer.handle_pointer(PointerEvent::Up {
            id: F0,
            pos: Point::new(350.0, 50.0),
        });
        assert!(events.contains(&ViewerEvent::GestureEnded { changed: true }));
        assert_eq!(
            viewer.viewport().committed().translate,
            Vec2::new(50.0, 0.0)
        );

        // The seat's old screen position now maps 50 scene units left of the
        // seat: outside tolerance, no selection.
        let events = tap(&mut viewer, seat_screen);
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, ViewerEvent::SeatSelected(_)))
        );

        // Its new screen position (old + 50 px) selects it.
        let events = tap(&mut viewer, seat_screen + Vec2::new(50.0, 0.0));
        assert!(
            events
                .iter()
                .any(|e| matches!(e, ViewerEvent::SeatSelected(s) if s.id == SeatId(1)))
        );
    }

    #[test]
    fn selection_carries_refreshed_status() {
        let mut viewer = two_seat_viewer();
        assert!(viewer.set_seat_status(SeatId(1), SeatStatus::Occupied));

        let screen = screen_for_scene(&viewer, Point::new(100.0, 100.0));
        let events = tap(&mut viewer, screen);
        assert!(
            events
                .iter()
                .any(|e| matches!(e, ViewerEvent::SeatSelected(s) if s.status == SeatStatus::Occupied))
        );
    }

    #[test]
    fn replace_scene_keeps_the_view_put() {
        let mut viewer = two_seat_viewer();

        // Commit a pan first.
        viewer.handle_pointer(PointerEvent::Down {
            id: F0,
            pos: Point::new(300.0, 50.0),
        });
        viewer.handle_pointer(PointerEvent::Move {
            id: F0,
            pos: Point::new(380.0, 50.0),
        });
        viewer.handle_pointer(PointerEvent::Up {
            id: F0,
            pos: Point::new(380.0, 50.0),
        });
        let committed = viewer.viewport().committed();
        assert_ne!(committed, ViewTransform::IDENTITY);

        viewer.replace_scene(Scene::new(
            vec![Seat::new(SeatId(9), Point::new(1000.0, 1000.0), "Z9")],
            vec![],
        ));
        assert_eq!(viewer.viewport().committed(), committed);
        assert_eq!(
            viewer.viewport().view_box(),
            Rect::new(900.0, 900.0, 1100.0, 1100.0)
        );
    }

    #[test]
    fn empty_scene_viewer_is_inert_but_alive() {
        let mut viewer = Viewer::new(
            Scene::default(),
            Size::new(800.0, 600.0),
            ViewerConfig::default(),
        );
        assert_eq!(
            viewer.viewport().view_box(),
            parterre_scene::DEFAULT_VIEW_BOX
        );
        assert!(viewer.display_list().is_empty());

        let events = tap(&mut viewer, Point::new(400.0, 300.0));
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, ViewerEvent::SeatSelected(_)))
        );
    }

    #[test]
    fn pinch_emits_view_changes_and_minimap_refreshes_on_end() {
        let mut viewer = two_seat_viewer();

        viewer.handle_pointer(PointerEvent::Down {
            id: F0,
            pos: Point::new(100.0, 100.0),
        });
        viewer.handle_pointer(PointerEvent::Down {
            id: F1,
            pos: Point::new(200.0, 100.0),
        });
        let events = viewer.handle_pointer(PointerEvent::Move {
            id: F1,
            pos: Point::new(300.0, 100.0),
        });
        assert!(events.contains(&ViewerEvent::ViewChanged));
        // Mid-gesture the committed transform is still identity.
        assert_eq!(viewer.viewport().committed(), ViewTransform::IDENTITY);
        // No committed movement yet, so the throttled minimap stays quiet.
        assert!(viewer.minimap_frame_if_changed().is_none());

        viewer.handle_pointer(PointerEvent::Up {
            id: F1,
            pos: Point::new(300.0, 100.0),
        });
        let events = viewer.handle_pointer(PointerEvent::Up {
            id: F0,
            pos: Point::new(100.0, 100.0),
        });
        assert!(events.contains(&ViewerEvent::GestureEnded { changed: true }));
        assert_eq!(viewer.viewport().committed().scale, 2.0);

        let frame = viewer.minimap_frame_if_changed();
        assert!(frame.is_some(), "zoom from 1.0 to 2.0 is significant");
        // And again without movement: throttled away.
        assert!(viewer.minimap_frame_if_changed().is_none());
    }

    #[test]
    fn reset_view_returns_to_identity() {
        let mut viewer = two_seat_viewer();
        viewer.handle_pointer(PointerEvent::Down {
            id: F0,
            pos: Point::new(300.0, 50.0),
        });
        viewer.handle_pointer(PointerEvent::Move {
            id: F0,
            pos: Point::new(400.0, 150.0),
        });
        viewer.handle_pointer(PointerEvent::Up {
            id: F0,
            pos: Point::new(400.0, 150.0),
        });
        assert_ne!(viewer.viewport().committed(), ViewTransform::IDENTITY);

        viewer.reset_view();
        assert_eq!(viewer.viewport().committed(), ViewTransform::IDENTITY);
    }
}
