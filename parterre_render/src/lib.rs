// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parterre Render: the consumer contract between the viewer core and a
//! drawing backend.
//!
//! This crate turns a `parterre_scene::Scene` plus a committed
//! `parterre_viewport::Viewport` into a flat list of plain-old-data
//! [`DrawOp`]s in screen-pixel coordinates. It deliberately stops there:
//! backends (canvas, GPU, SVG export, a test harness) consume the ops however
//! they like, and the viewer core never learns how pixels are produced.
//!
//! Ordering is part of the contract: decorative elements come first
//! (sections, shapes, polylines, free-standing labels), then seats, then seat
//! labels, so seats always paint above the floor-plan background.
//!
//! Colors are resolved here: a seat with a resolving category uses the
//! category fill and text colors; otherwise its fill comes from the seat's
//! status (see [`status_color`]) with the default text color. Seats with
//! non-finite positions are skipped entirely.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use parterre_render::{DrawOp, RenderOptions, build_display_list};
//! use parterre_scene::{Scene, Seat, SeatId};
//! use parterre_viewport::Viewport;
//!
//! let scene = Scene::new(vec![Seat::new(SeatId(1), Point::new(400.0, 300.0), "A1")], vec![]);
//! let vp = Viewport::new(Size::new(800.0, 600.0), Rect::new(0.0, 0.0, 800.0, 600.0));
//!
//! let ops = build_display_list(&scene, &vp, &RenderOptions::default());
//! assert!(matches!(ops[0], DrawOp::FillCircle { .. }));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect, Vec2};
use parterre_scene::{CategoryStyle, Scene, SeatStatus};
use parterre_viewport::{ComposeTransform, Viewport};
use peniko::Color;

/// Rendering knobs for display-list building.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// Seat radius (circle) or half-extent (square) in scene units.
    pub seat_radius: f64,
    /// Corner radius of square seats, in scene units.
    pub seat_corner_radius: f64,
    /// Minimum committed zoom at which seat labels are emitted. Below this
    /// the text would be illegible anyway, so the ops are skipped.
    pub label_min_scale: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            seat_radius: 14.0,
            seat_corner_radius: 3.0,
            label_min_scale: 0.75,
        }
    }
}

/// One drawing operation in screen-pixel coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// A filled circle (round seat).
    FillCircle {
        /// Center in screen pixels.
        center: Point,
        /// Radius in screen pixels.
        radius: f64,
        /// Fill color.
        color: Color,
    },
    /// A filled, optionally rotated, rounded rectangle (square seat).
    FillRoundRect {
        /// Bounds in screen pixels, before rotation.
        rect: Rect,
        /// Corner radius in screen pixels.
        corner_radius: f64,
        /// Rotation in degrees about the rect center.
        rotation: f64,
        /// Fill color.
        color: Color,
    },
    /// A filled and stroked rectangle (section or decorative shape).
    FillShape {
        /// Bounds in screen pixels, before rotation.
        rect: Rect,
        /// Rotation in degrees about the rect center.
        rotation: f64,
        /// Fill color.
        fill: Color,
        /// Stroke color.
        stroke: Color,
    },
    /// A stroked open polyline (wall, divider).
    StrokePolyline {
        /// Vertices in screen pixels.
        points: Vec<Point>,
        /// Stroke width in screen pixels.
        width: f64,
        /// Stroke color.
        color: Color,
    },
    /// A text run.
    Text {
        /// Anchor in screen pixels.
        pos: Point,
        /// Contents.
        content: String,
        /// Font size in screen pixels.
        size: f64,
        /// Rotation in degrees about the anchor.
        rotation: f64,
        /// Color.
        color: Color,
    },
}

/// Fill color used for a seat whose category reference does not apply.
#[must_use]
pub fn status_color(status: SeatStatus) -> Color {
    match status {
        SeatStatus::Available => Color::from_rgb8(0x4c, 0xaf, 0x50),
        SeatStatus::Occupied => Color::from_rgb8(0xef, 0x53, 0x50),
        SeatStatus::Fixed => Color::from_rgb8(0x7e, 0x57, 0xc2),
        SeatStatus::Blocked => Color::from_rgb8(0x75, 0x75, 0x75),
        SeatStatus::Vacant => Color::from_rgb8(0xff, 0xb7, 0x4d),
    }
}

/// Builds the display list for one frame from the committed transform.
///
/// The viewport's live (mid-gesture) state is intentionally not consulted;
/// renderers only ever see committed transforms, so a frame drawn between
/// gestures can not observe a half-finished one.
#[must_use]
pub fn build_display_list<C: ComposeTransform>(
    scene: &Scene,
    viewport: &Viewport<C>,
    opts: &RenderOptions,
) -> Vec<DrawOp> {
    let mut ops = Vec::new();
    let zoom = viewport.committed().scale;
    let map = |pt: Point| viewport.scene_to_screen_point(pt);

    for section in &scene.sections {
        ops.push(DrawOp::FillShape {
            rect: Rect::from_origin_size(map(section.pos), section.size * zoom),
            rotation: 0.0,
            fill: section.fill,
            stroke: section.stroke,
        });
    }

    for shape in &scene.shapes {
        ops.push(DrawOp::FillShape {
            rect: Rect::from_origin_size(map(shape.pos), shape.size * zoom),
            rotation: shape.rotation,
            fill: shape.fill,
            stroke: shape.stroke,
        });
    }

    for polyline in &scene.polylines {
        ops.push(DrawOp::StrokePolyline {
            points: polyline.points.iter().copied().map(map).collect(),
            width: polyline.width * zoom,
            color: polyline.stroke,
        });
    }

    for label in &scene.labels {
        ops.push(DrawOp::Text {
            pos: map(label.pos),
            content: label.content.clone(),
            size: label.size * zoom,
            rotation: label.rotation,
            color: label.color,
        });
    }

    let show_labels = zoom >= opts.label_min_scale;
    let radius = opts.seat_radius * zoom;
    for (_, seat) in scene.finite_seats() {
        let center = map(seat.pos);
        let (fill, text) = match seat.category.and_then(|id| scene.category(id)) {
            Some(category) => (category.fill, category.text),
            None => (status_color(seat.status), CategoryStyle::DEFAULT.text),
        };

        if seat.square {
            let half = Vec2::new(radius, radius);
            ops.push(DrawOp::FillRoundRect {
                rect: Rect::from_points(center - half, center + half),
                corner_radius: opts.seat_corner_radius * zoom,
                rotation: seat.rotation.unwrap_or(0.0),
                color: fill,
            });
        } else {
            ops.push(DrawOp::FillCircle {
                center,
                radius,
                color: fill,
            });
        }

        if show_labels && !seat.label.is_empty() {
            ops.push(DrawOp::Text {
                pos: center,
                content: seat.label.clone(),
                size: radius,
                rotation: 0.0,
                color: text,
            });
        }
    }

    ops
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;
    use kurbo::Size;
    use parterre_scene::{Category, CategoryId, Polyline, Seat, SeatId};

    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(Size::new(800.0, 600.0), Rect::new(0.0, 0.0, 800.0, 600.0))
    }

    fn scene_with_seats(seats: Vec<Seat>) -> Scene {
        Scene::new(seats, vec![])
    }

    #[test]
    fn seats_paint_above_decor() {
        let mut scene = scene_with_seats(vec![Seat::new(
            SeatId(1),
            Point::new(100.0, 100.0),
            "A1",
        )]);
        scene.polylines.push(Polyline {
            points: vec![Point::ORIGIN, Point::new(50.0, 0.0)],
            width: 2.0,
            stroke: Color::from_rgb8(0, 0, 0),
        });

        let ops = build_display_list(&scene, &viewport(), &RenderOptions::default());
        assert!(matches!(ops[0], DrawOp::StrokePolyline { .. }));
        assert!(matches!(ops[1], DrawOp::FillCircle { .. }));
    }

    #[test]
    fn non_finite_seats_are_skipped() {
        let scene = scene_with_seats(vec![
            Seat::new(SeatId(1), Point::new(f64::NAN, 10.0), "A1"),
            Seat::new(SeatId(2), Point::new(10.0, 10.0), "A2"),
        ]);
        let ops = build_display_list(&scene, &viewport(), &RenderOptions::default());
        // One circle plus one label, nothing for the NaN seat.
        let circles = ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillCircle { .. }))
            .count();
        assert_eq!(circles, 1);
    }

    #[test]
    fn category_fill_wins_over_status() {
        let category = Category {
            id: CategoryId(1),
            name: "Premium".to_string(),
            fill: Color::from_rgb8(1, 2, 3),
            text: Color::from_rgb8(4, 5, 6),
        };
        let mut seat = Seat::new(SeatId(1), Point::new(10.0, 10.0), "A1");
        seat.category = Some(CategoryId(1));
        seat.status = SeatStatus::Occupied;
        let scene = Scene::new(vec![seat], vec![category]);

        let ops = build_display_list(&scene, &viewport(), &RenderOptions::default());
        match &ops[0] {
            DrawOp::FillCircle { color, .. } => assert_eq!(*color, Color::from_rgb8(1, 2, 3)),
            other => panic!("expected a circle, got {other:?}"),
        }
    }

    #[test]
    fn dangling_category_falls_back_to_status_color() {
        let mut seat = Seat::new(SeatId(1), Point::new(10.0, 10.0), "A1");
        seat.category = Some(CategoryId(42));
        seat.status = SeatStatus::Blocked;
        let scene = scene_with_seats(vec![seat]);

        let ops = build_display_list(&scene, &viewport(), &RenderOptions::default());
        match &ops[0] {
            DrawOp::FillCircle { color, .. } => {
                assert_eq!(*color, status_color(SeatStatus::Blocked));
            }
            other => panic!("expected a circle, got {other:?}"),
        }
    }

    #[test]
    fn square_seats_render_as_round_rects() {
        let mut seat = Seat::new(SeatId(1), Point::new(400.0, 300.0), "D1");
        seat.square = true;
        seat.rotation = Some(45.0);
        let scene = scene_with_seats(vec![seat]);

        let ops = build_display_list(&scene, &viewport(), &RenderOptions::default());
        match &ops[0] {
            DrawOp::FillRoundRect { rect, rotation, .. } => {
                assert_eq!(*rotation, 45.0);
                assert_eq!(rect.width(), 28.0);
                assert!((rect.center().x - 400.0).abs() < 1e-9);
            }
            other => panic!("expected a round rect, got {other:?}"),
        }
    }

    #[test]
    fn labels_respect_the_legibility_threshold() {
        let scene = scene_with_seats(vec![Seat::new(SeatId(1), Point::new(10.0, 10.0), "A1")]);
        let mut vp = viewport();

        // Identity zoom (1.0) is above the 0.75 default: label present.
        let ops = build_display_list(&scene, &vp, &RenderOptions::default());
        assert!(ops.iter().any(|op| matches!(op, DrawOp::Text { .. })));

        // Zoomed out to 0.5: label suppressed.
        vp.begin_gesture();
        vp.update_live(|t| t.scale = 0.5);
        vp.commit();
        let ops = build_display_list(&scene, &vp, &RenderOptions::default());
        assert!(!ops.iter().any(|op| matches!(op, DrawOp::Text { .. })));
    }

    #[test]
    fn geometry_scales_with_committed_zoom() {
        let mut scene = scene_with_seats(vec![Seat::new(SeatId(1), Point::new(10.0, 10.0), "")]);
        scene.polylines.push(Polyline {
            points: vec![Point::ORIGIN, Point::new(50.0, 0.0)],
            width: 2.0,
            stroke: Color::from_rgb8(0, 0, 0),
        });
        let mut vp = viewport();
        vp.begin_gesture();
        vp.update_live(|t| t.scale = 2.0);
        vp.commit();

        let ops = build_display_list(&scene, &vp, &RenderOptions::default());
        match &ops[0] {
            DrawOp::StrokePolyline { width, .. } => assert_eq!(*width, 4.0),
            other => panic!("expected a polyline, got {other:?}"),
        }
        match &ops[1] {
            DrawOp::FillCircle { radius, .. } => assert_eq!(*radius, 28.0),
            other => panic!("expected a circle, got {other:?}"),
        }
    }
}
