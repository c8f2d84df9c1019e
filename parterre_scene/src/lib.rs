// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parterre Scene: the immutable floor-plan document consumed by the viewer.
//!
//! A [`Scene`] describes one seating floor plan in scene-space coordinates:
//! - [`Seat`]s, the only elements that participate in hit-testing.
//! - [`Category`] records referenced by seats for fill/text colors.
//! - [`Section`]s, [`Shape`]s, [`Polyline`]s, and [`TextLabel`]s, which are
//!   purely decorative.
//!
//! The scene is treated as read-only by every consumer. When the underlying
//! data changes, the hosting screen supplies a whole new `Scene` rather than
//! patching the old one; the single exception is [`Scene::set_seat_status`],
//! which lets a refresh update a seat's occupancy without rebuilding the
//! document.
//!
//! ## Derived bounds
//!
//! The scene does not store its own bounding box. [`Scene::view_box`] derives
//! it from the finite seat positions, expanded by a margin, and falls back to
//! [`DEFAULT_VIEW_BOX`] when no seat has usable coordinates, so downstream
//! transform math never sees NaN or infinite extents.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use parterre_scene::{Scene, Seat, SeatId, SeatStatus, VIEW_BOX_MARGIN};
//!
//! let mut scene = Scene::default();
//! scene.seats.push(Seat::new(SeatId(1), Point::new(100.0, 100.0), "A1"));
//! scene.seats.push(Seat::new(SeatId(2), Point::new(300.0, 140.0), "A2"));
//! scene.rebuild_lookup();
//!
//! let vb = scene.view_box(VIEW_BOX_MARGIN);
//! assert_eq!(vb.min_x(), 0.0); // 100 - margin
//! assert_eq!(scene.seats[0].status, SeatStatus::Available);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod category;
mod decor;
mod scene;
mod seat;

pub use category::{Category, CategoryId, CategoryStyle};
pub use decor::{Polyline, Section, SectionId, Shape, TextLabel};
pub use scene::{DEFAULT_VIEW_BOX, Scene, VIEW_BOX_MARGIN};
pub use seat::{Seat, SeatId, SeatStatus};
