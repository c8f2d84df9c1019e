// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parterre Gesture: pan, pinch, and tap recognition over one pointer stream.
//!
//! The floor-plan viewer needs three gestures recognized **simultaneously**:
//! continuous panning, pinch zooming, and tap selection. There is no
//! exclusive arbiter deciding which gesture "owns" the stream; instead each
//! recognizer is an independent state machine with its own threshold, all
//! evaluated against the same raw [`PointerEvent`]s:
//!
//! - [`PanTracker`] activates once single-pointer (or pinch-midpoint)
//!   movement exceeds a slop threshold; its output is scale-compensated so a
//!   pan feels the same at any zoom level.
//! - [`PinchTracker`] activates on a second pointer and scales relative to
//!   the span between the fingers at contact.
//! - [`TapTracker`] recognizes a tap only when the sequence ends without any
//!   other recognizer having crossed its threshold. Because all three listen
//!   concurrently, a failed pan still resolves as a tap.
//!
//! [`GestureComposer`] wires the trackers to a `parterre_viewport::Viewport`:
//! it seeds the viewport's live transform slot at first contact, mutates it
//! while recognizers are active, and commits (or cancels, if nothing crossed
//! a threshold) when the last pointer lifts. A sequence that stays below
//! every threshold therefore leaves the committed transform bit-identical —
//! finger jitter cannot accumulate drift.
//!
//! When one finger of a pinch lifts, the remaining finger re-baselines a pan
//! from the *live* (uncommitted) transform, so the view does not jump back to
//! the last committed state mid-gesture.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use parterre_gesture::{GestureComposer, GestureEvent, PointerEvent, PointerId};
//! use parterre_viewport::Viewport;
//!
//! let mut vp = Viewport::new(Size::new(400.0, 300.0), Rect::new(0.0, 0.0, 400.0, 300.0));
//! let mut composer = GestureComposer::default();
//!
//! let finger = PointerId(0);
//! composer.handle_event(PointerEvent::Down { id: finger, pos: Point::new(100.0, 100.0) }, &mut vp);
//! let events = composer.handle_event(
//!     PointerEvent::Up { id: finger, pos: Point::new(101.0, 100.0) },
//!     &mut vp,
//! );
//! // Movement stayed under the pan threshold: this was a tap.
//! assert!(events.contains(&GestureEvent::TapAt(Point::new(101.0, 100.0))));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod composer;
mod pointer;
mod trackers;

pub use composer::{GestureComposer, GestureConfig, GestureEvent};
pub use pointer::{PointerEvent, PointerId};
pub use trackers::{PanTracker, PinchTracker, TapTracker};
