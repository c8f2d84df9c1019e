// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The three recognizer state machines.
//!
//! Each tracker is a small, self-contained machine over positions and spans;
//! none of them touches the viewport. [`crate::GestureComposer`] owns the
//! wiring between trackers and transform state.

use kurbo::{Point, Vec2};

/// Pan recognizer: idle until total movement exceeds a slop threshold, then
/// active for the rest of the sequence.
///
/// The tracker reports total offsets from its origin rather than per-event
/// deltas, so a re-baseline (new origin, new saved translation) is the only
/// state a caller has to manage when the pointer configuration changes
/// mid-gesture.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanTracker {
    origin: Point,
    saved_translate: Vec2,
    threshold: f64,
    active: bool,
}

impl PanTracker {
    /// Starts tracking from `origin`, with the translation baseline captured
    /// at gesture start.
    #[must_use]
    pub fn begin(origin: Point, saved_translate: Vec2, threshold: f64) -> Self {
        Self {
            origin,
            saved_translate,
            threshold,
            active: false,
        }
    }

    /// Feeds a new position. Returns the total offset from the origin once
    /// the threshold has been crossed, `None` while still within slop.
    ///
    /// Activation applies the full offset, not just the post-threshold part,
    /// so the content does not lag the finger by the slop distance.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let offset = pos - self.origin;
        if !self.active && offset.hypot() > self.threshold {
            self.active = true;
        }
        self.active.then_some(offset)
    }

    /// The translation baseline captured when this tracker was (re)based.
    #[must_use]
    pub fn saved_translate(&self) -> Vec2 {
        self.saved_translate
    }

    /// Returns `true` once the movement threshold has been crossed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Pinch recognizer: scales relative to the finger span at two-finger
/// contact.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PinchTracker {
    initial_span: f64,
    saved_scale: f64,
    min_span: f64,
}

impl PinchTracker {
    /// Starts tracking from the span between the two fingers at contact and
    /// the zoom factor in effect at that moment.
    #[must_use]
    pub fn begin(initial_span: f64, saved_scale: f64, min_span: f64) -> Self {
        Self {
            initial_span,
            saved_scale,
            min_span,
        }
    }

    /// Feeds a new finger span, returning the target zoom factor
    /// (unclamped; the viewport owns clamping).
    ///
    /// Returns `None` for degenerate pinches whose initial span is below
    /// `min_span` — two fingers landing almost on top of each other would
    /// otherwise produce wild ratios from sensor noise.
    pub fn update(&self, span: f64) -> Option<f64> {
        if self.initial_span < self.min_span {
            return None;
        }
        Some(self.saved_scale * (span / self.initial_span))
    }
}

/// Tap recognizer: a tap is a sequence that ends with no other recognizer
/// having crossed its threshold.
///
/// The condition is explicit rather than delegated to a framework's
/// arbitration order: the composer disqualifies the tap the moment a pan
/// activates or a second pointer lands, and [`TapTracker::recognize`] simply
/// reports whether that ever happened.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TapTracker {
    disqualified: bool,
}

impl TapTracker {
    /// Starts tracking a fresh sequence.
    #[must_use]
    pub fn begin() -> Self {
        Self {
            disqualified: false,
        }
    }

    /// Marks the sequence as not-a-tap (pan activated, or multi-touch).
    pub fn disqualify(&mut self) {
        self.disqualified = true;
    }

    /// At release: returns the tap point if the sequence qualified.
    #[must_use]
    pub fn recognize(&self, release: Point) -> Option<Point> {
        (!self.disqualified).then_some(release)
    }
}
