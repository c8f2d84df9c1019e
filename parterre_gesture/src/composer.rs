// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use kurbo::Point;
use parterre_viewport::{ComposeTransform, Viewport};
use smallvec::SmallVec;

use crate::pointer::{PointerEvent, PointerId};
use crate::trackers::{PanTracker, PinchTracker, TapTracker};

/// Recognition thresholds for the gesture set.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureConfig {
    /// Radial movement, in pixels, past which a pan activates and a tap is
    /// disqualified. Using one shared slop value avoids the dead zone where a
    /// sequence scrolls visually but still fires a tap on release.
    pub pan_threshold: f64,
    /// Minimum finger span, in pixels, for a pinch to produce scale changes.
    /// Fingers landing nearly on top of each other yield noise ratios.
    pub min_pinch_span: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pan_threshold: 8.0,
            min_pinch_span: 10.0,
        }
    }
}

/// Output of one processed pointer event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureEvent {
    /// The sequence ended as a tap at this screen position. The caller
    /// converts it through the viewport's inverse mapping for hit-testing.
    TapAt(Point),
    /// The viewport's live transform changed this event.
    TransformChanged,
    /// The sequence ended; `changed` reports whether the committed transform
    /// differs from before the gesture.
    Ended {
        /// Whether the commit changed the committed transform.
        changed: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct PointerSample {
    id: PointerId,
    pos: Point,
}

/// Composes the pan, pinch, and tap recognizers over one pointer stream and
/// drives a viewport's live transform slot.
///
/// All three recognizers listen to every event; disambiguation happens
/// through each machine's own threshold, never through an exclusive arbiter.
/// See the crate docs for the composition rules.
#[derive(Clone, Debug, Default)]
pub struct GestureComposer {
    config: GestureConfig,
    pointers: SmallVec<[PointerSample; 2]>,
    pan: Option<PanTracker>,
    pinch: Option<PinchTracker>,
    tap: TapTracker,
}

impl GestureComposer {
    /// Creates a composer with explicit thresholds.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> GestureConfig {
        self.config
    }

    /// Returns `true` while at least one pointer is in contact.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        !self.pointers.is_empty()
    }

    /// Processes one raw pointer event against the viewport.
    ///
    /// Transform updates land in the viewport's live slot; the committed slot
    /// changes only when the last pointer lifts and at least one recognizer
    /// crossed its threshold. Events the composer cannot attribute (moves for
    /// unknown pointer ids) are ignored.
    pub fn handle_event<C: ComposeTransform>(
        &mut self,
        event: PointerEvent,
        viewport: &mut Viewport<C>,
    ) -> Vec<GestureEvent> {
        match event {
            PointerEvent::Down { id, pos } => {
                self.on_down(id, pos, viewport);
                Vec::new()
            }
            PointerEvent::Move { id, pos } => self.on_move(id, pos, viewport),
            PointerEvent::Up { id, pos } => self.on_up(id, Some(pos), viewport),
            PointerEvent::Cancel { id } => self.on_up(id, None, viewport),
        }
    }

    fn on_down<C: ComposeTransform>(&mut self, id: PointerId, pos: Point, vp: &mut Viewport<C>) {
        match self.pointers.iter_mut().find(|p| p.id == id) {
            Some(sample) => sample.pos = pos,
            None => self.pointers.push(PointerSample { id, pos }),
        }
        match self.pointers.len() {
            1 => {
                vp.begin_gesture();
                self.tap = TapTracker::begin();
                self.pinch = None;
                self.pan = Some(PanTracker::begin(
                    pos,
                    vp.effective().translate,
                    self.config.pan_threshold,
                ));
            }
            2 => {
                // A second touch point means this can no longer be a tap,
                // moved or not.
                self.tap.disqualify();
                self.begin_pinch(vp);
            }
            _ => {
                // Extra fingers don't participate; the first two keep
                // defining the pinch span and pan midpoint.
                self.tap.disqualify();
            }
        }
    }

    fn on_move<C: ComposeTransform>(
        &mut self,
        id: PointerId,
        pos: Point,
        vp: &mut Viewport<C>,
    ) -> Vec<GestureEvent> {
        let Some(sample) = self.pointers.iter_mut().find(|p| p.id == id) else {
            return Vec::new();
        };
        sample.pos = pos;

        let mut transformed = false;

        if let (Some(pinch), Some((span, _))) = (self.pinch, self.span_and_mid())
            && let Some(target) = pinch.update(span)
        {
            vp.update_live(|t| t.scale = target);
            transformed = true;
        }

        // The pan tracks the single pointer, or the pinch midpoint when two
        // fingers are down — that is what makes zoom-while-panning work.
        let focus = match self.span_and_mid() {
            Some((_, mid)) => Some(mid),
            None => self.pointers.first().map(|p| p.pos),
        };
        if let (Some(pan), Some(focus)) = (self.pan.as_mut(), focus)
            && let Some(offset) = pan.update(focus)
        {
            self.tap.disqualify();
            let saved = pan.saved_translate();
            // Dividing by the current scale keeps pan speed constant in
            // scene terms across zoom levels.
            vp.update_live(|t| t.translate = saved + offset / t.scale);
            transformed = true;
        }

        if transformed {
            alloc::vec![GestureEvent::TransformChanged]
        } else {
            Vec::new()
        }
    }

    fn on_up<C: ComposeTransform>(
        &mut self,
        id: PointerId,
        pos: Option<Point>,
        vp: &mut Viewport<C>,
    ) -> Vec<GestureEvent> {
        let Some(index) = self.pointers.iter().position(|p| p.id == id) else {
            return Vec::new();
        };
        self.pointers.remove(index);

        if !self.pointers.is_empty() {
            // Fingers remain: fall back to the survivors without committing.
            // Rebasing the pan from the *live* transform is what prevents a
            // visible jump back to the committed state.
            match self.span_and_mid() {
                Some(_) => self.begin_pinch(vp),
                None => {
                    self.pinch = None;
                    if let Some(survivor) = self.pointers.first() {
                        self.pan = Some(PanTracker::begin(
                            survivor.pos,
                            vp.effective().translate,
                            self.config.pan_threshold,
                        ));
                    }
                }
            }
            return Vec::new();
        }

        // Last pointer lifted: resolve the whole sequence.
        let mut events = Vec::new();
        let tap = pos.and_then(|p| self.tap.recognize(p));
        let changed = match tap {
            Some(p) => {
                // Nothing crossed a threshold; drop the live slot so jitter
                // below the slop radius never reaches committed state.
                vp.cancel();
                events.push(GestureEvent::TapAt(p));
                false
            }
            None if pos.is_some() => vp.commit(),
            None => {
                // Platform cancel: discard everything.
                vp.cancel();
                false
            }
        };
        events.push(GestureEvent::Ended { changed });

        self.pan = None;
        self.pinch = None;
        events
    }

    fn begin_pinch<C: ComposeTransform>(&mut self, vp: &mut Viewport<C>) {
        if let Some((span, mid)) = self.span_and_mid() {
            let effective = vp.effective();
            self.pinch = Some(PinchTracker::begin(
                span,
                effective.scale,
                self.config.min_pinch_span,
            ));
            self.pan = Some(PanTracker::begin(
                mid,
                effective.translate,
                self.config.pan_threshold,
            ));
        }
    }

    fn span_and_mid(&self) -> Option<(f64, Point)> {
        match self.pointers.as_slice() {
            [a, b, ..] => Some(((b.pos - a.pos).hypot(), a.pos.midpoint(b.pos))),
            _ => None,
        }
    }
}
