// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use hashbrown::HashMap;
use kurbo::Rect;

use crate::category::{Category, CategoryId, CategoryStyle};
use crate::decor::{Polyline, Section, Shape, TextLabel};
use crate::seat::{Seat, SeatId, SeatStatus};

/// Margin, in scene units, added on every side of the derived seat bounding
/// box by [`Scene::view_box`].
pub const VIEW_BOX_MARGIN: f64 = 100.0;

/// View box used when a scene has no seats with finite coordinates.
///
/// Keeping a fixed, finite fallback means transform math downstream never has
/// to handle zero-area or NaN extents.
pub const DEFAULT_VIEW_BOX: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

/// One floor-plan document.
///
/// Consumers treat the scene as read-only per render pass. Data changes are
/// applied by replacing the whole scene; only [`Scene::set_seat_status`]
/// mutates in place, for out-of-band occupancy refreshes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Seats, in document order. Hit-test ties resolve to the earliest seat
    /// in this order.
    pub seats: Vec<Seat>,
    /// Categories referenced by seats.
    pub categories: Vec<Category>,
    /// Decorative background regions.
    pub sections: Vec<Section>,
    /// Decorative rectangles.
    pub shapes: Vec<Shape>,
    /// Decorative polylines.
    pub polylines: Vec<Polyline>,
    /// Free-standing text labels.
    pub labels: Vec<TextLabel>,
    category_lookup: HashMap<CategoryId, usize>,
}

impl Scene {
    /// Creates a scene from parts and builds the category lookup.
    #[must_use]
    pub fn new(seats: Vec<Seat>, categories: Vec<Category>) -> Self {
        let mut scene = Self {
            seats,
            categories,
            ..Self::default()
        };
        scene.rebuild_lookup();
        scene
    }

    /// Rebuilds the category id → index lookup.
    ///
    /// Call this after populating [`Scene::categories`] directly. On
    /// duplicate ids the first occurrence wins.
    pub fn rebuild_lookup(&mut self) {
        self.category_lookup.clear();
        for (i, category) in self.categories.iter().enumerate() {
            self.category_lookup.entry(category.id).or_insert(i);
        }
    }

    /// Looks up a category by id.
    #[must_use]
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.category_lookup
            .get(&id)
            .and_then(|&i| self.categories.get(i))
    }

    /// Resolves a seat's appearance, falling back to
    /// [`CategoryStyle::DEFAULT`] when the seat has no category or the
    /// reference is dangling.
    #[must_use]
    pub fn resolve_category(&self, seat: &Seat) -> CategoryStyle {
        seat.category
            .and_then(|id| self.category(id))
            .map(CategoryStyle::from)
            .unwrap_or_default()
    }

    /// Looks up a seat by id.
    #[must_use]
    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == id)
    }

    /// Updates a seat's status in place, returning `false` if the seat does
    /// not exist.
    ///
    /// This is the only sanctioned in-place mutation; everything else about a
    /// scene changes by wholesale replacement.
    pub fn set_seat_status(&mut self, id: SeatId, status: SeatStatus) -> bool {
        match self.seats.iter_mut().find(|s| s.id == id) {
            Some(seat) => {
                seat.status = status;
                true
            }
            None => false,
        }
    }

    /// Returns an iterator over seats with finite positions, paired with
    /// their index in [`Scene::seats`].
    pub fn finite_seats(&self) -> impl Iterator<Item = (usize, &Seat)> {
        self.seats
            .iter()
            .enumerate()
            .filter(|(_, s)| s.has_finite_pos())
    }

    /// Derives the scene bounding box from finite seat positions, expanded by
    /// `margin` on every side.
    ///
    /// Returns [`DEFAULT_VIEW_BOX`] when no seat has finite coordinates, so
    /// the result is always a finite, positive-area rectangle.
    #[must_use]
    pub fn view_box(&self, margin: f64) -> Rect {
        let mut bounds: Option<Rect> = None;
        for (_, seat) in self.finite_seats() {
            let pt = Rect::from_points(seat.pos, seat.pos);
            bounds = Some(match bounds {
                Some(b) => b.union(pt),
                None => pt,
            });
        }
        match bounds {
            Some(b) => b.inflate(margin, margin),
            None => DEFAULT_VIEW_BOX,
        }
    }
}
