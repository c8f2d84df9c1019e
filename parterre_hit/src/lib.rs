// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parterre Hit: nearest-seat lookup under a tap point.
//!
//! Given a scene-space query point, [`nearest_seat`] returns the seat the
//! user most likely intended to select, or `None`. It is a pure function of
//! `(point, seat slice, params)` with no hidden state, which keeps it
//! trivially testable without any rendering harness: the caller converts the
//! tap's screen position into scene space first (see `parterre_viewport`) and
//! passes a snapshot of the seats.
//!
//! ## Semantics
//!
//! - Linear scan over the slice; seats with non-finite positions are skipped,
//!   never an error.
//! - A seat is eligible iff its Euclidean distance is **strictly less** than
//!   [`HitParams::tolerance`]. A point exactly at the radius misses.
//! - On a tie in minimal distance, the earliest seat in slice order wins.
//!   This is a fixed, tested tie-break, not an artifact of iteration order of
//!   some map.
//!
//! Floor plans in this product run to hundreds of seats, so a linear scan per
//! tap is well under any latency budget and avoids carrying a spatial index
//! that would have to be rebuilt on every wholesale scene replacement.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use parterre_hit::{HitParams, nearest_seat};
//! use parterre_scene::{Seat, SeatId};
//!
//! let seats = [
//!     Seat::new(SeatId(1), Point::new(100.0, 100.0), "A1"),
//!     Seat::new(SeatId(2), Point::new(200.0, 100.0), "A2"),
//! ];
//!
//! let hit = nearest_seat(Point::new(110.0, 100.0), &seats, &HitParams::default());
//! assert_eq!(hit.unwrap().id, SeatId(1));
//!
//! // Equidistant from both seats and past the tolerance radius: no hit.
//! assert!(nearest_seat(Point::new(150.0, 100.0), &seats, &HitParams::default()).is_none());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::Point;
use parterre_scene::{Seat, SeatId};

/// Tunable parameters for seat hit testing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitParams {
    /// Maximum distance, in scene units, at which a seat is considered hit.
    /// The comparison is strict: a seat exactly at this distance misses.
    pub tolerance: f64,
}

impl Default for HitParams {
    /// The reference tolerance of 40 scene units, roughly a fingertip at the
    /// product's typical seat spacing.
    fn default() -> Self {
        Self { tolerance: 40.0 }
    }
}

/// A resolved seat hit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SeatHit {
    /// Index of the seat in the queried slice.
    pub index: usize,
    /// The seat's identifier.
    pub id: SeatId,
    /// Euclidean distance from the query point, in scene units.
    pub distance: f64,
}

/// Finds the closest seat to `pt` within `params.tolerance`.
///
/// Returns `None` when the slice is empty or no seat is close enough. Seats
/// with non-finite positions are skipped.
#[must_use]
pub fn nearest_seat(pt: Point, seats: &[Seat], params: &HitParams) -> Option<SeatHit> {
    let mut best: Option<SeatHit> = None;
    for (index, seat) in seats.iter().enumerate() {
        if !seat.has_finite_pos() {
            continue;
        }
        let distance = seat.pos.distance(pt);
        if distance >= params.tolerance {
            continue;
        }
        // Strict `<` on the running minimum keeps the earliest seat on ties.
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(SeatHit {
                index,
                id: seat.id,
                distance,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(id: u64, x: f64, y: f64) -> Seat {
        Seat::new(SeatId(id), Point::new(x, y), "S")
    }

    #[test]
    fn empty_slice_misses() {
        assert_eq!(
            nearest_seat(Point::ORIGIN, &[], &HitParams::default()),
            None
        );
    }

    #[test]
    fn selects_the_closer_seat() {
        let seats = [seat(1, 100.0, 100.0), seat(2, 200.0, 100.0)];
        let hit = nearest_seat(Point::new(110.0, 100.0), &seats, &HitParams::default());
        let hit = hit.unwrap();
        assert_eq!(hit.id, SeatId(1));
        assert_eq!(hit.index, 0);
        assert!((hit.distance - 10.0).abs() < 1e-12);
    }

    #[test]
    fn midpoint_beyond_tolerance_misses_both() {
        let seats = [seat(1, 100.0, 100.0), seat(2, 200.0, 100.0)];
        // Distance 50 from each seat, tolerance 40.
        assert_eq!(
            nearest_seat(Point::new(150.0, 100.0), &seats, &HitParams::default()),
            None
        );
    }

    #[test]
    fn tolerance_boundary_is_exclusive() {
        let seats = [seat(1, 0.0, 0.0)];
        let params = HitParams { tolerance: 40.0 };

        // Exactly at the radius: miss.
        assert_eq!(nearest_seat(Point::new(40.0, 0.0), &seats, &params), None);
        // Just inside: hit.
        let hit = nearest_seat(Point::new(40.0 - 1e-9, 0.0), &seats, &params);
        assert_eq!(hit.unwrap().id, SeatId(1));
    }

    #[test]
    fn equidistant_tie_resolves_to_first_in_order() {
        let seats = [seat(7, -10.0, 0.0), seat(8, 10.0, 0.0)];
        let params = HitParams { tolerance: 40.0 };
        for _ in 0..3 {
            let hit = nearest_seat(Point::ORIGIN, &seats, &params).unwrap();
            assert_eq!(hit.id, SeatId(7));
        }

        // Swapping slice order swaps the winner: the tie-break is slice
        // order, nothing else.
        let swapped = [seats[1].clone(), seats[0].clone()];
        let hit = nearest_seat(Point::ORIGIN, &swapped, &params).unwrap();
        assert_eq!(hit.id, SeatId(8));
    }

    #[test]
    fn non_finite_seats_are_skipped_not_fatal() {
        let seats = [
            seat(1, f64::NAN, f64::NAN),
            seat(2, 5.0, 0.0),
            seat(3, f64::INFINITY, 0.0),
        ];
        let hit = nearest_seat(Point::ORIGIN, &seats, &HitParams::default()).unwrap();
        assert_eq!(hit.id, SeatId(2));
    }

    #[test]
    fn all_non_finite_misses() {
        let seats = [seat(1, f64::NAN, 0.0)];
        assert_eq!(
            nearest_seat(Point::ORIGIN, &seats, &HitParams::default()),
            None
        );
    }
}
