// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use kurbo::Point;

use crate::category::CategoryId;

/// Identifier for a seat within a scene.
///
/// Stable for the lifetime of the scene document; selection events carry it
/// back to the hosting screen.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatId(pub u64);

/// Occupancy state of a seat.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum SeatStatus {
    /// Free and selectable.
    #[default]
    Available,
    /// Currently assigned to someone.
    Occupied,
    /// Permanently assigned; not offered for new allocations.
    Fixed,
    /// Administratively unavailable.
    Blocked,
    /// Recently vacated, pending cleanup or reassignment.
    Vacant,
}

/// A single seat in scene-space coordinates.
///
/// Seats are the only scene elements that participate in hit-testing. A seat
/// whose position is not finite (NaN or infinite on either axis) is excluded
/// from both rendering and hit-testing; see [`Seat::has_finite_pos`].
#[derive(Clone, Debug, PartialEq)]
pub struct Seat {
    /// Stable identifier.
    pub id: SeatId,
    /// Position in scene units.
    pub pos: Point,
    /// Display label ("A1", "Desk 14", ...).
    pub label: String,
    /// Current occupancy state.
    pub status: SeatStatus,
    /// Optional category reference for fill/text colors.
    pub category: Option<CategoryId>,
    /// Render as a square instead of a circle.
    pub square: bool,
    /// Optional rotation in degrees, applied to square seats when rendering.
    /// Never consulted by hit-testing.
    pub rotation: Option<f64>,
}

impl Seat {
    /// Creates an available, circular, uncategorized seat.
    pub fn new(id: SeatId, pos: Point, label: impl Into<String>) -> Self {
        Self {
            id,
            pos,
            label: label.into(),
            status: SeatStatus::default(),
            category: None,
            square: false,
            rotation: None,
        }
    }

    /// Returns `true` if both coordinates are finite numbers.
    ///
    /// Seats failing this check are skipped by rendering, hit-testing, and
    /// bounds derivation rather than poisoning the math with NaN.
    #[must_use]
    pub fn has_finite_pos(&self) -> bool {
        self.pos.x.is_finite() && self.pos.y.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_seat_defaults() {
        let seat = Seat::new(SeatId(7), Point::new(1.0, 2.0), "B3");
        assert_eq!(seat.status, SeatStatus::Available);
        assert_eq!(seat.category, None);
        assert!(!seat.square);
        assert!(seat.has_finite_pos());
    }

    #[test]
    fn non_finite_positions_are_detected() {
        let mut seat = Seat::new(SeatId(1), Point::new(f64::NAN, 0.0), "X");
        assert!(!seat.has_finite_pos());

        seat.pos = Point::new(0.0, f64::INFINITY);
        assert!(!seat.has_finite_pos());

        seat.pos = Point::new(-10.0, 10.0);
        assert!(seat.has_finite_pos());
    }
}
