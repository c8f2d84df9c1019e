// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Identifier for one pointer (finger or mouse) within a sequence.
///
/// Platform adapters map their native touch identifiers onto this; the
/// composer only requires that an id stays stable between its `Down` and
/// `Up`/`Cancel`.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// A raw pointer event in screen-pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// A pointer made contact.
    Down {
        /// Pointer identity.
        id: PointerId,
        /// Contact position in screen pixels.
        pos: Point,
    },
    /// A pointer moved while in contact.
    Move {
        /// Pointer identity.
        id: PointerId,
        /// New position in screen pixels.
        pos: Point,
    },
    /// A pointer lifted.
    Up {
        /// Pointer identity.
        id: PointerId,
        /// Release position in screen pixels.
        pos: Point,
    },
    /// A pointer was cancelled by the platform (palm rejection, app switch).
    Cancel {
        /// Pointer identity.
        id: PointerId,
    },
}
