// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use peniko::Color;

/// Identifier for a seat category.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub u64);

/// A named appearance group referenced by seats.
///
/// Categories carry the colors a seat renders with. A seat whose category
/// reference does not resolve falls back to [`CategoryStyle::DEFAULT`]; a
/// dangling reference is never a hard failure.
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    /// Stable identifier.
    pub id: CategoryId,
    /// Display name ("Premium", "Quiet zone", ...).
    pub name: String,
    /// Seat fill color.
    pub fill: Color,
    /// Seat label text color.
    pub text: Color,
}

/// Resolved appearance for a seat: fill plus text color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CategoryStyle {
    /// Seat fill color.
    pub fill: Color,
    /// Seat label text color.
    pub text: Color,
}

impl CategoryStyle {
    /// Fallback appearance used when a seat has no category or the reference
    /// does not resolve.
    pub const DEFAULT: Self = Self {
        fill: Color::from_rgb8(0x9e, 0x9e, 0x9e),
        text: Color::from_rgb8(0xff, 0xff, 0xff),
    };
}

impl Default for CategoryStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<&Category> for CategoryStyle {
    fn from(category: &Category) -> Self {
        Self {
            fill: category.fill,
            text: category.text,
        }
    }
}
