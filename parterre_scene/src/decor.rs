// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decorative scene elements.
//!
//! Sections, shapes, polylines, and text labels give the floor plan its
//! visual structure (rooms, walls, aisle markings, room names). None of them
//! participate in hit-testing or bounds derivation; they are drawn beneath
//! the seats and otherwise ignored by the viewer core.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Size};
use peniko::Color;

/// Identifier for a section.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SectionId(pub u64);

/// A background region of the floor plan, such as a room or zone.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    /// Stable identifier.
    pub id: SectionId,
    /// Display name.
    pub name: String,
    /// Region origin in scene units.
    pub pos: Point,
    /// Region size in scene units.
    pub size: Size,
    /// Fill color.
    pub fill: Color,
    /// Stroke color.
    pub stroke: Color,
    /// `true` when the section is a free-seating area rather than a set of
    /// assigned seats. Purely informational for the viewer core.
    pub free_seating: bool,
}

/// A decorative rectangle (desk outline, pillar, stage, ...).
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    /// Origin in scene units.
    pub pos: Point,
    /// Size in scene units.
    pub size: Size,
    /// Rotation in degrees about the shape center.
    pub rotation: f64,
    /// Fill color.
    pub fill: Color,
    /// Stroke color.
    pub stroke: Color,
}

/// An open polyline, typically a wall or divider.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    /// Vertices in scene units.
    pub points: Vec<Point>,
    /// Stroke width in scene units.
    pub width: f64,
    /// Stroke color.
    pub stroke: Color,
}

/// A free-standing text label.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    /// Anchor position in scene units.
    pub pos: Point,
    /// Label contents.
    pub content: String,
    /// Font size in scene units.
    pub size: f64,
    /// Rotation in degrees about the anchor.
    pub rotation: f64,
    /// Text color.
    pub color: Color,
}
