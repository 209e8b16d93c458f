//! Tile-space helpers shared by the resolvers

use battlemat_core::{Region, TileIndex};
use glam::DVec2;
use std::ops::RangeInclusive;

/// Furthest a gesture may reach from its start point along either axis, in
/// tiles. Longer drags are clamped so every resolve stays bounded.
pub const MAX_GESTURE_SPAN: f64 = 1024.0;

/// Largest tile coordinate a resolver works with. Points further out are
/// pulled back onto this limit, leaving room for a full gesture span and the
/// neighbouring cells it touches inside `i32`.
pub const MAX_COORDINATE: f64 = 1_073_741_824.0;

/// The cell containing a point
pub fn cell_of(point: DVec2) -> TileIndex {
    let cell = point.floor();
    TileIndex::new(cell.x as i32, cell.y as i32)
}

/// Position of a point inside its cell, in `[0, 1)` on both axes
pub fn local_offset(point: DVec2) -> DVec2 {
    point - point.floor()
}

/// The corner triangle of the quadrant holding a tile-local point, with the
/// point's Manhattan distance to that corner
///
/// Points exactly on a midline belong to the right or lower quadrant.
pub(crate) fn nearest_corner(local: DVec2) -> (Region, f64) {
    match (local.x < 0.5, local.y < 0.5) {
        (true, true) => (Region::UpperLeft, local.x + local.y),
        (false, true) => (Region::UpperRight, (1.0 - local.x) + local.y),
        (false, false) => (Region::LowerRight, (1.0 - local.x) + (1.0 - local.y)),
        (true, false) => (Region::LowerLeft, local.x + (1.0 - local.y)),
    }
}

/// Clamp a point onto the coordinate range resolvers work in
pub fn clamp_point(point: DVec2) -> DVec2 {
    let limit = DVec2::splat(MAX_COORDINATE);
    let clamped = point.clamp(-limit, limit);
    if clamped != point {
        log::trace!("Clamped point {point} to {clamped}");
    }
    clamped
}

/// Clamp both ends of a gesture onto the coordinate range, with `end` kept
/// within `MAX_GESTURE_SPAN` of `start`
pub fn bound_gesture(start: DVec2, end: DVec2) -> (DVec2, DVec2) {
    let start = clamp_point(start);
    (start, clamp_gesture(start, clamp_point(end)))
}

/// Clamp `end` so it lies within `MAX_GESTURE_SPAN` of `start`
pub fn clamp_gesture(start: DVec2, end: DVec2) -> DVec2 {
    let span = DVec2::splat(MAX_GESTURE_SPAN);
    let clamped = end.clamp(start - span, start + span);
    if clamped != end {
        log::trace!("Clamped gesture end {end} to {clamped}");
    }
    clamped
}

/// Inclusive range of cells covered by a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BoundingBox {
    /// Cells between `start` and `end`, clamped by `bound_gesture`
    pub fn of(start: DVec2, end: DVec2) -> Self {
        let (start, end) = bound_gesture(start, end);
        let min = cell_of(start.min(end));
        let max = cell_of(start.max(end));
        Self {
            left: min.x,
            top: min.y,
            right: max.x,
            bottom: max.y,
        }
    }

    pub fn columns(&self) -> RangeInclusive<i32> {
        self.left..=self.right
    }

    pub fn rows(&self) -> RangeInclusive<i32> {
        self.top..=self.bottom
    }

    /// Every cell in the box, column by column
    pub fn cells(&self) -> impl Iterator<Item = TileIndex> + '_ {
        self.columns()
            .flat_map(move |x| self.rows().map(move |y| TileIndex::new(x, y)))
    }

    pub fn is_single_cell(&self) -> bool {
        self.left == self.right && self.top == self.bottom
    }
}
