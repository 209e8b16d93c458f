//! Rows of edges or rectangles of squares

use crate::bounds::{bound_gesture, cell_of, local_offset, BoundingBox};
use crate::RegionResolver;
use battlemat_core::{Region, RegionIndex, TileIndex};
use glam::DVec2;

const EDGE_DIST: f64 = 0.3;

/// What the start of a box gesture snapped to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    Square,
    /// A horizontal run of top edges along row `y`
    TopEdge { y: i32 },
    /// A vertical run of left edges along column `x`
    LeftEdge { x: i32 },
}

impl Anchor {
    fn of(base: TileIndex, local: DVec2) -> Self {
        let left = local.x;
        let right = 1.0 - local.x;
        let top = local.y;
        let bottom = 1.0 - local.y;

        if left < EDGE_DIST && left <= top && left <= bottom {
            Anchor::LeftEdge { x: base.x }
        } else if top < EDGE_DIST && top <= right {
            Anchor::TopEdge { y: base.y }
        } else if right < EDGE_DIST && right <= bottom {
            Anchor::LeftEdge {
                x: base.offset(1, 0).x,
            }
        } else if bottom < EDGE_DIST {
            Anchor::TopEdge {
                y: base.offset(0, 1).y,
            }
        } else {
            Anchor::Square
        }
    }
}

/// Resolves a gesture to a run of `TopEdge`s, a run of `LeftEdge`s, or a
/// rectangle of `Square`s, depending on which part of its tile the gesture
/// starts nearest. Only one kind of region appears in any result.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxResolver;

impl RegionResolver for BoxResolver {
    fn resolve(&self, start: DVec2, end: DVec2) -> Vec<RegionIndex> {
        let (start, end) = bound_gesture(start, end);
        let bounds = BoundingBox::of(start, end);
        match Anchor::of(cell_of(start), local_offset(start)) {
            Anchor::Square => bounds
                .cells()
                .map(|tile| RegionIndex::at(tile, Region::Square))
                .collect(),
            Anchor::TopEdge { y } => bounds
                .columns()
                .map(|x| RegionIndex::new(x, y, Region::TopEdge))
                .collect(),
            Anchor::LeftEdge { x } => bounds
                .rows()
                .map(|y| RegionIndex::new(x, y, Region::LeftEdge))
                .collect(),
        }
    }
}
