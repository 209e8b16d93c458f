//! Single edge or diagonal picks inside one tile

use crate::bounds::{bound_gesture, cell_of, local_offset};
use crate::RegionResolver;
use battlemat_core::{Region, RegionIndex};
use glam::DVec2;

const EDGE_DIST: f64 = 0.3;

/// Resolves a gesture to the one edge or cross nearest its start
///
/// Starting near the tile boundary picks the closest `LeftEdge` or `TopEdge`,
/// starting near the middle picks the diagonal the point leans towards.
/// Gestures that end in another tile select nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeResolver;

impl RegionResolver for EdgeResolver {
    fn resolve(&self, start: DVec2, end: DVec2) -> Vec<RegionIndex> {
        let (start, end) = bound_gesture(start, end);
        let base = cell_of(start);
        if base != cell_of(end) {
            return Vec::new();
        }

        let local = local_offset(start);
        let inner = (local - DVec2::splat(0.5)).abs();
        if inner.x > EDGE_DIST || inner.y > EDGE_DIST {
            let (horizontal_dist, horizontal) = if local.x < 0.5 {
                (local.x, base)
            } else {
                (1.0 - local.x, base.offset(1, 0))
            };
            let (vertical_dist, vertical) = if local.y < 0.5 {
                (local.y, base)
            } else {
                (1.0 - local.y, base.offset(0, 1))
            };

            let region = if horizontal_dist < vertical_dist {
                RegionIndex::at(horizontal, Region::LeftEdge)
            } else {
                RegionIndex::at(vertical, Region::TopEdge)
            };
            return vec![region];
        }

        let region = if (local.x < 0.5) ^ (local.y < 0.5) {
            Region::NeCross
        } else {
            Region::NwCross
        };
        vec![RegionIndex::at(base, region)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tap(x: f64, y: f64) -> Vec<RegionIndex> {
        let point = DVec2::new(x, y);
        EdgeResolver.resolve(point, point)
    }

    #[test]
    fn test_leaving_the_tile_selects_nothing() {
        assert!(EdgeResolver
            .resolve(DVec2::new(0.5, 0.5), DVec2::new(1.5, 0.5))
            .is_empty());
    }

    #[test]
    fn test_drag_within_tile_uses_start() {
        assert_eq!(
            EdgeResolver.resolve(DVec2::new(0.1, 0.5), DVec2::new(0.9, 0.9)),
            vec![RegionIndex::new(0, 0, Region::LeftEdge)]
        );
    }

    #[test]
    fn test_boundary_picks_nearest_edge() {
        assert_eq!(tap(0.9, 0.5), vec![RegionIndex::new(1, 0, Region::LeftEdge)]);
        assert_eq!(tap(0.5, 0.1), vec![RegionIndex::new(0, 0, Region::TopEdge)]);
        assert_eq!(tap(2.4, -0.1), vec![RegionIndex::new(2, 0, Region::TopEdge)]);
        // equally near both edges: the top or bottom edge wins
        assert_eq!(tap(0.125, 0.125), vec![RegionIndex::new(0, 0, Region::TopEdge)]);
    }

    #[test]
    fn test_center_picks_leaning_diagonal() {
        assert_eq!(tap(0.4, 0.4), vec![RegionIndex::new(0, 0, Region::NwCross)]);
        assert_eq!(tap(0.6, 0.6), vec![RegionIndex::new(0, 0, Region::NwCross)]);
        assert_eq!(tap(0.6, 0.4), vec![RegionIndex::new(0, 0, Region::NeCross)]);
        assert_eq!(tap(0.4, 0.6), vec![RegionIndex::new(0, 0, Region::NeCross)]);
        assert_eq!(tap(0.5, 0.5), vec![RegionIndex::new(0, 0, Region::NwCross)]);
    }
}
