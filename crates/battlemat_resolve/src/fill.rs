use crate::bounds::{bound_gesture, cell_of, local_offset, nearest_corner, BoundingBox};
use crate::RegionResolver;
use battlemat_core::{Region, RegionIndex};
use glam::DVec2;

const EDGE_DIST: f64 = 0.6;

/// Resolves a gesture to a rectangle of squares, or to one corner triangle
/// when it starts close to a tile corner and stays inside that tile
#[derive(Debug, Clone, Copy, Default)]
pub struct FillResolver;

impl RegionResolver for FillResolver {
    fn resolve(&self, start: DVec2, end: DVec2) -> Vec<RegionIndex> {
        let (start, end) = bound_gesture(start, end);
        let bounds = BoundingBox::of(start, end);
        let (triangle, dist) = nearest_corner(local_offset(start));

        if dist >= EDGE_DIST {
            bounds
                .cells()
                .map(|tile| RegionIndex::at(tile, Region::Square))
                .collect()
        } else if bounds.is_single_cell() {
            vec![RegionIndex::at(cell_of(start), triangle)]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_tap_picks_triangle() {
        let point = DVec2::new(1.9, -0.05);
        assert_eq!(
            FillResolver.resolve(point, point),
            vec![RegionIndex::new(1, -1, Region::LowerRight)]
        );
    }

    #[test]
    fn test_triangle_drag_outside_tile_selects_nothing() {
        assert!(FillResolver
            .resolve(DVec2::new(0.1, 0.1), DVec2::new(0.1, 1.5))
            .is_empty());
    }

    #[test]
    fn test_middle_start_fills_rectangle() {
        let regions = FillResolver.resolve(DVec2::new(0.5, 0.5), DVec2::new(1.2, -0.8));
        assert_eq!(
            regions,
            vec![
                RegionIndex::new(0, -1, Region::Square),
                RegionIndex::new(0, 0, Region::Square),
                RegionIndex::new(1, -1, Region::Square),
                RegionIndex::new(1, 0, Region::Square),
            ]
        );
    }
}
