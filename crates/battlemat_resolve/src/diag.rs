//! Diagonal chains and corner triangles

use crate::bounds::{bound_gesture, cell_of, local_offset, nearest_corner};
use crate::RegionResolver;
use battlemat_core::{Region, RegionIndex};
use glam::DVec2;

const CORNER_DIST: f64 = 0.6;

/// Resolves a gesture to a chain of crosses or a single corner triangle
///
/// A start away from the tile corners anchors on the diagonal through its
/// quadrant and then walks one cell diagonally per step towards the end
/// point. A start close to a corner picks that corner's triangle, which is
/// only valid while the gesture stays inside the tile.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagResolver;

impl DiagResolver {
    /// Anchor region for a tile-local point. The exact tile center counts as
    /// the lower-right quadrant and so anchors on `NwCross`.
    fn anchor(local: DVec2) -> Region {
        let (triangle, dist) = nearest_corner(local);
        if dist > CORNER_DIST {
            match triangle {
                Region::UpperLeft | Region::LowerRight => Region::NwCross,
                _ => Region::NeCross,
            }
        } else {
            triangle
        }
    }
}

impl RegionResolver for DiagResolver {
    fn resolve(&self, start: DVec2, end: DVec2) -> Vec<RegionIndex> {
        let (start, end) = bound_gesture(start, end);
        let base = cell_of(start);
        let anchor = Self::anchor(local_offset(start));

        if start == end {
            return vec![RegionIndex::at(base, anchor)];
        }

        if anchor.is_triangle() {
            return if base == cell_of(end) {
                vec![RegionIndex::at(base, anchor)]
            } else {
                Vec::new()
            };
        }

        let delta = end - start;
        let step_x = if delta.x < 0.0 { -1 } else { 1 };
        let step_y = if delta.y < 0.0 { -1 } else { 1 };
        let cross = if step_x == step_y {
            Region::NwCross
        } else {
            Region::NeCross
        };

        let mut chain = Vec::new();
        let (mut x, mut y) = (0i32, 0i32);
        while f64::from(x.abs()) < delta.x.abs() || f64::from(y.abs()) < delta.y.abs() {
            chain.push(RegionIndex::at(base.offset(x, y), cross));
            x += step_x;
            y += step_y;
        }
        chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battlemat_core::TileIndex;

    #[test]
    fn test_center_tap_picks_nw_cross() {
        let center = DVec2::new(0.5, 0.5);
        assert_eq!(
            DiagResolver.resolve(center, center),
            vec![RegionIndex::new(0, 0, Region::NwCross)]
        );
    }

    #[test]
    fn test_anchor_by_quadrant() {
        assert_eq!(DiagResolver::anchor(DVec2::new(0.1, 0.1)), Region::UpperLeft);
        assert_eq!(DiagResolver::anchor(DVec2::new(0.9, 0.2)), Region::UpperRight);
        assert_eq!(DiagResolver::anchor(DVec2::new(0.8, 0.9)), Region::LowerRight);
        assert_eq!(DiagResolver::anchor(DVec2::new(0.2, 0.7)), Region::LowerLeft);
        assert_eq!(DiagResolver::anchor(DVec2::new(0.4, 0.4)), Region::NwCross);
        assert_eq!(DiagResolver::anchor(DVec2::new(0.6, 0.4)), Region::NeCross);
        assert_eq!(DiagResolver::anchor(DVec2::new(0.4, 0.6)), Region::NeCross);
    }

    #[test]
    fn test_triangle_drag_outside_tile_selects_nothing() {
        let start = DVec2::new(0.1, 0.1);
        assert!(DiagResolver.resolve(start, DVec2::new(1.1, 0.1)).is_empty());
        assert_eq!(
            DiagResolver.resolve(start, DVec2::new(0.3, 0.2)),
            vec![RegionIndex::new(0, 0, Region::UpperLeft)]
        );
    }

    #[test]
    fn test_main_diagonal_chain() {
        let chain = DiagResolver.resolve(DVec2::new(0.5, 0.5), DVec2::new(3.0, 2.5));
        assert_eq!(
            chain,
            vec![
                RegionIndex::new(0, 0, Region::NwCross),
                RegionIndex::new(1, 1, Region::NwCross),
                RegionIndex::new(2, 2, Region::NwCross),
            ]
        );
    }

    #[test]
    fn test_anti_diagonal_chain() {
        let chain = DiagResolver.resolve(DVec2::new(4.5, 4.5), DVec2::new(2.5, 6.5));
        let tiles: Vec<TileIndex> = chain.iter().map(|index| index.tile).collect();
        assert_eq!(tiles, vec![TileIndex::new(4, 4), TileIndex::new(3, 5)]);
        assert!(chain.iter().all(|index| index.region == Region::NeCross));
    }
}
