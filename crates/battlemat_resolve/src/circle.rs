//! Circle outlines
//!
//! The circle is centered on a snapped point: the middle of the start tile
//! when the gesture starts near it, otherwise the tile corner closest to the
//! start. The end point sets the radius. Every cell the circle's rim passes
//! through contributes the one edge or diagonal that best follows the rim.

use crate::bounds::{bound_gesture, cell_of, local_offset};
use crate::RegionResolver;
use battlemat_core::{Region, RegionIndex, TileIndex};
use glam::DVec2;
use std::f64::consts::SQRT_2;

/// Where a circle gesture is centered
#[derive(Debug, Clone, Copy, PartialEq)]
struct Center {
    /// Tile whose top-left corner or middle is the center
    base: TileIndex,
    /// Whether the center is the middle of `base` rather than its corner
    centered: bool,
}

impl Center {
    fn snap(start: DVec2) -> Self {
        let from_middle = local_offset(start) - DVec2::splat(0.5);
        if from_middle.x.abs() + from_middle.y.abs() < 0.5 {
            Self {
                base: cell_of(start),
                centered: true,
            }
        } else {
            Self {
                base: cell_of(start + DVec2::splat(0.5)),
                centered: false,
            }
        }
    }

    /// Offset of the center from the top-left corner of `base`
    fn offset(&self) -> f64 {
        if self.centered {
            0.5
        } else {
            0.0
        }
    }

    fn point(&self) -> DVec2 {
        DVec2::new(f64::from(self.base.x), f64::from(self.base.y)) + self.offset()
    }
}

/// Which corners of a cell lie inside the circle
#[derive(Debug, Clone, Copy)]
struct Corners {
    upper_left: bool,
    upper_right: bool,
    lower_right: bool,
    lower_left: bool,
}

impl Corners {
    fn inside(&self) -> usize {
        [
            self.upper_left,
            self.upper_right,
            self.lower_right,
            self.lower_left,
        ]
        .into_iter()
        .filter(|inside| *inside)
        .count()
    }

    /// The rim segment through `cell`, if the rim crosses it
    ///
    /// Only cells with one or two corners inside carry the rim. Cells with
    /// three corners inside are skipped along with those holding none or all
    /// four: they only clip the rim, and their neighbours already trace it.
    fn rim(&self, cell: TileIndex) -> Option<RegionIndex> {
        if !(1..=2).contains(&self.inside()) {
            return None;
        }

        let index = if self.upper_left {
            if self.upper_right {
                RegionIndex::at(cell.offset(0, 1), Region::TopEdge)
            } else if self.lower_left {
                RegionIndex::at(cell.offset(1, 0), Region::LeftEdge)
            } else {
                RegionIndex::at(cell, Region::NeCross)
            }
        } else if self.upper_right {
            if self.lower_right {
                RegionIndex::at(cell, Region::LeftEdge)
            } else {
                RegionIndex::at(cell, Region::NwCross)
            }
        } else if self.lower_right {
            if self.lower_left {
                RegionIndex::at(cell, Region::TopEdge)
            } else {
                RegionIndex::at(cell, Region::NeCross)
            }
        } else {
            RegionIndex::at(cell, Region::NwCross)
        };
        Some(index)
    }
}

/// Resolves a gesture to the outline of a circle
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleResolver;

impl RegionResolver for CircleResolver {
    fn resolve(&self, start: DVec2, end: DVec2) -> Vec<RegionIndex> {
        let (start, end) = bound_gesture(start, end);
        let center = Center::snap(start);
        let offset = center.offset();
        let radius_sqr = end.distance_squared(center.point());
        let radius = radius_sqr.sqrt();
        let reach = radius.ceil() as i32;

        // Small circles around a tile's middle outline just that tile
        if center.centered && reach < 2 {
            let base = center.base;
            return vec![
                RegionIndex::at(base, Region::TopEdge),
                RegionIndex::at(base, Region::LeftEdge),
                RegionIndex::at(base.offset(0, 1), Region::TopEdge),
                RegionIndex::at(base.offset(1, 0), Region::LeftEdge),
            ];
        }

        let inside = |x: i32, y: i32| {
            let corner = DVec2::new(f64::from(x) - offset, f64::from(y) - offset);
            corner.length_squared() <= radius_sqr
        };

        let mut rim = Vec::new();
        for dx in -reach..=reach {
            for dy in -reach..=reach {
                let middle = DVec2::new(f64::from(dx), f64::from(dy)) + (0.5 - offset);
                let dist = middle.length();
                if dist < radius - SQRT_2 || dist > radius + SQRT_2 {
                    continue;
                }

                let corners = Corners {
                    upper_left: inside(dx, dy),
                    upper_right: inside(dx + 1, dy),
                    lower_right: inside(dx + 1, dy + 1),
                    lower_left: inside(dx, dy + 1),
                };
                if let Some(index) = corners.rim(center.base.offset(dx, dy)) {
                    rim.push(index);
                }
            }
        }
        rim
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn resolve(start: (f64, f64), end: (f64, f64)) -> BTreeSet<RegionIndex> {
        CircleResolver
            .resolve(DVec2::new(start.0, start.1), DVec2::new(end.0, end.1))
            .into_iter()
            .collect()
    }

    fn set(regions: &[(i32, i32, Region)]) -> BTreeSet<RegionIndex> {
        regions
            .iter()
            .map(|&(x, y, region)| RegionIndex::new(x, y, region))
            .collect()
    }

    #[test]
    fn test_center_snapping() {
        let middle = Center::snap(DVec2::new(2.4, 3.6));
        assert!(middle.centered);
        assert_eq!(middle.point(), DVec2::new(2.5, 3.5));

        let corner = Center::snap(DVec2::new(2.9, 3.05));
        assert!(!corner.centered);
        assert_eq!(corner.point(), DVec2::new(3.0, 3.0));
    }

    #[test]
    fn test_small_centered_circle_outlines_tile() {
        let regions = resolve((0.5, 0.5), (0.7, 0.5));
        assert_eq!(
            regions,
            set(&[
                (0, 0, Region::TopEdge),
                (0, 0, Region::LeftEdge),
                (0, 1, Region::TopEdge),
                (1, 0, Region::LeftEdge),
            ])
        );
    }

    #[test]
    fn test_corner_tap_draws_diamond() {
        let regions = resolve((0.1, 0.1), (0.1, 0.1));
        assert_eq!(
            regions,
            set(&[
                (-1, -1, Region::NeCross),
                (-1, 0, Region::NwCross),
                (0, -1, Region::NwCross),
                (0, 0, Region::NeCross),
            ])
        );
    }

    #[test]
    fn test_centered_circle_of_radius_two() {
        let regions = resolve((0.5, 0.5), (2.5, 0.5));
        assert_eq!(
            regions,
            set(&[
                (-2, -1, Region::NeCross),
                (-2, 0, Region::LeftEdge),
                (-2, 1, Region::NwCross),
                (-1, -2, Region::NeCross),
                (-1, 2, Region::NwCross),
                (0, -2, Region::TopEdge),
                (0, 3, Region::TopEdge),
                (1, -2, Region::NwCross),
                (1, 2, Region::NeCross),
                (2, -1, Region::NwCross),
                (2, 1, Region::NeCross),
                (3, 0, Region::LeftEdge),
            ])
        );
    }

    #[test]
    fn test_corner_circle_of_radius_two() {
        let regions = resolve((0.0, 0.0), (2.0, 0.0));
        assert_eq!(
            regions,
            set(&[
                (-2, -2, Region::NeCross),
                (-2, 1, Region::NwCross),
                (-1, 2, Region::NwCross),
                (0, 2, Region::NeCross),
                (1, -2, Region::NwCross),
                (1, 1, Region::NeCross),
                (2, -1, Region::NwCross),
                (2, 0, Region::NeCross),
            ])
        );
    }

    #[test]
    fn test_no_duplicates() {
        let regions = CircleResolver.resolve(DVec2::new(3.2, -1.7), DVec2::new(9.4, 2.2));
        let unique: BTreeSet<_> = regions.iter().copied().collect();
        assert_eq!(unique.len(), regions.len());
        assert!(!regions.is_empty());
    }
}
