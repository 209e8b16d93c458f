//! Grid cell and region identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::region::Region;

/// Identifies one grid cell. Cell `(x, y)` covers `[x, x+1) × [y, y+1)` in
/// tile space.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct TileIndex {
    pub x: i32,
    pub y: i32,
}

impl TileIndex {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell `dx` columns and `dy` rows away from this one, stopping at
    /// the edge of the `i32` grid
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl From<(i32, i32)> for TileIndex {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for TileIndex {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for TileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Identifies one selectable region anywhere on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionIndex {
    pub tile: TileIndex,
    pub region: Region,
}

impl RegionIndex {
    pub const fn new(x: i32, y: i32, region: Region) -> Self {
        Self {
            tile: TileIndex::new(x, y),
            region,
        }
    }

    pub const fn at(tile: TileIndex, region: Region) -> Self {
        Self { tile, region }
    }
}

impl fmt::Display for RegionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tile, self.region.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_value_equality() {
        let a = TileIndex::new(3, -2);
        let b = TileIndex::from((3, -2));
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(RegionIndex::at(a, Region::TopEdge));
        assert!(set.contains(&RegionIndex::new(3, -2, Region::TopEdge)));
        assert!(!set.contains(&RegionIndex::new(3, -2, Region::LeftEdge)));
    }

    #[test]
    fn test_offset() {
        assert_eq!(TileIndex::new(1, 1).offset(-2, 3), TileIndex::new(-1, 4));
    }

    #[test]
    fn test_offset_stops_at_grid_edge() {
        let corner = TileIndex::new(i32::MAX, i32::MIN);
        assert_eq!(corner.offset(1, -1), corner);
    }

    #[test]
    fn test_display() {
        let index = RegionIndex::new(2, 5, Region::NwCross);
        assert_eq!(index.to_string(), "(2, 5) NW_CROSS");
    }
}
