//! The nine regions of a tile
//!
//! ```text
//!   TOP_EDGE
//!  +--------+        +--------+
//!  |\      /|        |UL    UR|
//!  | \NW  / |        |  SQUARE|
//!  |  \  /NE|        |LL    LR|
//!  +--------+        +--------+
//! LEFT_EDGE
//! ```
//!
//! A tile only owns its top and left boundary; the bottom edge of `(x, y)` is
//! the `TOP_EDGE` of `(x, y + 1)` and the right edge is the `LEFT_EDGE` of
//! `(x + 1, y)`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::state::UnknownName;

/// Whether a region is a line (edge-like) or an area (fill)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionClass {
    Edge,
    Fill,
}

impl fmt::Display for RegionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionClass::Edge => f.write_str("edge"),
            RegionClass::Fill => f.write_str("fill"),
        }
    }
}

/// A selectable sub-area of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Region {
    TopEdge,
    LeftEdge,
    /// Diagonal from the top-left corner to the bottom-right corner
    NwCross,
    /// Diagonal from the top-right corner to the bottom-left corner
    NeCross,
    Square,
    UpperLeft,
    UpperRight,
    LowerRight,
    LowerLeft,
}

impl Region {
    pub const ALL: [Region; 9] = [
        Region::TopEdge,
        Region::LeftEdge,
        Region::NwCross,
        Region::NeCross,
        Region::Square,
        Region::UpperLeft,
        Region::UpperRight,
        Region::LowerRight,
        Region::LowerLeft,
    ];

    pub const EDGES: [Region; 4] = [
        Region::TopEdge,
        Region::LeftEdge,
        Region::NwCross,
        Region::NeCross,
    ];

    pub const FILLS: [Region; 5] = [
        Region::Square,
        Region::UpperLeft,
        Region::UpperRight,
        Region::LowerRight,
        Region::LowerLeft,
    ];

    /// The four corner triangles, clockwise from the upper left
    pub const TRIANGLES: [Region; 4] = [
        Region::UpperLeft,
        Region::UpperRight,
        Region::LowerRight,
        Region::LowerLeft,
    ];

    pub const fn class(self) -> RegionClass {
        match self {
            Region::TopEdge | Region::LeftEdge | Region::NwCross | Region::NeCross => {
                RegionClass::Edge
            }
            Region::Square
            | Region::UpperLeft
            | Region::UpperRight
            | Region::LowerRight
            | Region::LowerLeft => RegionClass::Fill,
        }
    }

    pub const fn is_edge(self) -> bool {
        matches!(self.class(), RegionClass::Edge)
    }

    pub const fn is_fill(self) -> bool {
        matches!(self.class(), RegionClass::Fill)
    }

    pub const fn is_triangle(self) -> bool {
        matches!(
            self,
            Region::UpperLeft | Region::UpperRight | Region::LowerRight | Region::LowerLeft
        )
    }

    /// The triangle diagonally across the tile. Together the two cover the
    /// whole square.
    pub const fn opposite(self) -> Option<Region> {
        match self {
            Region::UpperLeft => Some(Region::LowerRight),
            Region::LowerRight => Some(Region::UpperLeft),
            Region::UpperRight => Some(Region::LowerLeft),
            Region::LowerLeft => Some(Region::UpperRight),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Region::TopEdge => "TOP_EDGE",
            Region::LeftEdge => "LEFT_EDGE",
            Region::NwCross => "NW_CROSS",
            Region::NeCross => "NE_CROSS",
            Region::Square => "SQUARE",
            Region::UpperLeft => "UPPER_LEFT",
            Region::UpperRight => "UPPER_RIGHT",
            Region::LowerRight => "LOWER_RIGHT",
            Region::LowerLeft => "LOWER_LEFT",
        }
    }

    /// Position of this region within its class table (`EDGES` or `FILLS`)
    pub(crate) const fn slot(self) -> usize {
        match self {
            Region::TopEdge | Region::Square => 0,
            Region::LeftEdge | Region::UpperLeft => 1,
            Region::NwCross | Region::UpperRight => 2,
            Region::NeCross | Region::LowerRight => 3,
            Region::LowerLeft => 4,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|region| region.name() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}
