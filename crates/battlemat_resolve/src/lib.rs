//! Gesture resolvers for battlemat
//!
//! A resolver turns a pointer gesture, given as a start and end point in
//! tile space (one unit per tile), into the set of tile regions it selects.
//! Resolvers hold no state, so one instance serves hover previews and
//! commits alike.
//!
//! # Modes
//! - `BoxResolver` - rows of edges or rectangles of squares
//! - `SquareResolver` - rectangles of squares only
//! - `EdgeResolver` - a single edge or diagonal inside one tile
//! - `DiagResolver` - chains of diagonals or a single corner triangle
//! - `FillResolver` - rectangles of squares or a single corner triangle
//! - `CircleResolver` - the outline of a circle dragged out from a snapped center
//!
//! # Example
//!
//! ```rust,ignore
//! use battlemat_resolve::{ResolverKind, RegionResolver};
//! use glam::DVec2;
//!
//! let regions = ResolverKind::Box.resolve(DVec2::new(0.5, 0.5), DVec2::new(2.5, 1.5));
//! assert_eq!(regions.len(), 6);
//! ```

pub mod bounds;
mod circle;
mod diag;
mod edge;
mod fill;
mod rect;
mod square;

pub use bounds::{BoundingBox, MAX_COORDINATE, MAX_GESTURE_SPAN};
pub use circle::CircleResolver;
pub use diag::DiagResolver;
pub use edge::EdgeResolver;
pub use fill::FillResolver;
pub use rect::BoxResolver;
pub use square::SquareResolver;

use battlemat_core::{RegionIndex, UnknownName};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Turns a gesture in tile space into the regions it selects
///
/// Implementations must be pure: the same two points always give the same
/// regions, with no duplicates. `start == end` is a tap. A gesture that is
/// not valid for the mode (such as leaving the tile in a single-tile mode)
/// resolves to an empty list.
pub trait RegionResolver: Send + Sync {
    fn resolve(&self, start: DVec2, end: DVec2) -> Vec<RegionIndex>;
}

/// The available selection modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolverKind {
    Box,
    Square,
    Edge,
    Diag,
    Fill,
    Circle,
}

impl ResolverKind {
    pub const ALL: [ResolverKind; 6] = [
        ResolverKind::Box,
        ResolverKind::Square,
        ResolverKind::Edge,
        ResolverKind::Diag,
        ResolverKind::Fill,
        ResolverKind::Circle,
    ];

    /// The resolver implementing this mode
    pub fn resolver(self) -> &'static dyn RegionResolver {
        match self {
            ResolverKind::Box => &BoxResolver,
            ResolverKind::Square => &SquareResolver,
            ResolverKind::Edge => &EdgeResolver,
            ResolverKind::Diag => &DiagResolver,
            ResolverKind::Fill => &FillResolver,
            ResolverKind::Circle => &CircleResolver,
        }
    }

    pub fn resolve(self, start: DVec2, end: DVec2) -> Vec<RegionIndex> {
        self.resolver().resolve(start, end)
    }

    pub fn name(self) -> &'static str {
        match self {
            ResolverKind::Box => "box",
            ResolverKind::Square => "square",
            ResolverKind::Edge => "edge",
            ResolverKind::Diag => "diag",
            ResolverKind::Fill => "fill",
            ResolverKind::Circle => "circle",
        }
    }
}

impl fmt::Display for ResolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResolverKind {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResolverKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_name_lookup() {
        for kind in ResolverKind::ALL {
            assert_eq!(kind.name().parse::<ResolverKind>().unwrap(), kind);
        }
        assert_eq!("BOX".parse::<ResolverKind>().unwrap(), ResolverKind::Box);
        assert!("lasso".parse::<ResolverKind>().is_err());
    }

    #[test]
    fn test_kind_serde() {
        let json = serde_json::to_string(&ResolverKind::Circle).unwrap();
        assert_eq!(json, "\"circle\"");
    }

    #[test]
    fn test_kind_dispatch() {
        let point = DVec2::new(0.5, 0.5);
        assert_eq!(
            ResolverKind::Square.resolve(point, point),
            SquareResolver.resolve(point, point)
        );
    }
}
