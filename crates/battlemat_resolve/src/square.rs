use crate::bounds::BoundingBox;
use crate::RegionResolver;
use battlemat_core::{Region, RegionIndex};
use glam::DVec2;

/// Resolves a gesture to every `Square` in its bounding box
#[derive(Debug, Clone, Copy, Default)]
pub struct SquareResolver;

impl RegionResolver for SquareResolver {
    fn resolve(&self, start: DVec2, end: DVec2) -> Vec<RegionIndex> {
        BoundingBox::of(start, end)
            .cells()
            .map(|tile| RegionIndex::at(tile, Region::Square))
            .collect()
    }
}
