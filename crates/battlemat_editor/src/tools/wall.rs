use battlemat_core::{RegionError, RegionIndex, RegionState, TileMap};
use battlemat_resolve::ResolverKind;

use super::{barrier, visible_state, Tool};
use crate::commands::{EditBuilder, TileEdit};

/// Paints walls onto whatever regions its resolver selects
///
/// A single region is toggled between `NONE` and `BARRIER`. A larger
/// selection only adds walls: regions already holding some state are left
/// alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallTool {
    resolver: ResolverKind,
}

impl WallTool {
    pub fn new(resolver: ResolverKind) -> Self {
        Self { resolver }
    }
}

impl Tool for WallTool {
    fn resolver(&self) -> ResolverKind {
        self.resolver
    }

    fn plan(&self, map: &TileMap, selection: &[RegionIndex]) -> Result<TileEdit, RegionError> {
        let mut builder = EditBuilder::new(map);

        if let [index] = selection {
            let current = visible_state(&builder.tile(index.tile), index.region);
            if current.is_none() {
                builder.apply(*index, barrier(index.region))?;
                return Ok(builder.finish("Add wall."));
            }
            builder.apply(*index, RegionState::none(index.region.class()))?;
            return Ok(builder.finish("Remove wall."));
        }

        let mut added = 0;
        for index in selection {
            if visible_state(&builder.tile(index.tile), index.region).is_none() {
                builder.apply(*index, barrier(index.region))?;
                added += 1;
            }
        }
        Ok(builder.finish(format!("Add {added} walls.")))
    }
}
