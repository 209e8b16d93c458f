use battlemat_core::{FillState, RegionError, RegionIndex, TileMap};
use battlemat_resolve::ResolverKind;

use super::{visible_state, Tool};
use crate::commands::{EditBuilder, TileEdit};

/// Paints one kind of terrain onto squares and corner triangles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerrainTool {
    terrain: FillState,
}

impl TerrainTool {
    pub fn new(terrain: FillState) -> Self {
        Self { terrain }
    }

    pub fn terrain(&self) -> FillState {
        self.terrain
    }
}

impl Tool for TerrainTool {
    fn resolver(&self) -> ResolverKind {
        ResolverKind::Fill
    }

    fn plan(&self, map: &TileMap, selection: &[RegionIndex]) -> Result<TileEdit, RegionError> {
        let mut builder = EditBuilder::new(map);

        if let [index] = selection {
            let current = visible_state(&builder.tile(index.tile), index.region);
            if current.is_none() {
                builder.apply(*index, self.terrain.into())?;
                return Ok(builder.finish("Add terrain to 1 tile."));
            }
            builder.apply(*index, FillState::None.into())?;
            return Ok(builder.finish("Remove terrain from 1 tile."));
        }

        for index in selection {
            builder.apply(*index, self.terrain.into())?;
        }
        Ok(builder.finish(format!("Add terrain to {} tiles.", selection.len())))
    }
}
