use battlemat_core::{Region, RegionError, RegionIndex, Tile, TileMap};
use battlemat_resolve::ResolverKind;
use std::collections::BTreeSet;

use super::{Hover, Tool};
use crate::commands::{EditBuilder, TileEdit};

/// Clears every tile in a rectangle
///
/// The left column keeps its `LeftEdge` and the top row keeps its `TopEdge`,
/// since those edges also bound the tiles just outside the rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EraserTool;

impl Tool for EraserTool {
    fn resolver(&self) -> ResolverKind {
        ResolverKind::Square
    }

    fn plan(&self, map: &TileMap, selection: &[RegionIndex]) -> Result<TileEdit, RegionError> {
        let cells: BTreeSet<_> = selection.iter().map(|index| index.tile).collect();
        let left = cells.iter().map(|cell| cell.x).min();
        let top = cells.iter().map(|cell| cell.y).min();

        let mut builder = EditBuilder::new(map);
        let mut erased = 0;
        for cell in cells {
            let Some(tile) = map.get(cell) else {
                continue;
            };
            erased += 1;

            let mut kept = Tile::new();
            if Some(cell.x) == left {
                kept.set_edge(Region::LeftEdge, tile.edge(Region::LeftEdge)?)?;
            }
            if Some(cell.y) == top {
                kept.set_edge(Region::TopEdge, tile.edge(Region::TopEdge)?)?;
            }
            builder.put(cell, kept);
        }

        Ok(builder.finish(format!("Erased {erased} tiles.")))
    }

    fn hover(&self, _map: &TileMap, selection: &[RegionIndex]) -> Vec<(RegionIndex, Hover)> {
        selection
            .iter()
            .map(|index| (*index, Hover::Remove))
            .collect()
    }
}
