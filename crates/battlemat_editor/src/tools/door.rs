use battlemat_core::{EdgeState, RegionError, RegionIndex, TileMap};
use battlemat_resolve::ResolverKind;

use super::Tool;
use crate::commands::{EditBuilder, TileEdit};

/// Places doors on a single edge
///
/// Each commit on the same edge steps it through door, locked door and back
/// to nothing. A gesture that selects anything but exactly one edge does
/// nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoorTool;

impl Tool for DoorTool {
    fn resolver(&self) -> ResolverKind {
        ResolverKind::Edge
    }

    fn plan(&self, map: &TileMap, selection: &[RegionIndex]) -> Result<TileEdit, RegionError> {
        let mut builder = EditBuilder::new(map);
        let [index] = selection else {
            return Ok(builder.finish(""));
        };

        let (next, description) = match builder.tile(index.tile).edge(index.region)? {
            EdgeState::Door => (EdgeState::DoorLocked, "Add locked door."),
            EdgeState::DoorLocked => (EdgeState::None, "Remove door."),
            EdgeState::None | EdgeState::Barrier => (EdgeState::Door, "Add door."),
        };
        builder.apply(*index, next.into())?;
        Ok(builder.finish(description))
    }
}
