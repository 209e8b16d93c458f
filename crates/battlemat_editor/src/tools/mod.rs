//! Editing tools
//!
//! A tool turns one gesture into a hover preview and, on commit, into a
//! [`TileEdit`]. Tools never touch the map; the editor runs the edit through
//! the command history. Each tool resolves hover and commit with the same
//! resolver so the preview always matches what gets committed.

mod door;
mod eraser;
mod terrain;
mod wall;

pub use door::DoorTool;
pub use eraser::EraserTool;
pub use terrain::TerrainTool;
pub use wall::WallTool;

use battlemat_core::{
    EdgeState, FillState, Region, RegionClass, RegionError, RegionIndex, RegionState, Tile,
    TileMap, UnknownName,
};
use battlemat_resolve::ResolverKind;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::commands::TileEdit;

/// The change a committed gesture would make to one region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Hover {
    /// Left as it is
    #[default]
    None,
    /// Will hold a non-`NONE` state
    Add,
    /// Will be cleared
    Remove,
}

/// A tool that edits tile regions
pub trait Tool: Send + Sync {
    /// The resolver used for both hover and commit
    fn resolver(&self) -> ResolverKind;

    /// Build the edit for an already resolved selection
    fn plan(&self, map: &TileMap, selection: &[RegionIndex]) -> Result<TileEdit, RegionError>;

    /// Tag each selected region with the change committing would make
    fn hover(&self, map: &TileMap, selection: &[RegionIndex]) -> Vec<(RegionIndex, Hover)> {
        let edit = match self.plan(map, selection) {
            Ok(edit) => edit,
            Err(err) => {
                log::debug!("No preview: {err}");
                TileEdit::default()
            }
        };

        selection
            .iter()
            .map(|index| {
                let before = map.tile(index.tile);
                let after = edit
                    .after(index.tile)
                    .map(|tile| tile.unwrap_or_default())
                    .unwrap_or(before);
                let old_state = visible_state(&before, index.region);
                let new_state = visible_state(&after, index.region);
                let hover = if old_state == new_state {
                    Hover::None
                } else if new_state.is_none() {
                    Hover::Remove
                } else {
                    Hover::Add
                };
                (*index, hover)
            })
            .collect()
    }

    /// Resolve a gesture in tile space and preview it
    fn preview(&self, map: &TileMap, start: DVec2, end: DVec2) -> Vec<(RegionIndex, Hover)> {
        let selection = self.resolver().resolve(start, end);
        self.hover(map, &selection)
    }

    /// Resolve a gesture in tile space and build its edit
    fn select(&self, map: &TileMap, start: DVec2, end: DVec2) -> Result<TileEdit, RegionError> {
        let selection = self.resolver().resolve(start, end);
        log::debug!(
            "{} resolved {} regions",
            self.resolver(),
            selection.len()
        );
        self.plan(map, &selection)
    }
}

/// State of a region as drawn: a triangle inside a filled square shows the
/// square's state
pub(crate) fn visible_state(tile: &Tile, region: Region) -> RegionState {
    match tile.state(region) {
        RegionState::Fill(own) => RegionState::Fill(tile.covered_fill(region).unwrap_or(own)),
        edge => edge,
    }
}

/// A wall of the region's class
pub(crate) fn barrier(region: Region) -> RegionState {
    match region.class() {
        RegionClass::Edge => EdgeState::Barrier.into(),
        RegionClass::Fill => FillState::Barrier.into(),
    }
}

/// Available editor tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorTool {
    #[default]
    BoxWall,
    CircleWall,
    DiagWall,
    Door,
    TerrainDifficult,
    TerrainWater,
    Eraser,
    /// Pans the viewport instead of editing
    Move,
}

impl EditorTool {
    pub const ALL: [EditorTool; 8] = [
        EditorTool::BoxWall,
        EditorTool::CircleWall,
        EditorTool::DiagWall,
        EditorTool::Door,
        EditorTool::TerrainDifficult,
        EditorTool::TerrainWater,
        EditorTool::Eraser,
        EditorTool::Move,
    ];

    /// The editing tool behind this entry, `None` for `Move`
    pub fn tool(self) -> Option<Box<dyn Tool>> {
        let tool: Box<dyn Tool> = match self {
            EditorTool::BoxWall => Box::new(WallTool::new(ResolverKind::Box)),
            EditorTool::CircleWall => Box::new(WallTool::new(ResolverKind::Circle)),
            EditorTool::DiagWall => Box::new(WallTool::new(ResolverKind::Diag)),
            EditorTool::Door => Box::new(DoorTool),
            EditorTool::TerrainDifficult => {
                Box::new(TerrainTool::new(FillState::TerrainDifficult))
            }
            EditorTool::TerrainWater => Box::new(TerrainTool::new(FillState::TerrainWater)),
            EditorTool::Eraser => Box::new(EraserTool),
            EditorTool::Move => return None,
        };
        Some(tool)
    }

    pub fn name(self) -> &'static str {
        match self {
            EditorTool::BoxWall => "box_wall",
            EditorTool::CircleWall => "circle_wall",
            EditorTool::DiagWall => "diag_wall",
            EditorTool::Door => "door",
            EditorTool::TerrainDifficult => "terrain_difficult",
            EditorTool::TerrainWater => "terrain_water",
            EditorTool::Eraser => "eraser",
            EditorTool::Move => "move",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EditorTool::BoxWall => "Box Wall",
            EditorTool::CircleWall => "Circle Wall",
            EditorTool::DiagWall => "Diagonal Wall",
            EditorTool::Door => "Door",
            EditorTool::TerrainDifficult => "Difficult Terrain",
            EditorTool::TerrainWater => "Water",
            EditorTool::Eraser => "Eraser",
            EditorTool::Move => "Move",
        }
    }
}

impl fmt::Display for EditorTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EditorTool {
    type Err = UnknownName;

    /// Accepts tool names case-insensitively, with `-` or `_` between words
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.replace('-', "_");
        EditorTool::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(&name))
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}
