//! Command pattern for undo/redo

use battlemat_core::{RegionError, RegionIndex, RegionState, Tile, TileIndex, TileMap};
use std::collections::{BTreeMap, BTreeSet};

/// A command that can be undone/redone
pub trait Command: Send + Sync {
    /// Execute the command (do/redo)
    fn execute(&self, map: &mut TileMap);
    /// Undo the command
    fn undo(&self, map: &mut TileMap);
    /// Get a description of the command
    fn description(&self) -> &str;
}

/// A set of tile changes with a human readable description
///
/// Each touched cell maps to its tile before and after the edit, `None`
/// meaning no tile is stored there. Cells whose tile does not change are
/// never recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileEdit {
    changes: BTreeMap<TileIndex, (Option<Tile>, Option<Tile>)>,
    description: String,
}

impl TileEdit {
    /// Create from before/after tile snapshots of the same cells
    pub fn from_diff(
        before: BTreeMap<TileIndex, Option<Tile>>,
        mut after: BTreeMap<TileIndex, Option<Tile>>,
        description: impl Into<String>,
    ) -> Self {
        let changes = before
            .into_iter()
            .filter_map(|(index, old_tile)| {
                let new_tile = after.remove(&index).flatten();
                (old_tile != new_tile).then_some((index, (old_tile, new_tile)))
            })
            .collect();
        Self {
            changes,
            description: description.into(),
        }
    }

    /// An edit turning every tile of `old` into the matching tile of `new`
    pub fn replace_map(old: &TileMap, new: &TileMap, description: impl Into<String>) -> Self {
        let cells: BTreeSet<TileIndex> = old
            .iter()
            .chain(new.iter())
            .map(|(index, _)| index)
            .collect();
        let before = cells.iter().map(|&index| (index, old.get(index).copied())).collect();
        let after = cells.iter().map(|&index| (index, new.get(index).copied())).collect();
        Self::from_diff(before, after, description)
    }

    /// Returns `true` if nothing would change
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of cells that change
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Tile stored at `index` once the edit is applied, if the edit touches it
    pub fn after(&self, index: TileIndex) -> Option<Option<Tile>> {
        self.changes.get(&index).map(|(_, new_tile)| *new_tile)
    }

    /// Changed cells with their tiles before and after, in index order
    pub fn changes(&self) -> impl Iterator<Item = (TileIndex, Option<Tile>, Option<Tile>)> + '_ {
        self.changes
            .iter()
            .map(|(index, (old_tile, new_tile))| (*index, *old_tile, *new_tile))
    }
}

/// Collects tile edits against a map without touching it
///
/// Reads see the edits made so far, so a region painted twice in one
/// gesture observes its first write.
pub struct EditBuilder<'a> {
    map: &'a TileMap,
    staged: BTreeMap<TileIndex, Tile>,
}

impl<'a> EditBuilder<'a> {
    pub fn new(map: &'a TileMap) -> Self {
        Self {
            map,
            staged: BTreeMap::new(),
        }
    }

    /// The tile at `index` with staged edits applied
    pub fn tile(&self, index: TileIndex) -> Tile {
        self.staged
            .get(&index)
            .copied()
            .unwrap_or_else(|| self.map.tile(index))
    }

    /// Replace the tile at `index`
    pub fn put(&mut self, index: TileIndex, tile: Tile) {
        self.staged.insert(index, tile);
    }

    /// Set one region, keeping the tile's fills normalized
    pub fn apply(&mut self, index: RegionIndex, state: RegionState) -> Result<(), RegionError> {
        let mut tile = self.tile(index.tile);
        tile.apply(index.region, state)?;
        self.put(index.tile, tile);
        Ok(())
    }

    /// Finish the edit, dropping cells that ended up unchanged
    pub fn finish(self, description: impl Into<String>) -> TileEdit {
        let map = self.map;
        let before = self
            .staged
            .keys()
            .map(|index| (*index, map.get(*index).copied()))
            .collect();
        let after = self
            .staged
            .into_iter()
            .map(|(index, tile)| (index, (!tile.is_empty()).then_some(tile)))
            .collect();
        TileEdit::from_diff(before, after, description)
    }
}

/// Command for a batch of tile changes (one tool gesture or a whole map swap)
pub struct TileChangeCommand {
    edit: TileEdit,
}

impl TileChangeCommand {
    pub fn new(edit: TileEdit) -> Self {
        Self { edit }
    }

    pub fn edit(&self) -> &TileEdit {
        &self.edit
    }
}

impl From<TileEdit> for TileChangeCommand {
    fn from(edit: TileEdit) -> Self {
        Self::new(edit)
    }
}

impl Command for TileChangeCommand {
    fn execute(&self, map: &mut TileMap) {
        for (index, _, new_tile) in self.edit.changes() {
            map.replace(index, new_tile);
        }
    }

    fn undo(&self, map: &mut TileMap) {
        for (index, old_tile, _) in self.edit.changes() {
            map.replace(index, old_tile);
        }
    }

    fn description(&self) -> &str {
        self.edit.description()
    }
}

/// Stores command history for undo/redo
#[derive(Default)]
pub struct CommandHistory {
    /// Stack of commands that have been executed
    undo_stack: Vec<Box<dyn Command>>,
    /// Stack of commands that have been undone
    redo_stack: Vec<Box<dyn Command>>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a command and add it to history
    pub fn execute(&mut self, command: Box<dyn Command>, map: &mut TileMap) {
        log::info!("{}", command.description());
        command.execute(map);
        self.undo_stack.push(command);
        self.redo_stack.clear();
    }

    /// Undo the last command. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self, map: &mut TileMap) -> bool {
        let Some(command) = self.undo_stack.pop() else {
            return false;
        };
        log::info!("Undo: {}", command.description());
        command.undo(map);
        self.redo_stack.push(command);
        true
    }

    /// Redo the last undone command. Returns `false` if there was nothing to
    /// redo.
    pub fn redo(&mut self, map: &mut TileMap) -> bool {
        let Some(command) = self.redo_stack.pop() else {
            return false;
        };
        log::info!("Redo: {}", command.description());
        command.execute(map);
        self.undo_stack.push(command);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get description of command to undo
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.last().map(|c| c.description())
    }

    /// Get description of command to redo
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack.last().map(|c| c.description())
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
