//! The editing session: one map, its history and the current tool

use battlemat_core::{
    export_map, import_map, load_map, save_map, FormatError, RegionError, RegionIndex, TileMap,
};
use glam::DVec2;
use std::path::{Path, PathBuf};

use crate::commands::{CommandHistory, TileChangeCommand, TileEdit};
use crate::preferences::EditorPreferences;
use crate::tools::{EditorTool, Hover};
use crate::viewport::Viewport;

const OPEN_MAP: &str = "Open map file.";

/// A headless map editing session
///
/// Pointer gestures arrive in canvas space and are routed through the
/// viewport and the current tool. Every map change goes through the command
/// history so it can be undone.
pub struct Editor {
    map: TileMap,
    history: CommandHistory,
    viewport: Viewport,
    tool: EditorTool,
    hovered: Vec<(RegionIndex, Hover)>,
    /// Viewport offset when the current pan began
    pan_origin: Option<DVec2>,
    dirty: bool,
    path: Option<PathBuf>,
    status: Option<String>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self::with_preferences(&EditorPreferences::default())
    }

    /// Start with the preferred tool and viewport settings
    pub fn with_preferences(preferences: &EditorPreferences) -> Self {
        Self {
            map: TileMap::new(),
            history: CommandHistory::new(),
            viewport: preferences.viewport(),
            tool: preferences.default_tool,
            hovered: Vec::new(),
            pan_origin: None,
            dirty: false,
            path: None,
            status: None,
        }
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn tool(&self) -> EditorTool {
        self.tool
    }

    /// Regions previewed by the gesture in progress
    pub fn hovered(&self) -> &[(RegionIndex, Hover)] {
        &self.hovered
    }

    /// True if the map changed since it was last saved or opened
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The file the map was last saved to or opened from
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Description of the last change, undo or redo
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Switch tools, dropping any gesture in progress
    pub fn set_tool(&mut self, tool: EditorTool) {
        self.cancel();
        self.tool = tool;
    }

    /// Preview a gesture from `start` to `end` in canvas space
    pub fn hover(&mut self, start: DVec2, end: DVec2) {
        let Some(tool) = self.tool.tool() else {
            self.pan(start, end);
            return;
        };
        let start = self.viewport.to_tile_space(start);
        let end = self.viewport.to_tile_space(end);
        self.hovered = tool.preview(&self.map, start, end);
    }

    /// Commit a gesture from `start` to `end` in canvas space. Returns
    /// whether the map changed.
    pub fn select(&mut self, start: DVec2, end: DVec2) -> Result<bool, RegionError> {
        if self.tool == EditorTool::Move {
            self.hovered.clear();
            self.pan(start, end);
            self.pan_origin = None;
            return Ok(false);
        }
        let start = self.viewport.to_tile_space(start);
        let end = self.viewport.to_tile_space(end);
        self.select_tiles(start, end)
    }

    /// Commit a gesture given directly in tile space. The move tool does
    /// nothing here.
    pub fn select_tiles(&mut self, start: DVec2, end: DVec2) -> Result<bool, RegionError> {
        self.hovered.clear();
        let Some(tool) = self.tool.tool() else {
            return Ok(false);
        };
        let edit = tool.select(&self.map, start, end)?;
        Ok(self.commit(edit))
    }

    /// Abandon the gesture in progress
    pub fn cancel(&mut self) {
        self.hovered.clear();
        self.pan_origin = None;
    }

    fn pan(&mut self, start: DVec2, end: DVec2) {
        if start == end {
            return;
        }
        let origin = *self.pan_origin.get_or_insert(self.viewport.offset);
        self.viewport.offset = origin + (end - start);
    }

    /// Run an edit through the history. Edits that change nothing are
    /// dropped.
    pub fn commit(&mut self, edit: TileEdit) -> bool {
        if edit.is_empty() {
            log::debug!("Dropped empty edit: {}", edit.description());
            return false;
        }
        self.status = Some(edit.description().to_string());
        self.history
            .execute(Box::new(TileChangeCommand::new(edit)), &mut self.map);
        self.dirty = true;
        true
    }

    pub fn undo(&mut self) -> bool {
        let description = self.history.undo_description().map(str::to_string);
        if !self.history.undo(&mut self.map) {
            return false;
        }
        self.status = description.map(|d| format!("Undo: {d}"));
        self.dirty = true;
        true
    }

    pub fn redo(&mut self) -> bool {
        let description = self.history.redo_description().map(str::to_string);
        if !self.history.redo(&mut self.map) {
            return false;
        }
        self.status = description.map(|d| format!("Redo: {d}"));
        self.dirty = true;
        true
    }

    /// The map as a JSON document
    pub fn export(&self) -> Result<String, FormatError> {
        export_map(&self.map)
    }

    /// Replace the map with a JSON document, as one undoable change
    pub fn import(&mut self, json: &str) -> Result<bool, FormatError> {
        let map = import_map(json)?;
        Ok(self.replace_map(&map))
    }

    fn replace_map(&mut self, map: &TileMap) -> bool {
        self.cancel();
        self.commit(TileEdit::replace_map(&self.map, map, OPEN_MAP))
    }

    /// Write the map to `path` and remember it as the current file
    pub fn save(&mut self, path: &Path) -> Result<(), FormatError> {
        save_map(&self.map, path)?;
        log::info!("Saved {} tiles to {}", self.map.len(), path.display());
        self.path = Some(path.to_path_buf());
        self.dirty = false;
        Ok(())
    }

    /// Replace the map with the contents of `path`, as one undoable change
    pub fn open(&mut self, path: &Path) -> Result<(), FormatError> {
        let map = load_map(path)?;
        log::info!("Opened {} with {} tiles", path.display(), map.len());
        self.replace_map(&map);
        self.path = Some(path.to_path_buf());
        self.dirty = false;
        Ok(())
    }
}
