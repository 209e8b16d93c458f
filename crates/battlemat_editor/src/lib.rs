//! battlemat_editor - Headless battle map editing
//!
//! This crate provides everything around the region model that an editor
//! front end needs:
//! - Wall, door, terrain and eraser tools with hover previews
//! - Undo/redo support
//! - The canvas to tile-space viewport with zoom and pan
//! - Map file save/open
//! - Persistent preferences
//!
//! # Usage
//!
//! ```rust,ignore
//! use battlemat_editor::{Editor, EditorTool};
//! use glam::DVec2;
//!
//! let mut editor = Editor::new();
//! editor.set_tool(EditorTool::TerrainWater);
//! editor.select(DVec2::new(20.0, 20.0), DVec2::new(100.0, 60.0))?;
//! editor.undo();
//! ```

pub mod commands;
pub mod preferences;
mod session;
pub mod tools;
pub mod viewport;

// Re-export the crates the editor is built on
pub use battlemat_core;
pub use battlemat_resolve;

pub use commands::{Command, CommandHistory, EditBuilder, TileChangeCommand, TileEdit};
pub use preferences::{EditorPreferences, PreferencesError};
pub use session::Editor;
pub use tools::{EditorTool, Hover, Tool};
pub use viewport::Viewport;
