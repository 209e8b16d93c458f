//! Core data structures for battlemat
//!
//! This crate provides the fundamental types for representing a battle map
//! drawn on a grid of square tiles:
//! - `TileIndex` / `RegionIndex` - Identify a cell and a sub-tile region
//! - `Region` - The nine per-tile regions (four edge-like lines, five fills)
//! - `EdgeState` / `FillState` - What an edge or fill region holds
//! - `Tile` - Per-tile region state with fill normalization
//! - `TileMap` - Sparse container that never stores empty tiles
//! - `export_map` / `import_map` - The JSON map document format

mod format;
mod index;
mod map;
mod region;
mod state;
mod tile;

pub use format::{
    export_map, import_map, load_map, save_map, FormatError, MapDocument, TileShape,
    FORMAT_VERSION,
};
pub use index::{RegionIndex, TileIndex};
pub use map::TileMap;
pub use region::{Region, RegionClass};
pub use state::{EdgeState, FillState, RegionState, UnknownName};
pub use tile::{RegionError, Tile};
