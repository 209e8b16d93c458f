//! JSON map document format
//!
//! Tiles with identical contents are grouped under a single shape:
//!
//! ```json
//! {
//!   "version": 1,
//!   "legend": {},
//!   "tiles": [
//!     [{ "e": { "TOP_EDGE": "DOOR" }, "f": { "SQUARE": "BARRIER" } }, [[0, 0], [3, 1]]]
//!   ]
//! }
//! ```
//!
//! `NONE` states and empty tiles are never written.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::index::TileIndex;
use crate::map::TileMap;
use crate::region::Region;
use crate::state::{EdgeState, FillState};
use crate::tile::{RegionError, Tile};

/// The only document version this crate reads and writes
pub const FORMAT_VERSION: u32 = 1;

/// Errors that can occur when reading or writing map documents
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Failed to access map file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse map JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported map version: {0}")]
    UnsupportedVersion(u32),
    #[error("Invalid tile: {0}")]
    Region(#[from] RegionError),
}

/// The non-`NONE` contents of one tile, keyed by region name
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileShape {
    #[serde(rename = "e", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub edges: BTreeMap<Region, EdgeState>,
    #[serde(rename = "f", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fills: BTreeMap<Region, FillState>,
}

impl From<Tile> for TileShape {
    fn from(tile: Tile) -> Self {
        Self {
            edges: tile.edges().collect(),
            fills: tile.fills().collect(),
        }
    }
}

impl TryFrom<TileShape> for Tile {
    type Error = RegionError;

    /// Rebuilds the tile through the normal setters, so a hand-written shape
    /// with both a square and triangles still comes out normalized.
    fn try_from(shape: TileShape) -> Result<Self, Self::Error> {
        let mut tile = Tile::new();
        for (region, state) in shape.edges {
            tile.set_edge(region, state)?;
        }
        for (region, state) in shape.fills {
            tile.set_fill(region, state)?;
        }
        Ok(tile)
    }
}

/// A whole map as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapDocument {
    pub version: u32,
    /// Reserved; written empty and ignored on read
    #[serde(default)]
    pub legend: serde_json::Map<String, serde_json::Value>,
    pub tiles: Vec<(TileShape, Vec<[i32; 2]>)>,
}

impl MapDocument {
    /// Build a document with identical tiles grouped, in sorted order
    pub fn from_map(map: &TileMap) -> Self {
        let mut groups: BTreeMap<TileShape, Vec<[i32; 2]>> = BTreeMap::new();
        for (index, tile) in map.iter() {
            if tile.is_empty() {
                continue;
            }
            groups
                .entry(TileShape::from(*tile))
                .or_default()
                .push([index.x, index.y]);
        }

        Self {
            version: FORMAT_VERSION,
            legend: serde_json::Map::new(),
            tiles: groups.into_iter().collect(),
        }
    }

    /// Rebuild the map described by this document
    pub fn to_map(&self) -> Result<TileMap, FormatError> {
        if self.version != FORMAT_VERSION {
            return Err(FormatError::UnsupportedVersion(self.version));
        }

        let mut map = TileMap::new();
        for (shape, indices) in &self.tiles {
            let tile = Tile::try_from(shape.clone())?;
            for &index in indices {
                map.insert(TileIndex::from(index), tile);
            }
        }
        Ok(map)
    }
}

/// Serialize a map to a JSON string
pub fn export_map(map: &TileMap) -> Result<String, FormatError> {
    let document = MapDocument::from_map(map);
    log::debug!(
        "Exporting {} tiles in {} groups",
        map.len(),
        document.tiles.len()
    );
    Ok(serde_json::to_string(&document)?)
}

/// Parse a map from a JSON string
pub fn import_map(json: &str) -> Result<TileMap, FormatError> {
    let document: MapDocument = serde_json::from_str(json)?;
    let map = document.to_map()?;
    log::debug!("Imported {} tiles", map.len());
    Ok(map)
}

/// Save a map to a JSON file
pub fn save_map(map: &TileMap, path: &Path) -> Result<(), FormatError> {
    let content = export_map(map)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a map from a JSON file
pub fn load_map(path: &Path) -> Result<TileMap, FormatError> {
    let content = std::fs::read_to_string(path)?;
    import_map(&content)
}
