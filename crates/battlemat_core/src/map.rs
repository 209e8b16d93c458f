//! Sparse tile container

use std::collections::BTreeMap;

use crate::index::{RegionIndex, TileIndex};
use crate::state::{EdgeState, FillState, RegionState};
use crate::tile::{RegionError, Tile};

/// A map of tiles keyed by grid cell
///
/// Only tiles holding some state are stored: inserting an empty tile removes
/// the cell instead, and an edit that clears the last region of a tile drops
/// it from the map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileMap {
    tiles: BTreeMap<TileIndex, Tile>,
}

impl TileMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored (non-empty) tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, index: TileIndex) -> bool {
        self.tiles.contains_key(&index)
    }

    /// Get the stored tile at an index
    pub fn get(&self, index: TileIndex) -> Option<&Tile> {
        self.tiles.get(&index)
    }

    /// Get the tile at an index, or an empty tile if none is stored
    pub fn tile(&self, index: TileIndex) -> Tile {
        self.tiles.get(&index).copied().unwrap_or_default()
    }

    /// Store a tile, replacing any previous one. Empty tiles are removed
    /// instead of stored.
    pub fn insert(&mut self, index: TileIndex, tile: Tile) -> Option<Tile> {
        if tile.is_empty() {
            self.tiles.remove(&index)
        } else {
            self.tiles.insert(index, tile)
        }
    }

    /// Remove the tile at an index
    pub fn remove(&mut self, index: TileIndex) -> Option<Tile> {
        self.tiles.remove(&index)
    }

    /// Insert or remove depending on `tile`
    pub fn replace(&mut self, index: TileIndex, tile: Option<Tile>) -> Option<Tile> {
        match tile {
            Some(tile) => self.insert(index, tile),
            None => self.remove(index),
        }
    }

    /// Iterate stored tiles in index order
    pub fn iter(&self) -> impl Iterator<Item = (TileIndex, &Tile)> + '_ {
        self.tiles.iter().map(|(index, tile)| (*index, tile))
    }

    /// Edit a copy of the tile at `index` and swap it in only if `edit`
    /// succeeds.
    pub fn update<T>(
        &mut self,
        index: TileIndex,
        edit: impl FnOnce(&mut Tile) -> Result<T, RegionError>,
    ) -> Result<T, RegionError> {
        let mut tile = self.tile(index);
        let result = edit(&mut tile)?;
        self.insert(index, tile);
        Ok(result)
    }

    pub fn edge(&self, index: RegionIndex) -> Result<EdgeState, RegionError> {
        self.tile(index.tile).edge(index.region)
    }

    pub fn fill(&self, index: RegionIndex) -> Result<FillState, RegionError> {
        self.tile(index.tile).fill(index.region)
    }

    pub fn state(&self, index: RegionIndex) -> RegionState {
        self.tile(index.tile).state(index.region)
    }

    pub fn set_edge(&mut self, index: RegionIndex, state: EdgeState) -> Result<(), RegionError> {
        self.update(index.tile, |tile| tile.set_edge(index.region, state))
    }

    pub fn set_fill(&mut self, index: RegionIndex, state: FillState) -> Result<(), RegionError> {
        self.update(index.tile, |tile| tile.set_fill(index.region, state))
    }

    pub fn apply(&mut self, index: RegionIndex, state: RegionState) -> Result<(), RegionError> {
        self.update(index.tile, |tile| tile.apply(index.region, state))
    }
}

impl FromIterator<(TileIndex, Tile)> for TileMap {
    fn from_iter<I: IntoIterator<Item = (TileIndex, Tile)>>(iter: I) -> Self {
        let mut map = TileMap::new();
        for (index, tile) in iter {
            map.insert(index, tile);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Region;

    #[test]
    fn test_new_map_is_empty() {
        let map = TileMap::new();
        assert!(map.is_empty());
        assert_eq!(map.tile(TileIndex::new(4, 4)), Tile::new());
        assert!(map.get(TileIndex::new(4, 4)).is_none());
    }

    #[test]
    fn test_edit_creates_tile() {
        let mut map = TileMap::new();
        map.set_edge(RegionIndex::new(1, 2, Region::LeftEdge), EdgeState::Barrier)
            .unwrap();

        assert_eq!(map.len(), 1);
        assert!(map.contains(TileIndex::new(1, 2)));
        assert_eq!(
            map.edge(RegionIndex::new(1, 2, Region::LeftEdge)).unwrap(),
            EdgeState::Barrier
        );
    }

    #[test]
    fn test_cleared_tile_is_removed() {
        let mut map = TileMap::new();
        let top = RegionIndex::new(0, 0, Region::TopEdge);
        let square = RegionIndex::new(0, 0, Region::Square);

        map.set_edge(top, EdgeState::Door).unwrap();
        map.set_fill(square, FillState::TerrainWater).unwrap();
        map.set_fill(RegionIndex::new(0, 0, Region::UpperLeft), FillState::None)
            .unwrap();
        map.set_fill(RegionIndex::new(0, 0, Region::LowerRight), FillState::None)
            .unwrap();
        assert_eq!(map.len(), 1);

        map.set_edge(top, EdgeState::None).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_failed_edit_changes_nothing() {
        let mut map = TileMap::new();
        let result = map.set_edge(RegionIndex::new(0, 0, Region::Square), EdgeState::Door);
        assert!(result.is_err());
        assert!(map.is_empty());

        let result = map.apply(
            RegionIndex::new(0, 0, Region::TopEdge),
            RegionState::Fill(FillState::Barrier),
        );
        assert!(result.is_err());
        assert!(map.is_empty());
    }

    #[test]
    fn test_insert_empty_tile_removes() {
        let mut map = TileMap::new();
        let index = TileIndex::new(3, 3);
        let mut tile = Tile::new();
        tile.set_fill(Region::Square, FillState::Barrier).unwrap();

        map.insert(index, tile);
        assert!(map.contains(index));

        let previous = map.insert(index, Tile::new());
        assert_eq!(previous, Some(tile));
        assert!(!map.contains(index));
    }

    #[test]
    fn test_iter_is_sorted() {
        let mut map = TileMap::new();
        for (x, y) in [(2, 0), (-1, 5), (0, 0)] {
            map.set_fill(RegionIndex::new(x, y, Region::Square), FillState::Barrier)
                .unwrap();
        }
        let indices: Vec<_> = map.iter().map(|(index, _)| index).collect();
        assert_eq!(
            indices,
            vec![TileIndex::new(-1, 5), TileIndex::new(0, 0), TileIndex::new(2, 0)]
        );
    }
}
