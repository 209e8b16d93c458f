//! Per-tile region state
//!
//! A `Tile` stores one `EdgeState` per edge-class region and one `FillState`
//! per fill-class region in fixed tables indexed by region. Fill writes keep
//! the square and the corner triangles consistent:
//!
//! - either `SQUARE` is set and all four triangles are `NONE`,
//! - or `SQUARE` is `NONE` and any triangles hold independent states.
//!
//! Two equal opposite triangles cover the whole tile and collapse back into
//! `SQUARE`; painting a different state onto one triangle of a filled square
//! splits it into two triangles.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::TileShape;
use crate::region::{Region, RegionClass};
use crate::state::{EdgeState, FillState, RegionState};

/// Errors raised by class-checked region accessors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegionError {
    #[error("{region} is not an {expected} region")]
    WrongRegionClass {
        region: Region,
        expected: RegionClass,
    },
}

/// State of a single grid cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "TileShape", try_from = "TileShape")]
pub struct Tile {
    edges: [EdgeState; 4],
    fills: [FillState; 5],
}

impl Tile {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if every region is `NONE`. Empty tiles are never stored in a map.
    pub fn is_empty(&self) -> bool {
        self.edges.iter().all(|e| e.is_none()) && self.fills.iter().all(|f| f.is_none())
    }

    /// Get the state of an edge region
    pub fn edge(&self, region: Region) -> Result<EdgeState, RegionError> {
        check_class(region, RegionClass::Edge)?;
        Ok(self.edges[region.slot()])
    }

    /// Set the state of an edge region. Edges are independent of each other.
    pub fn set_edge(&mut self, region: Region, state: EdgeState) -> Result<(), RegionError> {
        check_class(region, RegionClass::Edge)?;
        self.edges[region.slot()] = state;
        Ok(())
    }

    /// Get the stored state of a fill region
    ///
    /// A triangle inside a filled square reads as `NONE`; use
    /// [`Tile::covered_fill`] to ask what actually covers it.
    pub fn fill(&self, region: Region) -> Result<FillState, RegionError> {
        check_class(region, RegionClass::Fill)?;
        Ok(self.fills[region.slot()])
    }

    /// The fill covering a region: the square's state if the square is set,
    /// otherwise the region's own state.
    pub fn covered_fill(&self, region: Region) -> Result<FillState, RegionError> {
        let own = self.fill(region)?;
        let square = self.fills[Region::Square.slot()];
        Ok(if square.is_none() { own } else { square })
    }

    /// Set the state of a fill region, splitting or merging the square and
    /// its triangles as needed.
    pub fn set_fill(&mut self, region: Region, state: FillState) -> Result<(), RegionError> {
        check_class(region, RegionClass::Fill)?;

        let square = self.fills[Region::Square.slot()];
        match region.opposite() {
            Some(opposite) if !square.is_none() && square != state => {
                // Split: the untouched half keeps the square's old state.
                self.fills[region.slot()] = state;
                self.fills[opposite.slot()] = square;
                self.fills[Region::Square.slot()] = FillState::None;
            }
            _ => self.fills[region.slot()] = state,
        }

        self.optimize_fills();
        Ok(())
    }

    /// Restore the square/triangle invariant, collapsing equal opposite
    /// triangles into the square. Running it twice changes nothing.
    pub fn optimize_fills(&mut self) {
        let square = self.fills[Region::Square.slot()];
        if !square.is_none() {
            self.set_square_only(square);
            return;
        }

        for (a, b) in [
            (Region::UpperLeft, Region::LowerRight),
            (Region::UpperRight, Region::LowerLeft),
        ] {
            let state = self.fills[a.slot()];
            if !state.is_none() && state == self.fills[b.slot()] {
                self.set_square_only(state);
                return;
            }
        }
    }

    fn set_square_only(&mut self, state: FillState) {
        self.fills = [FillState::None; 5];
        self.fills[Region::Square.slot()] = state;
    }

    /// State of any region, tagged by its class
    pub fn state(&self, region: Region) -> RegionState {
        match region.class() {
            RegionClass::Edge => RegionState::Edge(self.edges[region.slot()]),
            RegionClass::Fill => RegionState::Fill(self.fills[region.slot()]),
        }
    }

    /// Set any region from a tagged state. The state's class must match the
    /// region's class.
    pub fn apply(&mut self, region: Region, state: RegionState) -> Result<(), RegionError> {
        match state {
            RegionState::Edge(edge) => self.set_edge(region, edge),
            RegionState::Fill(fill) => self.set_fill(region, fill),
        }
    }

    /// Edge regions holding a non-`NONE` state
    pub fn edges(&self) -> impl Iterator<Item = (Region, EdgeState)> + '_ {
        Region::EDGES
            .into_iter()
            .map(|region| (region, self.edges[region.slot()]))
            .filter(|(_, state)| !state.is_none())
    }

    /// Fill regions holding a non-`NONE` state
    pub fn fills(&self) -> impl Iterator<Item = (Region, FillState)> + '_ {
        Region::FILLS
            .into_iter()
            .map(|region| (region, self.fills[region.slot()]))
            .filter(|(_, state)| !state.is_none())
    }
}

fn check_class(region: Region, expected: RegionClass) -> Result<(), RegionError> {
    if region.class() == expected {
        Ok(())
    } else {
        Err(RegionError::WrongRegionClass { region, expected })
    }
}
