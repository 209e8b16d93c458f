//! States that edge and fill regions can hold

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::region::RegionClass;

/// A region, state or tool name that does not exist
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown name: {0}")]
pub struct UnknownName(pub String);

/// State of an edge-class region (tile boundary or diagonal)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeState {
    #[default]
    None,
    Barrier,
    Door,
    DoorLocked,
}

impl EdgeState {
    pub const ALL: [EdgeState; 4] = [
        EdgeState::None,
        EdgeState::Barrier,
        EdgeState::Door,
        EdgeState::DoorLocked,
    ];

    pub const fn is_none(self) -> bool {
        matches!(self, EdgeState::None)
    }

    pub const fn name(self) -> &'static str {
        match self {
            EdgeState::None => "NONE",
            EdgeState::Barrier => "BARRIER",
            EdgeState::Door => "DOOR",
            EdgeState::DoorLocked => "DOOR_LOCKED",
        }
    }
}

impl fmt::Display for EdgeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EdgeState {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EdgeState::ALL
            .into_iter()
            .find(|state| state.name() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

/// State of a fill-class region (square or corner triangle)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FillState {
    #[default]
    None,
    Barrier,
    TerrainDifficult,
    TerrainWater,
}

impl FillState {
    pub const ALL: [FillState; 4] = [
        FillState::None,
        FillState::Barrier,
        FillState::TerrainDifficult,
        FillState::TerrainWater,
    ];

    pub const fn is_none(self) -> bool {
        matches!(self, FillState::None)
    }

    pub const fn name(self) -> &'static str {
        match self {
            FillState::None => "NONE",
            FillState::Barrier => "BARRIER",
            FillState::TerrainDifficult => "TERRAIN_DIFFICULT",
            FillState::TerrainWater => "TERRAIN_WATER",
        }
    }
}

impl fmt::Display for FillState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FillState {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FillState::ALL
            .into_iter()
            .find(|state| state.name() == s)
            .ok_or_else(|| UnknownName(s.to_string()))
    }
}

/// The state of any region, tagged by class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionState {
    Edge(EdgeState),
    Fill(FillState),
}

impl RegionState {
    pub const fn class(self) -> RegionClass {
        match self {
            RegionState::Edge(_) => RegionClass::Edge,
            RegionState::Fill(_) => RegionClass::Fill,
        }
    }

    pub const fn is_none(self) -> bool {
        match self {
            RegionState::Edge(edge) => edge.is_none(),
            RegionState::Fill(fill) => fill.is_none(),
        }
    }

    /// The empty state for a region class
    pub const fn none(class: RegionClass) -> Self {
        match class {
            RegionClass::Edge => RegionState::Edge(EdgeState::None),
            RegionClass::Fill => RegionState::Fill(FillState::None),
        }
    }
}

impl From<EdgeState> for RegionState {
    fn from(state: EdgeState) -> Self {
        RegionState::Edge(state)
    }
}

impl From<FillState> for RegionState {
    fn from(state: FillState) -> Self {
        RegionState::Fill(state)
    }
}

impl fmt::Display for RegionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionState::Edge(edge) => edge.fmt(f),
            RegionState::Fill(fill) => fill.fmt(f),
        }
    }
}
