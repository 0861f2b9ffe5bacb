use serde::{Deserialize, Serialize};

use crate::config::TILE_SIZE;

/// The four edges of a tile, clockwise from north-east.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagDirection {
    NE = 0,
    SE = 1,
    SW = 2,
    NW = 3,
}

/// The eight compass directions a vehicle can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    N = 0,
    NE = 1,
    E = 2,
    SE = 3,
    S = 4,
    SW = 5,
    W = 6,
    NW = 7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Along the x axis, i.e. between the NE and SW edges.
    X,
    /// Along the y axis, i.e. between the NW and SE edges.
    Y,
}

impl DiagDirection {
    pub const ALL: [DiagDirection; 4] = [
        DiagDirection::NE,
        DiagDirection::SE,
        DiagDirection::SW,
        DiagDirection::NW,
    ];

    pub fn reverse(self) -> Self {
        Self::ALL[(self as usize + 2) % 4]
    }

    pub fn axis(self) -> Axis {
        match self {
            DiagDirection::NE | DiagDirection::SW => Axis::X,
            DiagDirection::SE | DiagDirection::NW => Axis::Y,
        }
    }

    pub fn to_direction(self) -> Direction {
        match self {
            DiagDirection::NE => Direction::NE,
            DiagDirection::SE => Direction::SE,
            DiagDirection::SW => Direction::SW,
            DiagDirection::NW => Direction::NW,
        }
    }

    /// Tile offset `(dx, dy)` of the neighbour across this edge.
    pub fn offset(self) -> (i32, i32) {
        match self {
            DiagDirection::NE => (-1, 0),
            DiagDirection::SE => (0, 1),
            DiagDirection::SW => (1, 0),
            DiagDirection::NW => (0, -1),
        }
    }
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    pub fn reverse(self) -> Self {
        Self::ALL[(self as usize + 4) % 8]
    }
}

/// Distance, in sub-tile units, from the fractional position `(fx, fy)` to
/// the given edge of the tile.
pub fn distance_from_tile_edge(side: DiagDirection, fx: u32, fy: u32) -> u32 {
    debug_assert!(fx < TILE_SIZE && fy < TILE_SIZE);
    match side {
        DiagDirection::NE => fx,
        DiagDirection::SE => TILE_SIZE - 1 - fy,
        DiagDirection::SW => TILE_SIZE - 1 - fx,
        DiagDirection::NW => fy,
    }
}
