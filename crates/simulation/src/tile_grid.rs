//! Per-tile storage.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use map::config::{TILE_HEIGHT, TILE_SIZE};
use map::{DiagDirection, MapSize, TileArea, TileIndex};

use crate::company::Owner;
use crate::config::MAX_TILE_HEIGHT;
use crate::rail::RailType;

/// Tag selecting the handler set for a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    Clear,
    RailDepot,
}

impl TileType {
    pub const COUNT: usize = 2;
    pub const ALL: [TileType; Self::COUNT] = [TileType::Clear, TileType::RailDepot];
}

/// Raised corners of a tile. The north corner is at the tile's own (x, y),
/// west at (x + 1, y), east at (x, y + 1) and south at (x + 1, y + 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Slope(pub u8);

impl Slope {
    pub const FLAT: Slope = Slope(0);
    pub const W: Slope = Slope(0x01);
    pub const S: Slope = Slope(0x02);
    pub const E: Slope = Slope(0x04);
    pub const N: Slope = Slope(0x08);
    /// Set together with three corners: the corner opposite the lowered one
    /// is two levels up.
    pub const STEEP: Slope = Slope(0x10);

    pub const NW: Slope = Slope(Self::N.0 | Self::W.0);
    pub const SW: Slope = Slope(Self::S.0 | Self::W.0);
    pub const SE: Slope = Slope(Self::S.0 | Self::E.0);
    pub const NE: Slope = Slope(Self::N.0 | Self::E.0);

    #[inline]
    pub fn is_flat(self) -> bool {
        self == Self::FLAT
    }

    #[inline]
    pub fn is_steep(self) -> bool {
        self.0 & Self::STEEP.0 != 0
    }

    /// Height of the highest corner above the lowest.
    pub fn max_z(self) -> u8 {
        if self.is_flat() {
            0
        } else if self.is_steep() {
            2
        } else {
            1
        }
    }

    pub fn contains(self, corners: Slope) -> bool {
        self.0 & corners.0 == corners.0
    }

    pub fn intersects(self, corners: Slope) -> bool {
        self.0 & corners.0 != 0
    }

    /// The two corners along the given tile edge.
    pub fn edge_corners(dir: DiagDirection) -> Slope {
        match dir {
            DiagDirection::NE => Slope::NE,
            DiagDirection::SE => Slope::SE,
            DiagDirection::SW => Slope::SW,
            DiagDirection::NW => Slope::NW,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TropicZone {
    #[default]
    Normal,
    Desert,
    Rainforest,
}

/// Ground under a piece of rail. `IceDesert` is snow in the arctic and
/// sand in the tropics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RailGroundType {
    #[default]
    Grass,
    IceDesert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepotTile {
    /// Edge the depot entrance faces.
    pub direction: DiagDirection,
    pub rail_type: RailType,
    /// A train has reserved a path through the entrance.
    pub reserved: bool,
    pub ground: RailGroundType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TileContent {
    #[default]
    Clear,
    RailDepot(DepotTile),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Tile {
    pub owner: Owner,
    /// Height level of the lowest corner.
    pub height: u8,
    pub slope: Slope,
    pub tropic_zone: TropicZone,
    pub content: TileContent,
}

impl Tile {
    pub fn tile_type(&self) -> TileType {
        match self.content {
            TileContent::Clear => TileType::Clear,
            TileContent::RailDepot(_) => TileType::RailDepot,
        }
    }
}

/// Position and shape of a tile, as handed to the draw handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileInfo {
    pub tile: TileIndex,
    /// Pixel coordinates of the north corner.
    pub x: u32,
    pub y: u32,
    pub tileh: Slope,
    /// Pixel height of the lowest corner.
    pub z: i32,
}

#[derive(Resource, Debug, Clone)]
pub struct TileGrid {
    map: MapSize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// A flat map of clear, unowned tiles.
    pub fn new(map: MapSize) -> Self {
        Self {
            map,
            tiles: vec![Tile::default(); map.size() as usize],
        }
    }

    #[inline]
    pub fn map(&self) -> &MapSize {
        &self.map
    }

    #[inline]
    pub fn get(&self, tile: TileIndex) -> &Tile {
        &self.tiles[tile.0 as usize]
    }

    #[inline]
    pub fn get_mut(&mut self, tile: TileIndex) -> &mut Tile {
        &mut self.tiles[tile.0 as usize]
    }

    #[inline]
    pub fn tile_type(&self, tile: TileIndex) -> TileType {
        self.get(tile).tile_type()
    }

    #[inline]
    pub fn owner(&self, tile: TileIndex) -> Owner {
        self.get(tile).owner
    }

    #[inline]
    pub fn is_owner(&self, tile: TileIndex, owner: Owner) -> bool {
        self.owner(tile) == owner
    }

    pub fn set_owner(&mut self, tile: TileIndex, owner: Owner) {
        self.get_mut(tile).owner = owner;
    }

    pub fn depot(&self, tile: TileIndex) -> Option<&DepotTile> {
        match &self.get(tile).content {
            TileContent::RailDepot(depot) => Some(depot),
            TileContent::Clear => None,
        }
    }

    pub fn depot_mut(&mut self, tile: TileIndex) -> Option<&mut DepotTile> {
        match &mut self.get_mut(tile).content {
            TileContent::RailDepot(depot) => Some(depot),
            TileContent::Clear => None,
        }
    }

    pub fn set_shape(&mut self, tile: TileIndex, height: u8, slope: Slope) {
        assert!(height + slope.max_z() <= MAX_TILE_HEIGHT);
        let t = self.get_mut(tile);
        t.height = height;
        t.slope = slope;
    }

    pub fn max_z(&self, tile: TileIndex) -> u8 {
        let t = self.get(tile);
        t.height + t.slope.max_z()
    }

    pub fn max_pixel_z(&self, tile: TileIndex) -> i32 {
        self.max_z(tile) as i32 * TILE_HEIGHT
    }

    pub fn tile_info(&self, tile: TileIndex) -> TileInfo {
        let t = self.get(tile);
        TileInfo {
            tile,
            x: self.map.tile_x(tile) * TILE_SIZE,
            y: self.map.tile_y(tile) * TILE_SIZE,
            tileh: t.slope,
            z: t.height as i32 * TILE_HEIGHT,
        }
    }

    /// Turn the tile back into bare, unowned ground. Shape is kept.
    pub fn make_clear(&mut self, tile: TileIndex) {
        let t = self.get_mut(tile);
        t.content = TileContent::Clear;
        t.owner = Owner::None;
    }

    pub fn make_rail_depot(
        &mut self,
        tile: TileIndex,
        owner: Owner,
        direction: DiagDirection,
        rail_type: RailType,
    ) {
        let t = self.get_mut(tile);
        t.owner = owner;
        t.content = TileContent::RailDepot(DepotTile {
            direction,
            rail_type,
            reserved: false,
            ground: RailGroundType::Grass,
        });
    }

    /// Whether every tile of `area` is clear ground.
    pub fn is_area_clear(&self, area: &TileArea) -> bool {
        area.tiles(&self.map)
            .all(|t| self.tile_type(t) == TileType::Clear)
    }

    pub fn count_tiles_of_type(&self, area: &TileArea, tile_type: TileType) -> u32 {
        area.tiles(&self.map)
            .filter(|&t| self.tile_type(t) == tile_type)
            .count() as u32
    }
}
