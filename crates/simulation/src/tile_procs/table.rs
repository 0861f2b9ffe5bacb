use bevy::prelude::*;

use map::{DiagDirection, TileIndex};

use crate::commands::{CommandFlags, CommandResult};
use crate::company::Owner;
use crate::rail::{TrackStatus, TransportType};
use crate::rail_depot::RailDepotProcs;
use crate::tile_grid::{Slope, TileGrid, TileInfo, TileType};
use crate::vehicle::VehicleId;

use super::{ClearTileProcs, Foundation, TileContext, TileDesc, TileDrawing, VehicleEnterStatus};

/// The capability set every tile type provides.
///
/// Handlers are only ever called for tiles of their own type; calling one
/// for any other tile is a programmer error and panics.
pub trait TileTypeProcs: Send + Sync {
    fn draw(&self, ctx: &TileContext, ti: &TileInfo) -> TileDrawing;

    /// Pixel height at sub-tile position (`x`, `y`), both in `0..16`.
    fn slope_z(&self, ctx: &TileContext, tile: TileIndex, x: u32, y: u32) -> i32;

    fn clear(&self, ctx: &mut TileContext, tile: TileIndex, flags: CommandFlags) -> CommandResult;

    fn describe(&self, ctx: &TileContext, tile: TileIndex) -> TileDesc;

    /// Tracks usable by `mode` on the tile, optionally restricted to those
    /// reachable through `side`.
    fn track_status(
        &self,
        ctx: &TileContext,
        tile: TileIndex,
        mode: TransportType,
        side: Option<DiagDirection>,
    ) -> TrackStatus;

    /// Returns whether the click was handled.
    fn click(&self, ctx: &mut TileContext, tile: TileIndex) -> bool;

    /// Periodic update from the tile loop.
    fn tick(&self, ctx: &mut TileContext, tile: TileIndex);

    /// Hand the tile from `old` to `new`. `None` means `old` went bankrupt
    /// without a successor.
    fn change_owner(&self, ctx: &mut TileContext, tile: TileIndex, old: Owner, new: Option<Owner>);

    /// A unit of `vehicle` moved to pixel position (`x`, `y`) on the tile.
    fn vehicle_enter(
        &self,
        ctx: &mut TileContext,
        vehicle: VehicleId,
        unit: usize,
        tile: TileIndex,
        x: i32,
        y: i32,
    ) -> VehicleEnterStatus;

    fn foundation(&self, ctx: &TileContext, tile: TileIndex, tileh: Slope) -> Foundation;

    /// The land under the tile is about to take height `z_new` and shape
    /// `tileh_new`.
    fn terraform(
        &self,
        ctx: &mut TileContext,
        tile: TileIndex,
        flags: CommandFlags,
        z_new: u8,
        tileh_new: Slope,
    ) -> CommandResult;
}

/// Handler per [`TileType`], built once at startup.
#[derive(Resource)]
pub struct TileTypeProcTable {
    procs: [Box<dyn TileTypeProcs>; TileType::COUNT],
}

impl Default for TileTypeProcTable {
    fn default() -> Self {
        Self {
            procs: [Box::new(ClearTileProcs), Box::new(RailDepotProcs::default())],
        }
    }
}

impl TileTypeProcTable {
    /// Replace the handler of one tile type.
    pub fn with(mut self, tile_type: TileType, procs: Box<dyn TileTypeProcs>) -> Self {
        self.procs[tile_type as usize] = procs;
        self
    }

    #[inline]
    pub fn get(&self, tile_type: TileType) -> &dyn TileTypeProcs {
        self.procs[tile_type as usize].as_ref()
    }

    #[inline]
    pub fn for_tile(&self, grid: &TileGrid, tile: TileIndex) -> &dyn TileTypeProcs {
        self.get(grid.tile_type(tile))
    }
}
