//! Entry points that look up a tile's type and call its handler.

use bevy::prelude::*;

use map::{DiagDirection, TileIndex};

use crate::commands::{CommandFlags, CommandResult};
use crate::company::Owner;
use crate::rail::{TrackStatus, TransportType};
use crate::tile_grid::Slope;
use crate::vehicle::VehicleId;

use super::{Foundation, TileContext, TileDesc, TileDrawing, VehicleEnterStatus};

pub fn draw_tile(ctx: &TileContext, tile: TileIndex) -> TileDrawing {
    let ti = ctx.grid.tile_info(tile);
    ctx.procs.for_tile(ctx.grid, tile).draw(ctx, &ti)
}

pub fn slope_pixel_z(ctx: &TileContext, tile: TileIndex, x: u32, y: u32) -> i32 {
    ctx.procs.for_tile(ctx.grid, tile).slope_z(ctx, tile, x, y)
}

/// Clear whatever stands on `tile`, leaving bare ground.
pub fn landscape_clear(ctx: &mut TileContext, tile: TileIndex, flags: CommandFlags) -> CommandResult {
    let procs = ctx.procs;
    procs.for_tile(ctx.grid, tile).clear(ctx, tile, flags)
}

pub fn describe_tile(ctx: &TileContext, tile: TileIndex) -> TileDesc {
    ctx.procs.for_tile(ctx.grid, tile).describe(ctx, tile)
}

pub fn track_status(
    ctx: &TileContext,
    tile: TileIndex,
    mode: TransportType,
    side: Option<DiagDirection>,
) -> TrackStatus {
    ctx.procs
        .for_tile(ctx.grid, tile)
        .track_status(ctx, tile, mode, side)
}

pub fn click_tile(ctx: &mut TileContext, tile: TileIndex) -> bool {
    let procs = ctx.procs;
    procs.for_tile(ctx.grid, tile).click(ctx, tile)
}

pub fn tile_loop(ctx: &mut TileContext, tile: TileIndex) {
    let procs = ctx.procs;
    procs.for_tile(ctx.grid, tile).tick(ctx, tile);
}

pub fn change_tile_owner(ctx: &mut TileContext, tile: TileIndex, old: Owner, new: Option<Owner>) {
    let procs = ctx.procs;
    procs.for_tile(ctx.grid, tile).change_owner(ctx, tile, old, new);
}

/// Hand every tile of `old` to `new` (or clear them when `new` is `None`).
pub fn change_owner_everywhere(ctx: &mut TileContext, old: Owner, new: Option<Owner>) {
    let map = ctx.map();
    let mut changed = 0u32;
    map.whole_map_area().for_each_tile(&map, |tile| {
        if ctx.grid.is_owner(tile, old) {
            change_tile_owner(ctx, tile, old, new);
            changed += 1;
        }
    });
    info!("Changed owner of {} tiles from {:?} to {:?}", changed, old, new);
}

pub fn vehicle_enter_tile(
    ctx: &mut TileContext,
    vehicle: VehicleId,
    unit: usize,
    tile: TileIndex,
    x: i32,
    y: i32,
) -> VehicleEnterStatus {
    let procs = ctx.procs;
    procs
        .for_tile(ctx.grid, tile)
        .vehicle_enter(ctx, vehicle, unit, tile, x, y)
}

pub fn tile_foundation(ctx: &TileContext, tile: TileIndex) -> Foundation {
    let tileh = ctx.grid.get(tile).slope;
    ctx.procs.for_tile(ctx.grid, tile).foundation(ctx, tile, tileh)
}

/// Ask the tile whether its land may be reshaped, and at what cost.
pub fn terraform_tile(
    ctx: &mut TileContext,
    tile: TileIndex,
    flags: CommandFlags,
    z_new: u8,
    tileh_new: Slope,
) -> CommandResult {
    let procs = ctx.procs;
    procs
        .for_tile(ctx.grid, tile)
        .terraform(ctx, tile, flags, z_new, tileh_new)
}
