use bevy::prelude::*;

use map::{DiagDirection, TileIndex};

use crate::commands::{CommandCost, CommandError, CommandFlags, CommandResult};
use crate::events::TileEvent;
use crate::rail::{RailType, TrackBits};
use crate::tile_grid::Slope;
use crate::tile_procs::landscape::landscape_clear;
use crate::tile_procs::TileContext;

use super::Depot;

/// Whether a depot facing `dir` fits on land shaped `tileh`: the entrance
/// edge must be raised (both corners on steep land, at least one otherwise).
pub fn can_build_depot_by_tileh(dir: DiagDirection, tileh: Slope) -> bool {
    let entrance = Slope::edge_corners(dir);
    if tileh.is_steep() {
        tileh.contains(entrance)
    } else {
        tileh.intersects(entrance)
    }
}

/// Build a train depot on `tile` for the acting company, its entrance
/// facing `dir`.
pub fn build_rail_depot(
    ctx: &mut TileContext,
    tile: TileIndex,
    dir: DiagDirection,
    rail_type: RailType,
    flags: CommandFlags,
) -> CommandResult {
    if !ctx.map().is_valid_tile(tile) {
        return Err(CommandError::OutOfBounds);
    }
    let owner = ctx.companies.current;
    if owner.company().is_none() {
        return Err(CommandError::AreaOwnedByAnother(owner));
    }

    let tileh = ctx.grid.get(tile).slope;
    let mut cost = 0;
    if !tileh.is_flat() {
        if !ctx.params.build_on_slopes || !can_build_depot_by_tileh(dir, tileh) {
            return Err(CommandError::LandSlopedWrongDirection);
        }
        cost += ctx.params.prices.build_foundation;
    }

    cost += landscape_clear(ctx, tile, flags.with_auto())?.cost;
    cost += ctx.params.prices.build_depot_train;

    if flags.exec {
        ctx.grid.make_rail_depot(tile, owner, dir, rail_type);
        ctx.depots.insert(Depot {
            tile,
            owner,
            build_date: ctx.date,
        });
        ctx.companies.adjust_rail(owner, rail_type, 1);
        ctx.events.push(TileEvent::InfrastructureChanged(owner));
        ctx.events
            .push(TileEvent::TrackLayoutChanged(tile, TrackBits::along(dir.axis())));
        ctx.events.push(TileEvent::SignalUpdate {
            tile,
            side: dir,
            owner,
        });
        info!("Built {} depot at {:?} for {:?}", rail_type.name(), tile, owner);
    }

    Ok(CommandCost::construction(cost))
}
