//! Periodic per-tile updates.
//!
//! Each fixed tick visits a band of [`TILE_LOOP_ROWS_PER_TICK`] map rows and
//! calls every tile's `tick` handler. The band moves down one step per tick
//! and wraps to the top once it passes the last row.

use bevy::prelude::*;

use map::TileArea;

use crate::company::Companies;
use crate::config::TILE_LOOP_ROWS_PER_TICK;
use crate::events::TileEventLog;
use crate::game_params::GameParams;
use crate::rail_depot::DepotPool;
use crate::tile_grid::TileGrid;
use crate::tile_procs::landscape::tile_loop;
use crate::tile_procs::{TileContext, TileTypeProcTable};
use crate::vehicle::Fleet;
use crate::GameDate;

/// First row of the band the next tile-loop tick will visit.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileLoopCursor {
    pub next_row: u32,
}

/// The rows starting at `cursor` that one tick visits.
pub fn tile_loop_band(ctx: &TileContext, cursor: &TileLoopCursor) -> TileArea {
    let map = ctx.map();
    let row = cursor.next_row % map.size_y();
    let rows = TILE_LOOP_ROWS_PER_TICK.min(map.size_y() - row);
    TileArea::new(map.tile_xy(0, row), map.size_x() as u16, rows as u16)
}

/// Run the tick handlers of one band and move the cursor past it.
pub fn tile_loop_step(ctx: &mut TileContext, cursor: &mut TileLoopCursor) {
    let map = ctx.map();
    let band = tile_loop_band(ctx, cursor);
    band.for_each_tile(&map, |tile| tile_loop(ctx, tile));

    let next = cursor.next_row % map.size_y() + band.h as u32;
    cursor.next_row = if next >= map.size_y() { 0 } else { next };
}

#[allow(clippy::too_many_arguments)]
pub fn run_tile_loop(
    procs: Res<TileTypeProcTable>,
    mut grid: ResMut<TileGrid>,
    mut companies: ResMut<Companies>,
    mut depots: ResMut<DepotPool>,
    mut fleet: ResMut<Fleet>,
    params: Res<GameParams>,
    mut events: ResMut<TileEventLog>,
    date: Res<GameDate>,
    mut cursor: ResMut<TileLoopCursor>,
) {
    let mut ctx = TileContext {
        procs: &procs,
        grid: &mut grid,
        companies: &mut companies,
        depots: &mut depots,
        fleet: &mut fleet,
        params: &params,
        events: &mut events,
        date: date.0,
    };
    tile_loop_step(&mut ctx, &mut cursor);
}

pub struct TileLoopPlugin;

impl Plugin for TileLoopPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TileLoopCursor>()
            .add_systems(FixedUpdate, run_tile_loop);
    }
}
