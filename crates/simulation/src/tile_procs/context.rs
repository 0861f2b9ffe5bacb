use bevy::ecs::system::SystemState;
use bevy::prelude::*;

use map::MapSize;

use crate::company::Companies;
use crate::events::TileEventLog;
use crate::game_params::GameParams;
use crate::rail_depot::DepotPool;
use crate::tile_grid::TileGrid;
use crate::vehicle::Fleet;
use crate::GameDate;

use super::TileTypeProcTable;

/// Everything a tile handler may read or change, borrowed for the duration
/// of one call.
pub struct TileContext<'a> {
    pub procs: &'a TileTypeProcTable,
    pub grid: &'a mut TileGrid,
    pub companies: &'a mut Companies,
    pub depots: &'a mut DepotPool,
    pub fleet: &'a mut Fleet,
    pub params: &'a GameParams,
    pub events: &'a mut TileEventLog,
    /// Current game day.
    pub date: u32,
}

impl TileContext<'_> {
    #[inline]
    pub fn map(&self) -> MapSize {
        *self.grid.map()
    }
}

/// Borrow the tile resources out of `world` and run `f` with them, for
/// callers outside a system (commands issued by a UI layer, tests).
pub fn with_tile_context<R>(world: &mut World, f: impl FnOnce(&mut TileContext) -> R) -> R {
    let mut state: SystemState<(
        Res<TileTypeProcTable>,
        ResMut<TileGrid>,
        ResMut<Companies>,
        ResMut<DepotPool>,
        ResMut<Fleet>,
        Res<GameParams>,
        ResMut<TileEventLog>,
        Res<GameDate>,
    )> = SystemState::new(world);
    let (procs, mut grid, mut companies, mut depots, mut fleet, params, mut events, date) =
        state.get_mut(world);

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
    f(&mut ctx)
}
