//! Tile storage and per-tile-type behaviour on top of the `map` geometry.

use bevy::prelude::*;

use map::{MapPlugin, MapSize};

pub mod commands;
pub mod company;
pub mod config;
pub mod events;
pub mod game_params;
pub mod rail;
pub mod rail_depot;
pub mod tile_grid;
pub mod tile_loop;
pub mod tile_procs;
pub mod vehicle;

#[cfg(test)]
pub mod test_harness;

use company::Companies;
use config::DAY_TICKS;
use events::TileEventLog;
use game_params::GameParams;
use rail_depot::DepotPool;
use tile_grid::TileGrid;
use tile_loop::TileLoopPlugin;
use tile_procs::TileTypeProcTable;
use vehicle::Fleet;

/// Fixed ticks since the game started.
#[derive(Resource, Default)]
pub struct TickCounter(pub u64);

/// Current game day, advanced every [`DAY_TICKS`] ticks.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameDate(pub u32);

pub fn advance_calendar(mut tick: ResMut<TickCounter>, mut date: ResMut<GameDate>) {
    tick.0 = tick.0.wrapping_add(1);
    if tick.0 % DAY_TICKS as u64 == 0 {
        date.0 += 1;
    }
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<MapPlugin>() {
            app.add_plugins(MapPlugin);
        }
        let map = *app.world().resource::<MapSize>();
        if !app.world().contains_resource::<TileGrid>() {
            app.insert_resource(TileGrid::new(map));
        }

        app.init_resource::<TickCounter>()
            .init_resource::<GameDate>()
            .init_resource::<GameParams>()
            .init_resource::<TileTypeProcTable>()
            .init_resource::<Companies>()
            .init_resource::<DepotPool>()
            .init_resource::<Fleet>()
            .init_resource::<TileEventLog>()
            .add_systems(FixedUpdate, advance_calendar);

        app.add_plugins(TileLoopPlugin);
    }
}
