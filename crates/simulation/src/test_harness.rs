//! Headless harness for tests: an `App` with [`SimulationPlugin`] on a small
//! map, plus shortcuts for the setups the tile tests keep repeating.

use bevy::app::App;
use bevy::prelude::*;

use map::{DiagDirection, Direction, MapSize, TileIndex};

use crate::commands::{CommandFlags, CommandResult};
use crate::company::{Companies, Owner};
use crate::events::{TileEvent, TileEventLog};
use crate::game_params::GameParams;
use crate::rail::RailType;
use crate::rail_depot::build_rail_depot;
use crate::tile_grid::TileGrid;
use crate::tile_procs::{with_tile_context, TileContext};
use crate::vehicle::{Fleet, Vehicle, VehicleId, VehicleKind, VehicleUnit};
use crate::SimulationPlugin;

pub struct TestWorld {
    app: App,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// A 64x64 flat map with no companies.
    pub fn new() -> Self {
        Self::with_params(GameParams::default())
    }

    pub fn with_params(params: GameParams) -> Self {
        let mut app = App::new();
        app.insert_resource(MapSize::new(6, 6));
        app.insert_resource(params);
        app.add_plugins(SimulationPlugin);
        Self { app }
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn map(&self) -> MapSize {
        *self.app.world().resource::<MapSize>()
    }

    pub fn tile(&self, x: u32, y: u32) -> TileIndex {
        self.map().tile_xy(x, y)
    }

    pub fn grid(&self) -> &TileGrid {
        self.app.world().resource::<TileGrid>()
    }

    pub fn grid_mut(&mut self) -> Mut<'_, TileGrid> {
        self.app.world_mut().resource_mut::<TileGrid>()
    }

    pub fn companies(&self) -> &Companies {
        self.app.world().resource::<Companies>()
    }

    pub fn fleet(&self) -> &Fleet {
        self.app.world().resource::<Fleet>()
    }

    pub fn params_mut(&mut self) -> Mut<'_, GameParams> {
        self.app.world_mut().resource_mut::<GameParams>()
    }

    pub fn events(&self) -> &TileEventLog {
        self.app.world().resource::<TileEventLog>()
    }

    pub fn has_event(&self, event: TileEvent) -> bool {
        self.events().contains(&event)
    }

    pub fn ctx<R>(&mut self, f: impl FnOnce(&mut TileContext) -> R) -> R {
        with_tile_context(self.app.world_mut(), f)
    }

    /// Create a company and make it the acting one.
    pub fn add_company(&mut self, colour: u8) -> Owner {
        let mut companies = self.app.world_mut().resource_mut::<Companies>();
        let owner = Owner::Company(companies.create(colour));
        companies.current = owner;
        owner
    }

    pub fn set_current(&mut self, owner: Owner) {
        self.app.world_mut().resource_mut::<Companies>().current = owner;
    }

    pub fn try_build_depot(
        &mut self,
        tile: TileIndex,
        dir: DiagDirection,
        rail_type: RailType,
    ) -> CommandResult {
        self.ctx(|ctx| build_rail_depot(ctx, tile, dir, rail_type, CommandFlags::EXEC))
    }

    /// Build a depot for the acting company; panics if the build fails.
    pub fn build_depot(&mut self, x: u32, y: u32, dir: DiagDirection, rail_type: RailType) -> TileIndex {
        let tile = self.tile(x, y);
        self.try_build_depot(tile, dir, rail_type)
            .unwrap_or_else(|e| panic!("depot at ({x}, {y}) failed: {e:?}"));
        tile
    }

    /// A train of `units` full-length units, all on `tile` at the given
    /// pixel position, heading `direction`.
    pub fn add_train(
        &mut self,
        owner: Owner,
        tile: TileIndex,
        pos: (i32, i32),
        direction: Direction,
        units: usize,
    ) -> VehicleId {
        let units = (0..units)
            .map(|_| VehicleUnit::new(tile, pos.0, pos.1, direction))
            .collect();
        self.app
            .world_mut()
            .resource_mut::<Fleet>()
            .add(Vehicle::new(VehicleKind::Train, owner, units))
    }

    /// Run `n` fixed ticks.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }
}
