use map::config::{TILE_HEIGHT, TILE_SIZE};
use map::{DiagDirection, TileIndex};

use crate::commands::{CommandCost, CommandFlags, CommandResult};
use crate::company::Owner;
use crate::game_params::Landscape;
use crate::rail::{TrackStatus, TransportType};
use crate::tile_grid::{Slope, TileInfo, TropicZone};
use crate::vehicle::VehicleId;

use super::{Foundation, GroundKind, TileContext, TileDesc, TileDrawing, TileTypeProcs, VehicleEnterStatus};

/// Handlers for bare ground.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClearTileProcs;

/// Corner heights in levels above the lowest corner, ordered N, W, E, S.
fn corner_heights(tileh: Slope) -> [i32; 4] {
    let raised = |c: Slope| tileh.contains(c) as i32;
    let mut h = [raised(Slope::N), raised(Slope::W), raised(Slope::E), raised(Slope::S)];
    if tileh.is_steep() {
        if let Some(low) = h.iter().position(|&z| z == 0) {
            h[3 - low] = 2;
        }
    }
    h
}

fn ground_of(ctx: &TileContext, tile: TileIndex) -> GroundKind {
    let t = ctx.grid.get(tile);
    match ctx.params.landscape {
        Landscape::Arctic if ctx.grid.max_z(tile) > ctx.params.snow_line => GroundKind::Snow,
        Landscape::Tropic if t.tropic_zone == TropicZone::Desert => GroundKind::Desert,
        _ => GroundKind::Grass,
    }
}

impl TileTypeProcs for ClearTileProcs {
    fn draw(&self, ctx: &TileContext, ti: &TileInfo) -> TileDrawing {
        TileDrawing {
            ground: ground_of(ctx, ti.tile),
            ..TileDrawing::default()
        }
    }

    fn slope_z(&self, ctx: &TileContext, tile: TileIndex, x: u32, y: u32) -> i32 {
        let t = ctx.grid.get(tile);
        let [n, w, e, s] = corner_heights(t.slope);
        let size = TILE_SIZE as i32;
        let (x, y) = ((x % TILE_SIZE) as i32, (y % TILE_SIZE) as i32);
        let blended = n * (size - x) * (size - y) + w * x * (size - y) + e * (size - x) * y + s * x * y;
        t.height as i32 * TILE_HEIGHT + blended * TILE_HEIGHT / (size * size)
    }

    fn clear(&self, ctx: &mut TileContext, tile: TileIndex, flags: CommandFlags) -> CommandResult {
        if flags.exec {
            ctx.grid.make_clear(tile);
        }
        Ok(CommandCost::construction(ctx.params.prices.clear_grass))
    }

    fn describe(&self, ctx: &TileContext, tile: TileIndex) -> TileDesc {
        let name = match ground_of(ctx, tile) {
            GroundKind::Grass => "Grass",
            GroundKind::Snow => "Snow-covered land",
            GroundKind::Desert => "Desert",
        };
        TileDesc {
            owner: ctx.grid.owner(tile),
            name,
            build_date: None,
            rail_type: None,
            rail_speed: None,
        }
    }

    fn track_status(
        &self,
        _ctx: &TileContext,
        _tile: TileIndex,
        _mode: TransportType,
        _side: Option<DiagDirection>,
    ) -> TrackStatus {
        TrackStatus::NONE
    }

    fn click(&self, _ctx: &mut TileContext, _tile: TileIndex) -> bool {
        false
    }

    fn tick(&self, _ctx: &mut TileContext, _tile: TileIndex) {}

    fn change_owner(&self, _ctx: &mut TileContext, _tile: TileIndex, _old: Owner, _new: Option<Owner>) {}

    fn vehicle_enter(
        &self,
        _ctx: &mut TileContext,
        _vehicle: VehicleId,
        _unit: usize,
        _tile: TileIndex,
        _x: i32,
        _y: i32,
    ) -> VehicleEnterStatus {
        VehicleEnterStatus::Continue
    }

    fn foundation(&self, _ctx: &TileContext, _tile: TileIndex, _tileh: Slope) -> Foundation {
        Foundation::None
    }

    fn terraform(
        &self,
        ctx: &mut TileContext,
        tile: TileIndex,
        flags: CommandFlags,
        _z_new: u8,
        _tileh_new: Slope,
    ) -> CommandResult {
        self.clear(ctx, tile, flags)
    }
}
