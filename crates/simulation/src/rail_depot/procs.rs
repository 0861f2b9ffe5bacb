use bevy::prelude::*;

use map::{distance_from_tile_edge, DiagDirection, TileIndex};

use crate::commands::{CommandCost, CommandError, CommandFlags, CommandResult};
use crate::company::Owner;
use crate::config::{DEPOT_SPEED_LIMIT, TILE_FRACT_MASK};
use crate::events::TileEvent;
use crate::game_params::{AccelerationModel, Landscape};
use crate::rail::{TrackBits, TrackStatus, TrackdirBits, TransportType};
use crate::tile_grid::{DepotTile, RailGroundType, Slope, TileGrid, TileInfo, TropicZone};
use crate::tile_procs::landscape::landscape_clear;
use crate::tile_procs::{
    DepotSprite, Foundation, GroundKind, TileContext, TileDesc, TileDrawing, TileTypeProcs,
    VehicleEnterStatus,
};
use crate::vehicle::{VehicleId, VehicleKind, VehicleState};

use super::build::can_build_depot_by_tileh;
use super::{Depot, DepotEntryTable};

/// Handlers for rail depot tiles.
#[derive(Debug, Clone, Default)]
pub struct RailDepotProcs {
    entry: DepotEntryTable,
}

impl RailDepotProcs {
    pub fn new(entry: DepotEntryTable) -> Self {
        Self { entry }
    }

    pub fn entry(&self) -> &DepotEntryTable {
        &self.entry
    }
}

fn depot_at(grid: &TileGrid, tile: TileIndex) -> DepotTile {
    match grid.depot(tile) {
        Some(depot) => *depot,
        None => panic!("{tile:?} is not a rail depot tile"),
    }
}

fn check_tile_ownership(ctx: &TileContext, tile: TileIndex) -> Result<(), CommandError> {
    let owner = ctx.grid.owner(tile);
    if owner == Owner::None || owner == ctx.companies.current {
        Ok(())
    } else {
        Err(CommandError::AreaOwnedByAnother(owner))
    }
}

fn remove_train_depot(ctx: &mut TileContext, tile: TileIndex, flags: CommandFlags) -> CommandResult {
    if ctx.companies.current != Owner::Water {
        check_tile_ownership(ctx, tile)?;
    }
    if ctx.fleet.any_on_tile(tile) {
        return Err(CommandError::VehicleInTheWay);
    }

    if flags.exec {
        let depot = depot_at(ctx.grid, tile);
        let owner = ctx.grid.owner(tile);
        let track = TrackBits::along(depot.direction.axis());

        let train = if depot.reserved {
            ctx.fleet.train_reserving(tile)
        } else {
            None
        };
        if let Some(id) = train {
            ctx.fleet.free_reservation(id, ctx.grid);
        }

        ctx.companies.adjust_rail(owner, depot.rail_type, -1);
        ctx.events.push(TileEvent::InfrastructureChanged(owner));

        ctx.depots.remove(tile);
        ctx.grid.make_clear(tile);
        ctx.events.push(TileEvent::SignalUpdate {
            tile,
            side: depot.direction,
            owner,
        });
        ctx.events.push(TileEvent::TrackLayoutChanged(tile, track));
        if let Some(id) = train {
            ctx.events.push(TileEvent::PathReserveRequested(id));
        }
        info!("Removed rail depot at {:?} owned by {:?}", tile, owner);
    }

    Ok(CommandCost::construction(ctx.params.prices.clear_depot_train))
}

/// Whether the depot may stay when its land is reshaped to `z_new` and
/// `tileh_new`: the top must keep its height and the entrance edge must
/// stay buildable.
fn autoslope_check_for_entrance_edge(
    grid: &TileGrid,
    tile: TileIndex,
    z_new: u8,
    tileh_new: Slope,
    entrance: DiagDirection,
) -> bool {
    if grid.max_z(tile) != z_new + tileh_new.max_z() {
        return false;
    }
    tileh_new.is_flat() || can_build_depot_by_tileh(entrance, tileh_new)
}

impl TileTypeProcs for RailDepotProcs {
    fn draw(&self, ctx: &TileContext, ti: &TileInfo) -> TileDrawing {
        let depot = depot_at(ctx.grid, ti.tile);
        let invisible = ctx.params.invisible_buildings;
        let axis = depot.direction.axis();

        // Only the SW and SE depots show track in front of the building.
        let track_visible =
            invisible || matches!(depot.direction, DiagDirection::SW | DiagDirection::SE);
        let track = track_visible.then_some(axis);
        let reservation = (track_visible && ctx.params.show_track_reservation && depot.reserved)
            .then_some(axis);

        // Snow is never drawn inside a depot, only desert sand.
        let ground = if depot.ground == RailGroundType::IceDesert
            && ctx.params.landscape == Landscape::Tropic
        {
            GroundKind::Desert
        } else {
            GroundKind::Grass
        };

        let depot_sprite = (!invisible).then(|| DepotSprite {
            direction: depot.direction,
            rail_type: depot.rail_type,
            colour: ctx.companies.colour_of(ctx.grid.owner(ti.tile)),
        });

        TileDrawing {
            foundation: Foundation::flattening(ti.tileh),
            ground,
            track,
            reservation,
            catenary: depot.rail_type.has_catenary(),
            depot: depot_sprite,
        }
    }

    fn slope_z(&self, ctx: &TileContext, tile: TileIndex, _x: u32, _y: u32) -> i32 {
        ctx.grid.max_pixel_z(tile)
    }

    fn clear(&self, ctx: &mut TileContext, tile: TileIndex, flags: CommandFlags) -> CommandResult {
        if flags.auto {
            if !ctx.grid.is_owner(tile, ctx.companies.current) {
                return Err(CommandError::AreaOwnedByAnother(ctx.grid.owner(tile)));
            }
            return Err(CommandError::BuildingMustBeDemolished);
        }
        remove_train_depot(ctx, tile, flags)
    }

    fn describe(&self, ctx: &TileContext, tile: TileIndex) -> TileDesc {
        let depot = depot_at(ctx.grid, tile);
        let mut speed = depot.rail_type.max_speed();
        if ctx.params.train_acceleration != AccelerationModel::Original {
            speed = if speed > 0 {
                speed.min(DEPOT_SPEED_LIMIT)
            } else {
                DEPOT_SPEED_LIMIT
            };
        }
        TileDesc {
            owner: ctx.grid.owner(tile),
            name: "Railway train depot",
            build_date: ctx.depots.get(tile).map(|d| d.build_date),
            rail_type: Some(depot.rail_type.name()),
            rail_speed: (speed > 0).then_some(speed),
        }
    }

    fn track_status(
        &self,
        ctx: &TileContext,
        tile: TileIndex,
        mode: TransportType,
        side: Option<DiagDirection>,
    ) -> TrackStatus {
        if mode != TransportType::Rail {
            return TrackStatus::NONE;
        }
        let dir = depot_at(ctx.grid, tile).direction;
        if side.is_some_and(|s| s != dir) {
            return TrackStatus::NONE;
        }
        TrackStatus::new(
            TrackdirBits::from_track_bits(TrackBits::along(dir.axis())),
            TrackdirBits::NONE,
        )
    }

    fn click(&self, ctx: &mut TileContext, tile: TileIndex) -> bool {
        ctx.events
            .push(TileEvent::ShowDepotWindow(tile, VehicleKind::Train));
        true
    }

    fn tick(&self, ctx: &mut TileContext, tile: TileIndex) {
        let t = *ctx.grid.get(tile);
        let ground = match ctx.params.landscape {
            Landscape::Arctic => {
                let mut z = t.height;
                if !t.slope.is_flat() {
                    z += 1;
                }
                if z > ctx.params.snow_line {
                    RailGroundType::IceDesert
                } else {
                    RailGroundType::Grass
                }
            }
            Landscape::Tropic if t.tropic_zone == TropicZone::Desert => RailGroundType::IceDesert,
            _ => RailGroundType::Grass,
        };

        let Some(depot) = ctx.grid.depot_mut(tile) else {
            panic!("{tile:?} is not a rail depot tile");
        };
        if depot.ground != ground {
            depot.ground = ground;
            ctx.events.push(TileEvent::TileDirty(tile));
        }
    }

    fn change_owner(&self, ctx: &mut TileContext, tile: TileIndex, old: Owner, new: Option<Owner>) {
        if !ctx.grid.is_owner(tile, old) {
            return;
        }

        match new {
            Some(new_owner) => {
                let rail_type = depot_at(ctx.grid, tile).rail_type;
                ctx.companies.adjust_rail(old, rail_type, -1);
                ctx.companies.adjust_rail(new_owner, rail_type, 1);
                ctx.grid.set_owner(tile, new_owner);
                if let Some(record) = ctx.depots.remove(tile) {
                    ctx.depots.insert(Depot {
                        owner: new_owner,
                        ..record
                    });
                }
            }
            None => {
                // The clear runs on behalf of the company that went under.
                let acting = std::mem::replace(&mut ctx.companies.current, old);
                let result = landscape_clear(ctx, tile, CommandFlags::EXEC.with_bankrupt());
                ctx.companies.current = acting;
                if let Err(err) = result {
                    warn!("Could not clear depot {:?} of bankrupt {:?}: {:?}", tile, old, err);
                }
            }
        }
    }

    fn vehicle_enter(
        &self,
        ctx: &mut TileContext,
        vehicle: VehicleId,
        unit: usize,
        tile: TileIndex,
        x: i32,
        y: i32,
    ) -> VehicleEnterStatus {
        let Some(v) = ctx.fleet.get(vehicle) else {
            return VehicleEnterStatus::Continue;
        };
        if v.kind != VehicleKind::Train {
            return VehicleEnterStatus::Continue;
        }

        let dir = depot_at(ctx.grid, tile).direction;
        let fx = x & TILE_FRACT_MASK;
        let fy = y & TILE_FRACT_MASK;
        debug_assert!(
            distance_from_tile_edge(dir.reverse(), fx as u32, fy as u32) != 0,
            "train entering depot {tile:?} from behind"
        );

        let heading = v.units[unit].direction;
        if heading == dir.reverse().to_direction() {
            if (fx, fy) != self.entry.enter_point(dir) {
                return VehicleEnterStatus::Continue;
            }
            let is_last = v.is_last(unit);
            let Some(v) = ctx.fleet.get_mut(vehicle) else {
                return VehicleEnterStatus::Continue;
            };
            let u = &mut v.units[unit];
            u.track = TrackBits::DEPOT;
            u.hidden = true;
            u.direction = u.direction.reverse();
            u.tile = tile;
            if is_last {
                v.state = VehicleState::InDepot(tile);
                ctx.events
                    .push(TileEvent::VehicleEnteredDepot(vehicle, tile));
            }
            ctx.events.push(TileEvent::DepotWindowChanged(tile));
            return VehicleEnterStatus::EnteredWormhole;
        }

        if heading == dir.to_direction() {
            let offset = v.next_vehicle_offset(unit);
            if (fx, fy) == self.entry.leave_point(dir, offset) {
                if let Some(next) = ctx
                    .fleet
                    .get_mut(vehicle)
                    .and_then(|v| v.units.get_mut(unit + 1))
                {
                    next.hidden = false;
                    next.track = TrackBits::along(dir.axis());
                }
            }
        }

        VehicleEnterStatus::Continue
    }

    fn foundation(&self, _ctx: &TileContext, _tile: TileIndex, tileh: Slope) -> Foundation {
        Foundation::flattening(tileh)
    }

    fn terraform(
        &self,
        ctx: &mut TileContext,
        tile: TileIndex,
        flags: CommandFlags,
        z_new: u8,
        tileh_new: Slope,
    ) -> CommandResult {
        let dir = depot_at(ctx.grid, tile).direction;
        if ctx.params.build_on_slopes
            && ctx.params.autoslope
            && autoslope_check_for_entrance_edge(ctx.grid, tile, z_new, tileh_new, dir)
        {
            return Ok(CommandCost::construction(ctx.params.prices.build_foundation));
        }
        landscape_clear(ctx, tile, flags)
    }
}
