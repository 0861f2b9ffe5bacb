use map::{DiagDirection, Direction};

use super::landscape::*;
use super::*;
use crate::commands::CommandFlags;
use crate::events::{TileEvent, TileEventLog};
use crate::game_params::{GameParams, Landscape};
use crate::rail::{RailType, TrackStatus, TransportType};
use crate::rail_depot::{DepotEntryTable, RailDepotProcs};
use crate::test_harness::TestWorld;
use crate::tile_grid::{Slope, TileType, TropicZone};

#[test]
fn test_clear_ground_costs_grass_price() {
    let mut w = TestWorld::new();
    let tile = w.tile(9, 9);

    let cost = w.ctx(|ctx| landscape_clear(ctx, tile, CommandFlags::EXEC)).unwrap();
    assert_eq!(cost.cost, 20);
    assert_eq!(w.grid().tile_type(tile), TileType::Clear);

    let cost = w
        .ctx(|ctx| terraform_tile(ctx, tile, CommandFlags::TEST, 1, Slope::FLAT))
        .unwrap();
    assert_eq!(cost.cost, 20);
}

#[test]
fn test_clear_ground_slope_z() {
    let mut w = TestWorld::new();
    let flat = w.tile(1, 1);
    let sloped = w.tile(2, 1);
    w.grid_mut().set_shape(flat, 2, Slope::FLAT);
    w.grid_mut().set_shape(sloped, 2, Slope::N);

    assert_eq!(w.ctx(|ctx| slope_pixel_z(ctx, flat, 7, 3)), 16);
    // The raised north corner sits at (0, 0) and fades out toward south.
    assert_eq!(w.ctx(|ctx| slope_pixel_z(ctx, sloped, 0, 0)), 24);
    assert_eq!(w.ctx(|ctx| slope_pixel_z(ctx, sloped, 8, 8)), 18);
    assert_eq!(w.ctx(|ctx| slope_pixel_z(ctx, sloped, 15, 15)), 16);
}

#[test]
fn test_clear_ground_description_follows_climate() {
    let mut w = TestWorld::with_params(GameParams {
        landscape: Landscape::Arctic,
        snow_line: 3,
        ..GameParams::default()
    });
    let low = w.tile(1, 1);
    let high = w.tile(2, 2);
    w.grid_mut().set_shape(high, 5, Slope::FLAT);

    assert_eq!(w.ctx(|ctx| describe_tile(ctx, low)).name, "Grass");
    assert_eq!(w.ctx(|ctx| describe_tile(ctx, high)).name, "Snow-covered land");
    assert_eq!(w.ctx(|ctx| draw_tile(ctx, high)).ground, GroundKind::Snow);

    w.params_mut().landscape = Landscape::Tropic;
    w.grid_mut().get_mut(low).tropic_zone = TropicZone::Desert;
    assert_eq!(w.ctx(|ctx| describe_tile(ctx, low)).name, "Desert");
}

#[test]
fn test_clear_ground_has_no_tracks_and_ignores_clicks() {
    let mut w = TestWorld::new();
    let tile = w.tile(5, 5);

    assert_eq!(
        w.ctx(|ctx| track_status(ctx, tile, TransportType::Rail, None)),
        TrackStatus::NONE
    );
    assert!(!w.ctx(|ctx| click_tile(ctx, tile)));
    assert_eq!(w.ctx(|ctx| tile_foundation(ctx, tile)), Foundation::None);
    assert!(w.events().is_empty());
}

#[test]
fn test_dispatch_follows_tile_type() {
    let mut w = TestWorld::new();
    w.add_company(1);
    let depot = w.build_depot(3, 3, DiagDirection::SW, RailType::Rail);
    let ground = w.tile(4, 3);

    assert_eq!(w.ctx(|ctx| describe_tile(ctx, depot)).name, "Railway train depot");
    assert_eq!(w.ctx(|ctx| describe_tile(ctx, ground)).name, "Grass");
    assert!(w.ctx(|ctx| draw_tile(ctx, depot)).depot.is_some());
    assert!(w.ctx(|ctx| draw_tile(ctx, ground)).depot.is_none());
}

#[test]
fn test_change_owner_everywhere() {
    let mut w = TestWorld::new();
    let a = w.add_company(1);
    w.build_depot(1, 1, DiagDirection::SW, RailType::Rail);
    w.build_depot(2, 1, DiagDirection::SW, RailType::Rail);
    let c = w.add_company(3);
    let kept = w.build_depot(3, 1, DiagDirection::SW, RailType::Rail);
    let b = w.add_company(2);

    w.ctx(|ctx| change_owner_everywhere(ctx, a, Some(b)));
    assert_eq!(w.companies().rail_count(a, RailType::Rail), 0);
    assert_eq!(w.companies().rail_count(b, RailType::Rail), 2);
    assert_eq!(w.grid().owner(kept), c);

    w.ctx(|ctx| change_owner_everywhere(ctx, b, None));
    assert_eq!(w.companies().rail_count(b, RailType::Rail), 0);
    let area = w.map().whole_map_area();
    assert_eq!(w.grid().count_tiles_of_type(&area, TileType::RailDepot), 1);
}

#[test]
fn test_replaced_handler_is_used() {
    let mut w = TestWorld::new();
    let owner = w.add_company(1);
    let mut entry = DepotEntryTable::default();
    entry.enter_x[DiagDirection::NE as usize] = 0xC;
    w.world_mut().insert_resource(
        TileTypeProcTable::default().with(TileType::RailDepot, Box::new(RailDepotProcs::new(entry))),
    );

    let tile = w.build_depot(4, 4, DiagDirection::NE, RailType::Rail);
    let pos = (4 * 16 + 0xC, 4 * 16 + 8);
    let train = w.add_train(owner, tile, pos, Direction::SW, 1);

    let status = w.ctx(|ctx| vehicle_enter_tile(ctx, train, 0, tile, pos.0, pos.1));
    assert_eq!(status, VehicleEnterStatus::EnteredWormhole);
}

#[test]
fn test_table_lookup_by_type() {
    let table = TileTypeProcTable::default();
    let mut w = TestWorld::new();
    let tile = w.tile(0, 0);
    let described = w.ctx(|ctx| table.get(TileType::Clear).describe(ctx, tile));
    assert_eq!(described.name, "Grass");
}

#[test]
fn test_bankrupt_clear_keeps_every_side_effect() {
    let mut w = TestWorld::new();
    let a = w.add_company(1);
    for y in 0..20 {
        for x in 0..20 {
            w.build_depot(x, y, DiagDirection::SE, RailType::Rail);
        }
    }
    w.world_mut().resource_mut::<TileEventLog>().clear();
    w.add_company(2);

    w.ctx(|ctx| change_owner_everywhere(ctx, a, None));

    let area = w.map().whole_map_area();
    assert_eq!(w.grid().count_tiles_of_type(&area, TileType::RailDepot), 0);
    let signals = w
        .events()
        .count(|e| matches!(e, TileEvent::SignalUpdate { owner, .. } if *owner == a));
    assert_eq!(signals, 400);
    let layouts = w
        .events()
        .count(|e| matches!(e, TileEvent::TrackLayoutChanged(..)));
    assert_eq!(layouts, 400);

    let drained = w.world_mut().resource_mut::<TileEventLog>().drain();
    assert_eq!(drained.len(), 1_200);
    assert!(w.events().is_empty());
}
