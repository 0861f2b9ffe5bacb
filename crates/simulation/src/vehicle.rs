//! Vehicles as far as the tile handlers see them: a chain of units with
//! positions, plus the track tiles a train holds reserved.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use map::{Direction, TileIndex};

use crate::company::Owner;
use crate::config::VEHICLE_LENGTH;
use crate::rail::TrackBits;
use crate::tile_grid::TileGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VehicleId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleKind {
    Train,
    Road,
    Ship,
    Aircraft,
}

/// One articulated part or wagon of a vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleUnit {
    pub tile: TileIndex,
    /// Pixel position; the low four bits are the offset inside the tile.
    pub x_pos: i32,
    pub y_pos: i32,
    pub direction: Direction,
    pub track: TrackBits,
    pub hidden: bool,
    /// Length in 1/8ths of a tile.
    pub length: u8,
}

impl VehicleUnit {
    pub fn new(tile: TileIndex, x_pos: i32, y_pos: i32, direction: Direction) -> Self {
        Self {
            tile,
            x_pos,
            y_pos,
            direction,
            track: TrackBits::NONE,
            hidden: false,
            length: VEHICLE_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VehicleState {
    #[default]
    Running,
    /// Every unit has gone inside the depot on this tile.
    InDepot(TileIndex),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub kind: VehicleKind,
    pub owner: Owner,
    /// Front unit first.
    pub units: Vec<VehicleUnit>,
    pub state: VehicleState,
    /// Tiles this vehicle holds a path reservation on.
    pub reserved: Vec<TileIndex>,
}

impl Vehicle {
    pub fn new(kind: VehicleKind, owner: Owner, units: Vec<VehicleUnit>) -> Self {
        assert!(!units.is_empty(), "a vehicle needs at least one unit");
        Self {
            kind,
            owner,
            units,
            state: VehicleState::Running,
            reserved: Vec::new(),
        }
    }

    pub fn is_last(&self, unit: usize) -> bool {
        unit + 1 == self.units.len()
    }

    /// Distance from the centre of `unit` to the centre of the one behind
    /// it. Odd lengths put the extra unit in front of the centre, so the
    /// following unit's half is rounded up.
    pub fn next_vehicle_offset(&self, unit: usize) -> i32 {
        let own = self.units[unit].length as i32 / 2;
        let next = self
            .units
            .get(unit + 1)
            .map_or(0, |n| n.length as i32 + 1)
            / 2;
        own + next
    }
}

#[derive(Resource, Debug, Default)]
pub struct Fleet {
    vehicles: HashMap<VehicleId, Vehicle>,
    next_id: u32,
}

impl Fleet {
    pub fn add(&mut self, vehicle: Vehicle) -> VehicleId {
        let id = VehicleId(self.next_id);
        self.next_id += 1;
        self.vehicles.insert(id, vehicle);
        id
    }

    pub fn get(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    pub fn get_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(&id)
    }

    pub fn remove(&mut self, id: VehicleId) -> Option<Vehicle> {
        self.vehicles.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Whether any unit of any vehicle, hidden or not, is on `tile`.
    pub fn any_on_tile(&self, tile: TileIndex) -> bool {
        self.vehicles
            .values()
            .any(|v| v.units.iter().any(|u| u.tile == tile))
    }

    /// The train whose reserved path runs through `tile`.
    pub fn train_reserving(&self, tile: TileIndex) -> Option<VehicleId> {
        self.vehicles
            .iter()
            .filter(|(_, v)| v.kind == VehicleKind::Train)
            .find(|(_, v)| v.reserved.contains(&tile))
            .map(|(&id, _)| id)
    }

    /// Reserve `tile` for a train. Depot tiles get their reservation flag set.
    pub fn reserve(&mut self, id: VehicleId, tile: TileIndex, grid: &mut TileGrid) {
        let Some(vehicle) = self.vehicles.get_mut(&id) else {
            return;
        };
        if !vehicle.reserved.contains(&tile) {
            vehicle.reserved.push(tile);
        }
        if let Some(depot) = grid.depot_mut(tile) {
            depot.reserved = true;
        }
    }

    /// Drop the whole reserved path of a train.
    pub fn free_reservation(&mut self, id: VehicleId, grid: &mut TileGrid) {
        let Some(vehicle) = self.vehicles.get_mut(&id) else {
            return;
        };
        for tile in vehicle.reserved.drain(..) {
            if let Some(depot) = grid.depot_mut(tile) {
                depot.reserved = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rail::RailType;
    use map::{DiagDirection, MapSize};

    fn unit(tile: TileIndex, length: u8) -> VehicleUnit {
        VehicleUnit {
            length,
            ..VehicleUnit::new(tile, 0, 0, Direction::NE)
        }
    }

    #[test]
    fn test_next_vehicle_offset() {
        let t = TileIndex(0);
        let v = Vehicle::new(
            VehicleKind::Train,
            Owner::None,
            vec![unit(t, 8), unit(t, 7), unit(t, 5)],
        );
        // 8/2 + (7+1)/2
        assert_eq!(v.next_vehicle_offset(0), 8);
        // 7/2 + (5+1)/2
        assert_eq!(v.next_vehicle_offset(1), 6);
        // last unit: only its own half
        assert_eq!(v.next_vehicle_offset(2), 2);
        assert!(v.is_last(2));
    }

    #[test]
    fn test_any_on_tile_sees_hidden_units() {
        let mut fleet = Fleet::default();
        let t = TileIndex(17);
        let mut hidden = unit(t, 8);
        hidden.hidden = true;
        fleet.add(Vehicle::new(VehicleKind::Train, Owner::None, vec![hidden]));
        assert!(fleet.any_on_tile(t));
        assert!(!fleet.any_on_tile(TileIndex(18)));
    }

    #[test]
    fn test_reservation_lifecycle() {
        let map = MapSize::new(6, 6);
        let mut grid = TileGrid::new(map);
        let depot = map.tile_xy(4, 4);
        grid.make_rail_depot(depot, Owner::None, DiagDirection::NE, RailType::Rail);

        let mut fleet = Fleet::default();
        let id = fleet.add(Vehicle::new(
            VehicleKind::Train,
            Owner::None,
            vec![unit(map.tile_xy(3, 4), 8)],
        ));
        fleet.reserve(id, map.tile_xy(3, 4), &mut grid);
        fleet.reserve(id, depot, &mut grid);

        assert!(grid.depot(depot).unwrap().reserved);
        assert_eq!(fleet.train_reserving(depot), Some(id));

        fleet.free_reservation(id, &mut grid);
        assert!(!grid.depot(depot).unwrap().reserved);
        assert_eq!(fleet.train_reserving(depot), None);
    }
}
