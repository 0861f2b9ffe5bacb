use map::DiagDirection;

use crate::config::TILE_FRACT_MASK;
use crate::tile_grid::TileGrid;
use crate::vehicle::Vehicle;

/// Sub-tile positions where trains enter and leave a depot, per entrance
/// direction (indexed by `DiagDirection as usize`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepotEntryTable {
    /// Point at which a train disappears into the depot.
    pub enter_x: [i32; 4],
    pub enter_y: [i32; 4],
    /// Step, per unit of vehicle offset, from the entry point toward the
    /// point where the following unit becomes visible.
    pub leave_offset_x: [i32; 4],
    pub leave_offset_y: [i32; 4],
}

impl Default for DepotEntryTable {
    fn default() -> Self {
        Self {
            enter_x: [0xA, 8, 4, 8],
            enter_y: [8, 4, 8, 0xA],
            leave_offset_x: [-1, 0, 1, 0],
            leave_offset_y: [0, 1, 0, -1],
        }
    }
}

impl DepotEntryTable {
    pub fn enter_point(&self, dir: DiagDirection) -> (i32, i32) {
        let d = dir as usize;
        (self.enter_x[d], self.enter_y[d])
    }

    /// Where a leaving unit must be for the one `offset` behind it to
    /// appear.
    pub fn leave_point(&self, dir: DiagDirection, offset: i32) -> (i32, i32) {
        let d = dir as usize;
        (
            self.enter_x[d] + (offset + 1) * self.leave_offset_x[d],
            self.enter_y[d] + (offset + 1) * self.leave_offset_y[d],
        )
    }
}

/// Ticks until `unit` of a train leaving a depot reaches the point where
/// the next unit is revealed. `None` if the unit is not on a depot tile.
pub fn ticks_to_leave_depot(
    table: &DepotEntryTable,
    grid: &TileGrid,
    vehicle: &Vehicle,
    unit: usize,
) -> Option<i32> {
    let u = vehicle.units.get(unit)?;
    let dir = grid.depot(u.tile)?.direction;
    let length = vehicle.next_vehicle_offset(unit);
    let (ex, ey) = table.enter_point(dir);
    let fx = u.x_pos & TILE_FRACT_MASK;
    let fy = u.y_pos & TILE_FRACT_MASK;

    Some(match dir {
        DiagDirection::NE => fx - (ex - (length + 1)),
        DiagDirection::SE => -(fy - (ey + (length + 1))),
        DiagDirection::SW => -(fx - (ex + (length + 1))),
        DiagDirection::NW => fy - (ey - (length + 1)),
    })
}
