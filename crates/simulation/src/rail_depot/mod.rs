//! Train depots: the tile handler, the build command and the depot records.

mod build;
mod depot_pool;
mod entry;
mod procs;

pub use build::{build_rail_depot, can_build_depot_by_tileh};
pub use depot_pool::{Depot, DepotPool};
pub use entry::{ticks_to_leave_depot, DepotEntryTable};
pub use procs::RailDepotProcs;
