//! Per-tile-type behaviour.
//!
//! Every [`TileType`](crate::tile_grid::TileType) has one [`TileTypeProcs`]
//! implementation registered in the [`TileTypeProcTable`]. The free
//! functions in [`landscape`] look up a tile's type and forward to its
//! handler; nothing else should call the handlers directly.

mod clear_tile;
mod context;
pub mod landscape;
mod table;
#[cfg(test)]
mod tests;
mod types;

pub use clear_tile::ClearTileProcs;
pub use context::{with_tile_context, TileContext};
pub use table::{TileTypeProcTable, TileTypeProcs};
pub use types::{DepotSprite, Foundation, GroundKind, TileDesc, TileDrawing, VehicleEnterStatus};
