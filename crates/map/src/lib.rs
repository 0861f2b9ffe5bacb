//! Map geometry: tile coordinates, rectangular tile areas and the iterators
//! that walk them.

use bevy::prelude::*;

pub mod config;
pub mod coord;
pub mod direction;
pub mod tile_area;
pub mod tile_iter;

pub use coord::{MapSize, TileIndex, INVALID_TILE};
pub use direction::{distance_from_tile_edge, Axis, DiagDirection, Direction};
pub use tile_area::TileArea;
pub use tile_iter::{DiagonalTileIterator, OrthogonalTileIterator, TileIterator};

/// Makes the map dimensions available as a resource. An app that inserts
/// its own [`MapSize`] before adding the plugin keeps it.
pub struct MapPlugin;

impl Plugin for MapPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MapSize>();
        let map = *app.world().resource::<MapSize>();
        info!(
            "Map size {}x{} ({} tiles)",
            map.size_x(),
            map.size_y(),
            map.size()
        );
    }
}
