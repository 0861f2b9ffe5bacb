use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use map::TileIndex;

use crate::company::Owner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Depot {
    pub tile: TileIndex,
    pub owner: Owner,
    /// Game day of construction.
    pub build_date: u32,
}

/// Depot records, keyed by the depot's tile.
#[derive(Resource, Debug, Clone, Default)]
pub struct DepotPool {
    depots: HashMap<TileIndex, Depot>,
}

impl DepotPool {
    pub fn insert(&mut self, depot: Depot) {
        if let Some(old) = self.depots.insert(depot.tile, depot) {
            warn!("Replaced depot record at {:?} built on day {}", old.tile, old.build_date);
        }
    }

    pub fn get(&self, tile: TileIndex) -> Option<&Depot> {
        self.depots.get(&tile)
    }

    pub fn remove(&mut self, tile: TileIndex) -> Option<Depot> {
        self.depots.remove(&tile)
    }

    pub fn len(&self) -> usize {
        self.depots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depots.is_empty()
    }

    /// Depots of `owner`, in no particular order.
    pub fn owned_by(&self, owner: Owner) -> impl Iterator<Item = &Depot> + '_ {
        self.depots.values().filter(move |d| d.owner == owner)
    }
}
