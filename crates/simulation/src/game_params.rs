//! Data-driven game parameters.
//!
//! Prices, climate and construction switches read by the tile handlers live
//! in a single [`GameParams`] resource so they can be tuned without touching
//! the handlers. Defaults are the values a new temperate game starts with.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_SNOW_LINE;

// ---------------------------------------------------------------------------
// Prices
// ---------------------------------------------------------------------------

/// Base costs of the construction actions the tile handlers charge for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prices {
    pub clear_grass: i64,
    pub clear_depot_train: i64,
    pub build_depot_train: i64,
    pub build_foundation: i64,
}

impl Default for Prices {
    fn default() -> Self {
        Self {
            clear_grass: 20,
            clear_depot_train: 60,
            build_depot_train: 1_000,
            build_foundation: 250,
        }
    }
}

// ---------------------------------------------------------------------------
// Climate
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Landscape {
    #[default]
    Temperate,
    Arctic,
    Tropic,
    Toyland,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AccelerationModel {
    #[default]
    Original,
    Realistic,
}

// ---------------------------------------------------------------------------
// GameParams resource
// ---------------------------------------------------------------------------

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameParams {
    pub prices: Prices,
    pub landscape: Landscape,
    /// Height level above which arctic ground is snow-covered.
    pub snow_line: u8,
    pub train_acceleration: AccelerationModel,
    /// Allow building (and keeping buildings) on sloped land.
    pub build_on_slopes: bool,
    /// Allow terraforming under buildings when the result still fits.
    pub autoslope: bool,
    /// Highlight reserved track when describing what a tile draws.
    pub show_track_reservation: bool,
    /// Hide buildings, drawing only the ground and track beneath them.
    pub invisible_buildings: bool,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            prices: Prices::default(),
            landscape: Landscape::default(),
            snow_line: DEFAULT_SNOW_LINE,
            train_acceleration: AccelerationModel::default(),
            build_on_slopes: true,
            autoslope: true,
            show_track_reservation: false,
            invisible_buildings: false,
        }
    }
}
