use map::{Axis, DiagDirection};

use crate::company::Owner;
use crate::rail::RailType;
use crate::tile_grid::Slope;

/// Foundation built under a tile to level it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Foundation {
    #[default]
    None,
    /// Raised to the height of the highest corner.
    Leveled,
}

impl Foundation {
    /// The foundation a building on `tileh` needs to stand level.
    pub fn flattening(tileh: Slope) -> Self {
        if tileh.is_flat() {
            Foundation::None
        } else {
            Foundation::Leveled
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GroundKind {
    #[default]
    Grass,
    Snow,
    Desert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepotSprite {
    pub direction: DiagDirection,
    pub rail_type: RailType,
    /// Palette of the owning company.
    pub colour: u8,
}

/// What a tile consists of when drawn, bottom layer first. Turning this
/// into sprites is the renderer's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileDrawing {
    pub foundation: Foundation,
    pub ground: GroundKind,
    /// Plain track drawn on the ground.
    pub track: Option<Axis>,
    /// Reserved-path highlight over the track.
    pub reservation: Option<Axis>,
    pub catenary: bool,
    pub depot: Option<DepotSprite>,
}

/// Answer to the "what is this tile" query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileDesc {
    pub owner: Owner,
    pub name: &'static str,
    /// Day the structure on the tile was built.
    pub build_date: Option<u32>,
    pub rail_type: Option<&'static str>,
    pub rail_speed: Option<u16>,
}

/// What the vehicle movement code should do after a vehicle reached a
/// new position on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleEnterStatus {
    Continue,
    /// The vehicle left the visible world (e.g. went inside a depot).
    EnteredWormhole,
}
