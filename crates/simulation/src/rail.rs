use serde::{Deserialize, Serialize};

use map::Axis;

use crate::config::RAIL_TYPE_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RailType {
    #[default]
    Rail,
    Electric,
    Monorail,
    Maglev,
}

impl RailType {
    pub const ALL: [RailType; RAIL_TYPE_COUNT] = [
        RailType::Rail,
        RailType::Electric,
        RailType::Monorail,
        RailType::Maglev,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            RailType::Rail => "Railway",
            RailType::Electric => "Electrified railway",
            RailType::Monorail => "Monorail",
            RailType::Maglev => "Maglev",
        }
    }

    /// Track speed limit; 0 means unlimited.
    pub fn max_speed(self) -> u16 {
        match self {
            RailType::Rail | RailType::Electric => 0,
            RailType::Monorail => 240,
            RailType::Maglev => 0,
        }
    }

    /// Whether overhead wires are drawn over this track.
    pub fn has_catenary(self) -> bool {
        matches!(self, RailType::Electric)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportType {
    Rail,
    Road,
    Water,
}

/// Set of track pieces on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TrackBits(pub u8);

impl TrackBits {
    pub const NONE: TrackBits = TrackBits(0);
    pub const X: TrackBits = TrackBits(0x01);
    pub const Y: TrackBits = TrackBits(0x02);
    /// A vehicle standing inside a depot is on no real track.
    pub const DEPOT: TrackBits = TrackBits(0x80);

    /// The straight track piece along `axis`.
    pub fn along(axis: Axis) -> Self {
        match axis {
            Axis::X => TrackBits::X,
            Axis::Y => TrackBits::Y,
        }
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Set of track directions: one bit per track for each way of travelling
/// it, the second direction eight bits above the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TrackdirBits(pub u16);

impl TrackdirBits {
    pub const NONE: TrackdirBits = TrackdirBits(0);

    /// Both directions of every track in `bits`. Depot bits carry no
    /// direction and are dropped.
    pub fn from_track_bits(bits: TrackBits) -> Self {
        TrackdirBits((bits.0 & 0x3F) as u16 * 0x101)
    }
}

/// What a tile offers to a vehicle of some transport type: the track
/// directions present and those blocked by red signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TrackStatus {
    pub trackdirs: TrackdirBits,
    pub red_signals: TrackdirBits,
}

impl TrackStatus {
    pub const NONE: TrackStatus = TrackStatus {
        trackdirs: TrackdirBits::NONE,
        red_signals: TrackdirBits::NONE,
    };

    pub fn new(trackdirs: TrackdirBits, red_signals: TrackdirBits) -> Self {
        Self {
            trackdirs,
            red_signals,
        }
    }
}
