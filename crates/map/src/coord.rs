//! Linear tile indices and the map size that gives them meaning.
//!
//! A [`TileIndex`] is only an offset into the tile array; everything that
//! needs the (x, y) of a tile goes through a [`MapSize`]. Map dimensions are
//! powers of two so that the index is `(y << log_x) | x`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MAP_SIZE_BITS, MAX_MAP_SIZE_BITS, MIN_MAP_SIZE_BITS};
use crate::direction::DiagDirection;

/// Index of a single tile on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileIndex(pub u32);

/// Marks "no tile". Iterators park here once they are exhausted.
pub const INVALID_TILE: TileIndex = TileIndex(u32::MAX);

impl TileIndex {
    #[inline]
    pub fn is_invalid(self) -> bool {
        self == INVALID_TILE
    }
}

/// Dimensions of the map, stored as the base-2 logarithm of each side.
/// Loading checks the same bounds as [`MapSize::new`].
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MapSizeBits")]
pub struct MapSize {
    log_x: u8,
    log_y: u8,
}

/// Unchecked serialized form of [`MapSize`].
#[derive(Deserialize)]
struct MapSizeBits {
    log_x: u8,
    log_y: u8,
}

impl TryFrom<MapSizeBits> for MapSize {
    type Error = String;

    fn try_from(bits: MapSizeBits) -> Result<Self, Self::Error> {
        MapSize::try_new(bits.log_x, bits.log_y).ok_or_else(|| {
            format!(
                "map size bits out of range: {}x{} (allowed {}..={})",
                bits.log_x, bits.log_y, MIN_MAP_SIZE_BITS, MAX_MAP_SIZE_BITS
            )
        })
    }
}

impl Default for MapSize {
    fn default() -> Self {
        Self::new(DEFAULT_MAP_SIZE_BITS, DEFAULT_MAP_SIZE_BITS)
    }
}

impl MapSize {
    pub fn new(log_x: u8, log_y: u8) -> Self {
        assert!(
            (MIN_MAP_SIZE_BITS..=MAX_MAP_SIZE_BITS).contains(&log_x)
                && (MIN_MAP_SIZE_BITS..=MAX_MAP_SIZE_BITS).contains(&log_y),
            "map size bits out of range: {log_x}x{log_y}"
        );
        Self { log_x, log_y }
    }

    /// Like [`MapSize::new`], but `None` instead of a panic for
    /// out-of-range bits.
    pub fn try_new(log_x: u8, log_y: u8) -> Option<Self> {
        let range = MIN_MAP_SIZE_BITS..=MAX_MAP_SIZE_BITS;
        (range.contains(&log_x) && range.contains(&log_y)).then_some(Self { log_x, log_y })
    }

    /// Build from side lengths in tiles. Both must be powers of two within
    /// the supported range.
    pub fn from_dimensions(width: u32, height: u32) -> Option<Self> {
        let bits = |side: u32| {
            if !side.is_power_of_two() {
                return None;
            }
            let log = side.trailing_zeros() as u8;
            (MIN_MAP_SIZE_BITS..=MAX_MAP_SIZE_BITS)
                .contains(&log)
                .then_some(log)
        };
        Some(Self {
            log_x: bits(width)?,
            log_y: bits(height)?,
        })
    }

    #[inline]
    pub fn log_x(&self) -> u8 {
        self.log_x
    }

    #[inline]
    pub fn log_y(&self) -> u8 {
        self.log_y
    }

    #[inline]
    pub fn size_x(&self) -> u32 {
        1 << self.log_x
    }

    #[inline]
    pub fn size_y(&self) -> u32 {
        1 << self.log_y
    }

    /// Total number of tiles.
    #[inline]
    pub fn size(&self) -> u32 {
        1 << (self.log_x + self.log_y)
    }

    #[inline]
    pub fn max_x(&self) -> u32 {
        self.size_x() - 1
    }

    #[inline]
    pub fn max_y(&self) -> u32 {
        self.size_y() - 1
    }

    #[inline]
    pub fn tile_xy(&self, x: u32, y: u32) -> TileIndex {
        debug_assert!(x < self.size_x() && y < self.size_y());
        TileIndex((y << self.log_x) + x)
    }

    #[inline]
    pub fn tile_x(&self, tile: TileIndex) -> u32 {
        tile.0 & self.max_x()
    }

    #[inline]
    pub fn tile_y(&self, tile: TileIndex) -> u32 {
        tile.0 >> self.log_x
    }

    #[inline]
    pub fn is_valid_tile(&self, tile: TileIndex) -> bool {
        tile.0 < self.size()
    }

    /// Index offset of moving `dx` columns and `dy` rows.
    #[inline]
    pub fn tile_diff_xy(&self, dx: i32, dy: i32) -> i32 {
        (dy << self.log_x) + dx
    }

    /// Plain index arithmetic: moving past the east or west edge ends up on
    /// the neighbouring row.
    #[inline]
    pub fn add_xy(&self, tile: TileIndex, dx: i32, dy: i32) -> TileIndex {
        TileIndex(tile.0.wrapping_add_signed(self.tile_diff_xy(dx, dy)))
    }

    /// Offset a tile, returning `None` if the result would leave the map.
    pub fn add_wrap(&self, tile: TileIndex, dx: i32, dy: i32) -> Option<TileIndex> {
        let x = self.tile_x(tile) as i64 + dx as i64;
        let y = self.tile_y(tile) as i64 + dy as i64;
        if x < 0 || y < 0 || x >= self.size_x() as i64 || y >= self.size_y() as i64 {
            return None;
        }
        Some(self.tile_xy(x as u32, y as u32))
    }

    /// The tile across the given edge, if it is on the map.
    pub fn neighbour(&self, tile: TileIndex, dir: DiagDirection) -> Option<TileIndex> {
        let (dx, dy) = dir.offset();
        self.add_wrap(tile, dx, dy)
    }

    pub fn distance_manhattan(&self, a: TileIndex, b: TileIndex) -> u32 {
        self.tile_x(a).abs_diff(self.tile_x(b)) + self.tile_y(a).abs_diff(self.tile_y(b))
    }

    pub fn distance_max(&self, a: TileIndex, b: TileIndex) -> u32 {
        self.tile_x(a)
            .abs_diff(self.tile_x(b))
            .max(self.tile_y(a).abs_diff(self.tile_y(b)))
    }

    /// Number of tiles between `tile` and the closest map border.
    pub fn distance_from_edge(&self, tile: TileIndex) -> u32 {
        let xl = self.tile_x(tile);
        let yl = self.tile_y(tile);
        let xh = self.max_x() - xl;
        let yh = self.max_y() - yl;
        xl.min(xh).min(yl.min(yh))
    }
}
