//! Axis-aligned rectangles of tiles.
//!
//! A [`TileArea`] is a plain value: it never owns map state and all the
//! operations that need coordinates take the [`MapSize`] explicitly.

use serde::{Deserialize, Serialize};

use crate::coord::{MapSize, TileIndex, INVALID_TILE};
use crate::tile_iter::OrthogonalTileIterator;

/// Rectangle of `w × h` tiles with `origin` at its north (lowest x/y)
/// corner. An area with a zero side, or with an invalid origin, is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileArea {
    pub origin: TileIndex,
    pub w: u16,
    pub h: u16,
}

impl Default for TileArea {
    fn default() -> Self {
        Self {
            origin: INVALID_TILE,
            w: 0,
            h: 0,
        }
    }
}

impl TileArea {
    /// Stores the values as given. Nothing is checked against the map.
    pub fn new(origin: TileIndex, w: u16, h: u16) -> Self {
        Self { origin, w, h }
    }

    /// Smallest area containing both tiles, in whichever order they come.
    pub fn from_corners(map: &MapSize, start: TileIndex, end: TileIndex) -> Self {
        assert!(map.is_valid_tile(start) && map.is_valid_tile(end));

        let mut area = Self::default();
        area.set(
            map,
            map.tile_x(start),
            map.tile_y(start),
            map.tile_x(end),
            map.tile_y(end),
        );
        area
    }

    /// Reset to the bounding rectangle of `(x0, y0)` and `(x1, y1)`.
    pub fn set(&mut self, map: &MapSize, x0: u32, y0: u32, x1: u32, y1: u32) {
        let (sx, ex) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (sy, ey) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };

        self.origin = map.tile_xy(sx, sy);
        self.w = (ex - sx + 1) as u16;
        self.h = (ey - sy + 1) as u16;
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0 || self.origin == INVALID_TILE
    }

    /// Grow just enough to include `tile`, so that `contains(tile)` holds
    /// afterwards. The one exception is [`INVALID_TILE`]: adding it is a
    /// no-op on any area, empty or not, and the area never contains it.
    pub fn add_tile(&mut self, map: &MapSize, tile: TileIndex) {
        if tile == INVALID_TILE {
            return;
        }
        if self.is_empty() {
            *self = Self::new(tile, 1, 1);
            return;
        }

        let (sx, sy, ex, ey) = self.bounds(map);
        let ax = map.tile_x(tile);
        let ay = map.tile_y(tile);

        self.set(map, sx.min(ax), sy.min(ay), ex.max(ax), ey.max(ay));
    }

    /// Grow to the bounding box of both areas. This may take in tiles that
    /// neither area covered before.
    pub fn add_area(&mut self, map: &MapSize, other: &TileArea) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            *self = *other;
            return;
        }

        let (sx, sy, ex, ey) = self.bounds(map);
        let (osx, osy, oex, oey) = other.bounds(map);

        self.set(map, sx.min(osx), sy.min(osy), ex.max(oex), ey.max(oey));
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn intersects(&self, map: &MapSize, other: &TileArea) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        let (left1, top1, right1, bottom1) = self.bounds(map);
        let (left2, top2, right2, bottom2) = other.bounds(map);

        !(left2 > right1 || right2 < left1 || top2 > bottom1 || bottom2 < top1)
    }

    pub fn contains(&self, map: &MapSize, tile: TileIndex) -> bool {
        if self.is_empty() || !map.is_valid_tile(tile) {
            return false;
        }

        let left = map.tile_x(self.origin);
        let top = map.tile_y(self.origin);
        let x = map.tile_x(tile);
        let y = map.tile_y(tile);

        x >= left && x - left < self.w as u32 && y >= top && y - top < self.h as u32
    }

    /// Cut the area back so it no longer sticks out over the south-east map
    /// borders. The origin stays put.
    pub fn clamp_to_map(&mut self, map: &MapSize) {
        assert!(map.is_valid_tile(self.origin));

        let room_x = map.size_x() - map.tile_x(self.origin);
        let room_y = map.size_y() - map.tile_y(self.origin);
        self.w = (self.w as u32).min(room_x) as u16;
        self.h = (self.h as u32).min(room_y) as u16;
    }

    /// The tile at the centre, or just north of it when a side is even.
    pub fn center_tile(&self, map: &MapSize) -> TileIndex {
        if self.is_empty() {
            return INVALID_TILE;
        }
        map.add_xy(self.origin, (self.w / 2) as i32, (self.h / 2) as i32)
    }

    /// The tile of the area closest to `tile`, each axis clamped on its own.
    /// Returns [`INVALID_TILE`] for an empty area.
    pub fn closest_tile(&self, map: &MapSize, tile: TileIndex) -> TileIndex {
        if self.is_empty() {
            return INVALID_TILE;
        }

        let (sx, sy, ex, ey) = self.bounds(map);
        let x = map.tile_x(tile).clamp(sx, ex);
        let y = map.tile_y(tile).clamp(sy, ey);

        map.tile_xy(x, y)
    }

    /// Iterate the area row by row.
    pub fn tiles(&self, map: &MapSize) -> OrthogonalTileIterator {
        OrthogonalTileIterator::new(map, self)
    }

    /// Run `f` on every tile of the area, row by row.
    pub fn for_each_tile(&self, map: &MapSize, mut f: impl FnMut(TileIndex)) {
        for tile in self.tiles(map) {
            f(tile);
        }
    }

    pub fn tile_count(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            self.w as u32 * self.h as u32
        }
    }

    /// Inclusive `(x0, y0, x1, y1)` of a non-empty area.
    fn bounds(&self, map: &MapSize) -> (u32, u32, u32, u32) {
        debug_assert!(!self.is_empty());
        let sx = map.tile_x(self.origin);
        let sy = map.tile_y(self.origin);
        (sx, sy, sx + self.w as u32 - 1, sy + self.h as u32 - 1)
    }
}

impl MapSize {
    /// Area covering every tile of the map.
    pub fn whole_map_area(&self) -> TileArea {
        TileArea::new(
            self.tile_xy(0, 0),
            self.size_x() as u16,
            self.size_y() as u16,
        )
    }
}
