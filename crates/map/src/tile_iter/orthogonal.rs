use crate::coord::{MapSize, TileIndex, INVALID_TILE};
use crate::tile_area::TileArea;

/// Walks a [`TileArea`] row by row, west to east within a row.
///
/// The cursor moves by index arithmetic only; `rowdiff` takes it from the
/// last column of one row to the first column of the next.
#[derive(Debug, Clone)]
pub struct OrthogonalTileIterator {
    tile: TileIndex,
    /// Width of the area.
    w: u32,
    /// Added to the index when moving on to the next row.
    rowdiff: i32,
    /// Columns left in the current row, including the current one.
    x: u32,
    /// Rows left, including the current one.
    y: u32,
}

impl OrthogonalTileIterator {
    pub fn new(map: &MapSize, area: &TileArea) -> Self {
        let w = area.w as u32;
        Self {
            tile: if area.is_empty() {
                INVALID_TILE
            } else {
                area.origin
            },
            w,
            rowdiff: map.tile_diff_xy(1, 1) - w as i32,
            x: w,
            y: area.h as u32,
        }
    }

    #[inline]
    pub fn tile(&self) -> TileIndex {
        self.tile
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.tile == INVALID_TILE
    }

    #[inline]
    pub fn advance(&mut self) {
        assert!(
            self.tile != INVALID_TILE,
            "advanced an exhausted tile iterator"
        );

        self.x -= 1;
        if self.x > 0 {
            self.tile.0 += 1;
            return;
        }

        self.y -= 1;
        if self.y > 0 {
            self.x = self.w;
            self.tile = TileIndex(self.tile.0.wrapping_add_signed(self.rowdiff));
        } else {
            self.tile = INVALID_TILE;
        }
    }

    fn remaining(&self) -> usize {
        if self.is_done() {
            0
        } else {
            ((self.y - 1) * self.w + self.x) as usize
        }
    }
}

impl Iterator for OrthogonalTileIterator {
    type Item = TileIndex;

    fn next(&mut self) -> Option<TileIndex> {
        if self.is_done() {
            return None;
        }
        let tile = self.tile;
        self.advance();
        Some(tile)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for OrthogonalTileIterator {}
