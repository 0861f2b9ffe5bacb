//! Cursors over sets of tiles.
//!
//! Each iterator sits on its current tile and is pumped with `advance()`
//! until it reaches [`INVALID_TILE`]. They also implement [`Iterator`], which
//! is what most callers want. Cloning an iterator checkpoints it: the clone
//! produces exactly the tiles the original still has to produce.

mod diagonal;
mod orthogonal;
#[cfg(test)]
mod tests;

pub use diagonal::DiagonalTileIterator;
pub use orthogonal::OrthogonalTileIterator;

use crate::coord::{MapSize, TileIndex, INVALID_TILE};
use crate::tile_area::TileArea;

/// Either kind of tile iterator, for callers that pick the shape at runtime.
#[derive(Debug, Clone)]
pub enum TileIterator {
    Orthogonal(OrthogonalTileIterator),
    Diagonal(DiagonalTileIterator),
}

impl TileIterator {
    /// Iterate the area spanned by two corner tiles, either as the
    /// rectangle they bound or as the diagonal area between them.
    pub fn between(map: &MapSize, start: TileIndex, end: TileIndex, diagonal: bool) -> Self {
        if diagonal {
            Self::Diagonal(DiagonalTileIterator::new(map, start, end))
        } else {
            Self::Orthogonal(OrthogonalTileIterator::new(
                map,
                &TileArea::from_corners(map, start, end),
            ))
        }
    }

    /// The current tile, [`INVALID_TILE`] once exhausted.
    #[inline]
    pub fn tile(&self) -> TileIndex {
        match self {
            TileIterator::Orthogonal(it) => it.tile(),
            TileIterator::Diagonal(it) => it.tile(),
        }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.tile() == INVALID_TILE
    }

    /// Move to the next tile.
    ///
    /// # Panics
    /// If the iterator is already exhausted.
    #[inline]
    pub fn advance(&mut self) {
        match self {
            TileIterator::Orthogonal(it) => it.advance(),
            TileIterator::Diagonal(it) => it.advance(),
        }
    }
}

impl From<OrthogonalTileIterator> for TileIterator {
    fn from(it: OrthogonalTileIterator) -> Self {
        TileIterator::Orthogonal(it)
    }
}

impl From<DiagonalTileIterator> for TileIterator {
    fn from(it: DiagonalTileIterator) -> Self {
        TileIterator::Diagonal(it)
    }
}

impl Iterator for TileIterator {
    type Item = TileIndex;

    fn next(&mut self) -> Option<TileIndex> {
        match self {
            TileIterator::Orthogonal(it) => it.next(),
            TileIterator::Diagonal(it) => it.next(),
        }
    }
}
