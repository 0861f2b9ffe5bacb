use crate::coord::{MapSize, TileIndex, INVALID_TILE};

/// Walks the diagonal area between two corner tiles.
///
/// Measured from the first corner, let `u = dx + dy` and `v = dy - dx`. The
/// area is every tile whose `u` lies between 0 and the second corner's `u`,
/// and likewise for `v`: a rectangle turned by 45 degrees, a diamond when
/// both spans are equal. Rows are the lines of constant `v`, visited from
/// the first corner towards the second; along a row the position moves by
/// `(s1, s1)`. Even rows hold `w + 1` tiles and odd rows `w + odd`, which
/// can be zero for a one-tile-wide area. Tiles off the map are skipped.
#[derive(Debug, Clone)]
pub struct DiagonalTileIterator {
    tile: TileIndex,
    map: MapSize,
    /// Position of the cursor; may be off the map while skipping.
    x: i32,
    y: i32,
    /// Whether the `u` span is odd.
    odd: bool,
    /// Advancing within a row adds `(s1, s1)`.
    s1: i32,
    /// Going from an even row to the next adds `(s2x, s2y)`, from an odd
    /// row `(s2x - s1, s2y - s1)`.
    s2x: i32,
    s2y: i32,
    /// Half the `u` span.
    w: u32,
    /// Tiles left in the current row, including the current one.
    n: u32,
    /// Rows left, including the current one.
    m: u32,
}

impl DiagonalTileIterator {
    pub fn new(map: &MapSize, begin: TileIndex, end: TileIndex) -> Self {
        assert!(map.is_valid_tile(begin) && map.is_valid_tile(end));

        let x = map.tile_x(begin) as i32;
        let y = map.tile_y(begin) as i32;
        let dx = map.tile_x(end) as i32 - x;
        let dy = map.tile_y(end) as i32 - y;

        let u = dx + dy;
        let v = dy - dx;
        let s1 = if u < 0 { -1 } else { 1 };
        let sv = if v < 0 { -1 } else { 1 };
        let w = u.unsigned_abs() / 2;

        Self {
            tile: begin,
            map: *map,
            x,
            y,
            odd: u.unsigned_abs() % 2 == 1,
            s1,
            s2x: (s1 - sv) / 2,
            s2y: (s1 + sv) / 2,
            w,
            n: w + 1,
            m: v.unsigned_abs() + 1,
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

    pub fn advance(&mut self) {
        assert!(
            self.tile != INVALID_TILE,
            "advanced an exhausted tile iterator"
        );

        loop {
            if !self.step() {
                self.tile = INVALID_TILE;
                return;
            }
            if let Some(tile) = self.cursor_tile() {
                self.tile = tile;
                return;
            }
        }
    }

    /// Move the cursor to the next position of the raster, on the map or
    /// not. Returns `false` once every row is done.
    fn step(&mut self) -> bool {
        if self.n > 1 {
            self.n -= 1;
            self.x += self.s1;
            self.y += self.s1;
            return true;
        }

        // back to the first tile of the row just finished
        let back = (self.row_len() as i32 - 1) * self.s1;
        self.x -= back;
        self.y -= back;

        loop {
            let from_even = self.is_even_row();
            self.m -= 1;
            if self.m == 0 {
                self.n = 0;
                return false;
            }

            if from_even {
                self.x += self.s2x;
                self.y += self.s2y;
            } else {
                self.x += self.s2x - self.s1;
                self.y += self.s2y - self.s1;
            }

            self.n = self.row_len();
            if self.n > 0 {
                return true;
            }
        }
    }

    /// Row parity follows from the rows left: the total row count has the
    /// parity opposite to `odd`.
    #[inline]
    fn is_even_row(&self) -> bool {
        (self.m % 2 == 1) != self.odd
    }

    #[inline]
    fn row_len(&self) -> u32 {
        if self.is_even_row() {
            self.w + 1
        } else {
            self.w + self.odd as u32
        }
    }

    fn cursor_tile(&self) -> Option<TileIndex> {
        if self.x < 0
            || self.y < 0
            || self.x as u32 >= self.map.size_x()
            || self.y as u32 >= self.map.size_y()
        {
            return None;
        }
        Some(self.map.tile_xy(self.x as u32, self.y as u32))
    }
}

impl Iterator for DiagonalTileIterator {
    type Item = TileIndex;

    fn next(&mut self) -> Option<TileIndex> {
        if self.is_done() {
            return None;
        }
        let tile = self.tile;
        self.advance();
        Some(tile)
    }
}
