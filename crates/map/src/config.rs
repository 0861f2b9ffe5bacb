pub const MIN_MAP_SIZE_BITS: u8 = 6;
pub const MAX_MAP_SIZE_BITS: u8 = 12;
pub const DEFAULT_MAP_SIZE_BITS: u8 = 8;
pub const MIN_MAP_SIZE: u32 = 1 << MIN_MAP_SIZE_BITS;
pub const MAX_MAP_SIZE: u32 = 1 << MAX_MAP_SIZE_BITS;

/// Sub-tile units per tile edge. Vehicle positions are pixel coordinates,
/// `x & (TILE_SIZE - 1)` being the offset inside the tile.
pub const TILE_SIZE: u32 = 16;

/// Pixel height of one height level.
pub const TILE_HEIGHT: i32 = 8;
