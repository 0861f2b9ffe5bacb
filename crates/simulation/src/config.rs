/// Rows of the map visited by the tile loop on each fixed tick.
pub const TILE_LOOP_ROWS_PER_TICK: u32 = 4;

/// Length of a full-sized rail vehicle, in 1/8ths of a tile.
pub const VEHICLE_LENGTH: u8 = 8;

/// Speed limit (km/h-ish) reported for depots under the realistic
/// acceleration model.
pub const DEPOT_SPEED_LIMIT: u16 = 61;

/// Number of rail types; sizes the per-company infrastructure counters.
pub const RAIL_TYPE_COUNT: usize = 4;

/// Default height level above which arctic ground turns to snow.
pub const DEFAULT_SNOW_LINE: u8 = 7;

/// Highest height level a tile corner can have.
pub const MAX_TILE_HEIGHT: u8 = 15;

/// Mask selecting the sub-tile part of a vehicle pixel position.
pub const TILE_FRACT_MASK: i32 = 0xF;

/// Ticks in one game day.
pub const DAY_TICKS: u32 = 74;
