use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::*;

const MIN_BITS: u8 = crate::config::MIN_MAP_SIZE_BITS;

fn small_map() -> MapSize {
    MapSize::new(6, 6)
}

/// Every tile of the diagonal area between `a` and `b`, found by testing
/// each tile of the map against the rotated bounds.
fn diagonal_area_brute_force(map: &MapSize, a: TileIndex, b: TileIndex) -> HashSet<TileIndex> {
    let ax = map.tile_x(a) as i32;
    let ay = map.tile_y(a) as i32;
    let u_end = (map.tile_x(b) as i32 - ax) + (map.tile_y(b) as i32 - ay);
    let v_end = (map.tile_y(b) as i32 - ay) - (map.tile_x(b) as i32 - ax);
    let between = |val: i32, end: i32| (val >= 0 && val <= end) || (val <= 0 && val >= end);

    map.whole_map_area()
        .tiles(map)
        .filter(|&t| {
            let dx = map.tile_x(t) as i32 - ax;
            let dy = map.tile_y(t) as i32 - ay;
            between(dx + dy, u_end) && between(dy - dx, v_end)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Orthogonal
// ---------------------------------------------------------------------------

#[test]
fn test_orthogonal_worked_example() {
    let map = MapSize::new(MIN_BITS, MIN_BITS);
    let area = TileArea::new(map.tile_xy(2, 2), 3, 2);
    let mut it = OrthogonalTileIterator::new(&map, &area);

    let expected = [(2, 2), (3, 2), (4, 2), (2, 3), (3, 3), (4, 3)];
    for (x, y) in expected {
        assert_eq!(it.tile(), map.tile_xy(x, y));
        it.advance();
    }
    assert_eq!(it.tile(), INVALID_TILE);
    assert!(it.is_done());
}

#[test]
fn test_orthogonal_empty_area_starts_exhausted() {
    let map = small_map();
    for (w, h) in [(0, 0), (0, 4), (4, 0)] {
        let it = OrthogonalTileIterator::new(&map, &TileArea::new(map.tile_xy(1, 1), w, h));
        assert_eq!(it.tile(), INVALID_TILE);
        assert_eq!(it.count(), 0);
    }
    assert!(TileArea::default().tiles(&map).is_done());
}

#[test]
fn test_orthogonal_single_tile() {
    let map = small_map();
    let t = map.tile_xy(63, 63);
    let tiles: Vec<_> = TileArea::new(t, 1, 1).tiles(&map).collect();
    assert_eq!(tiles, vec![t]);
}

#[test]
fn test_orthogonal_row_major_and_contained() {
    let map = small_map();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..200 {
        let x = rng.gen_range(0..64u32);
        let y = rng.gen_range(0..64u32);
        let w = rng.gen_range(1..=(64 - x)) as u16;
        let h = rng.gen_range(1..=(64 - y)) as u16;
        let area = TileArea::new(map.tile_xy(x, y), w, h);

        let it = area.tiles(&map);
        assert_eq!(it.len(), w as usize * h as usize);
        let tiles: Vec<_> = it.collect();
        assert_eq!(tiles.len(), w as usize * h as usize);
        assert_eq!(tiles[0], area.origin);

        let mut expected = Vec::new();
        for ty in y..y + h as u32 {
            for tx in x..x + w as u32 {
                expected.push(map.tile_xy(tx, ty));
            }
        }
        assert_eq!(tiles, expected);
        assert!(tiles.iter().all(|&t| area.contains(&map, t)));
    }
}

#[test]
fn test_orthogonal_whole_map() {
    let map = MapSize::new(6, 7);
    let tiles: Vec<_> = map.whole_map_area().tiles(&map).collect();
    assert_eq!(tiles.len() as u32, map.size());
    assert!(tiles.windows(2).all(|w| w[1].0 == w[0].0 + 1));
}

#[test]
fn test_orthogonal_stays_exhausted() {
    let map = small_map();
    let mut it = TileArea::new(map.tile_xy(0, 0), 2, 1).tiles(&map);
    assert!(it.next().is_some());
    assert!(it.next().is_some());
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);
    assert_eq!(it.tile(), INVALID_TILE);
}

#[test]
#[should_panic(expected = "exhausted")]
fn test_orthogonal_advance_past_end_panics() {
    let map = small_map();
    let mut it = TileArea::new(map.tile_xy(0, 0), 1, 1).tiles(&map);
    it.advance();
    it.advance();
}

#[test]
fn test_orthogonal_clone_checkpoint() {
    let map = small_map();
    let area = TileArea::new(map.tile_xy(5, 5), 4, 3);
    let mut it = area.tiles(&map);
    for _ in 0..5 {
        it.advance();
    }
    let checkpoint = it.clone();
    let rest: Vec<_> = it.collect();
    let replay: Vec<_> = checkpoint.collect();
    assert_eq!(rest.len(), 7);
    assert_eq!(rest, replay);
}

// ---------------------------------------------------------------------------
// Diagonal
// ---------------------------------------------------------------------------

#[test]
fn test_diagonal_same_corner_yields_one_tile() {
    let map = small_map();
    let p = map.tile_xy(9, 4);
    let mut it = DiagonalTileIterator::new(&map, p, p);
    assert_eq!(it.tile(), p);
    it.advance();
    assert!(it.is_done());

    let tiles: Vec<_> = DiagonalTileIterator::new(&map, p, p).collect();
    assert_eq!(tiles, vec![p]);
}

#[test]
fn test_diagonal_line() {
    let map = small_map();
    let tiles: Vec<_> =
        DiagonalTileIterator::new(&map, map.tile_xy(2, 2), map.tile_xy(4, 4)).collect();
    assert_eq!(
        tiles,
        vec![map.tile_xy(2, 2), map.tile_xy(3, 3), map.tile_xy(4, 4)]
    );
}

#[test]
fn test_diagonal_adjacent_tiles() {
    let map = small_map();
    let a = map.tile_xy(2, 2);
    let b = map.tile_xy(3, 2);
    let tiles: Vec<_> = DiagonalTileIterator::new(&map, a, b).collect();
    assert_eq!(tiles, vec![a, b]);

    // the u span is 0 here, so every other row is empty
    let c = map.tile_xy(1, 0);
    let d = map.tile_xy(0, 1);
    let tiles: Vec<_> = DiagonalTileIterator::new(&map, c, d).collect();
    assert_eq!(tiles, vec![c, d]);
}

#[test]
fn test_diagonal_diamond() {
    let map = small_map();
    let begin = map.tile_xy(10, 10);
    let end = map.tile_xy(12, 10);
    let tiles: Vec<_> = DiagonalTileIterator::new(&map, begin, end).collect();

    assert_eq!(tiles[0], begin);
    assert_eq!(tiles.len(), 5);
    let set: HashSet<_> = tiles.into_iter().collect();
    for (x, y) in [(10, 10), (11, 9), (11, 10), (11, 11), (12, 10)] {
        assert!(set.contains(&map.tile_xy(x, y)), "missing ({x}, {y})");
    }
}

#[test]
fn test_diagonal_clips_at_map_border() {
    let map = small_map();
    // the northern tip (1, -1) of this diamond is off the map
    let tiles: HashSet<_> =
        DiagonalTileIterator::new(&map, map.tile_xy(0, 0), map.tile_xy(2, 0)).collect();
    let expected: HashSet<_> = [(0, 0), (1, 0), (1, 1), (2, 0)]
        .into_iter()
        .map(|(x, y)| map.tile_xy(x, y))
        .collect();
    assert_eq!(tiles, expected);
}

#[test]
fn test_diagonal_matches_brute_force() {
    let map = small_map();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..300 {
        let a = map.tile_xy(rng.gen_range(0..64), rng.gen_range(0..64));
        let b = map.tile_xy(
            (map.tile_x(a) as i32 + rng.gen_range(-12..=12)).clamp(0, 63) as u32,
            (map.tile_y(a) as i32 + rng.gen_range(-12..=12)).clamp(0, 63) as u32,
        );

        let tiles: Vec<_> = DiagonalTileIterator::new(&map, a, b).collect();
        let set: HashSet<_> = tiles.iter().copied().collect();
        assert_eq!(set.len(), tiles.len(), "duplicate tile for {a:?} -> {b:?}");
        assert_eq!(tiles[0], a);
        assert!(set.contains(&b));
        assert_eq!(set, diagonal_area_brute_force(&map, a, b));
    }
}

#[test]
fn test_diagonal_corner_order_gives_same_set() {
    let map = small_map();
    let p = map.tile_xy(20, 7);
    let q = map.tile_xy(25, 16);
    let forward: HashSet<_> = DiagonalTileIterator::new(&map, p, q).collect();
    let backward: HashSet<_> = DiagonalTileIterator::new(&map, q, p).collect();
    assert_eq!(forward, backward);
    assert!(forward.len() > 2);
}

#[test]
fn test_diagonal_clone_checkpoint() {
    let map = small_map();
    let mut it = DiagonalTileIterator::new(&map, map.tile_xy(30, 30), map.tile_xy(34, 27));
    it.advance();
    it.advance();
    let mut checkpoint = it.clone();

    loop {
        assert_eq!(it.tile(), checkpoint.tile());
        if it.is_done() {
            break;
        }
        it.advance();
        checkpoint.advance();
    }
    assert!(checkpoint.is_done());
}

#[test]
#[should_panic(expected = "exhausted")]
fn test_diagonal_advance_past_end_panics() {
    let map = small_map();
    let p = map.tile_xy(3, 3);
    let mut it = DiagonalTileIterator::new(&map, p, p);
    it.advance();
    it.advance();
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

#[test]
fn test_between_picks_variant() {
    let map = small_map();
    let a = map.tile_xy(4, 4);
    let b = map.tile_xy(6, 5);

    let ortho: Vec<_> = TileIterator::between(&map, a, b, false).collect();
    let expected: Vec<_> = TileArea::from_corners(&map, a, b).tiles(&map).collect();
    assert_eq!(ortho, expected);

    let diag: Vec<_> = TileIterator::between(&map, a, b, true).collect();
    let expected: Vec<_> = DiagonalTileIterator::new(&map, a, b).collect();
    assert_eq!(diag, expected);
}

#[test]
fn test_enum_pump_loop() {
    let map = small_map();
    let area = TileArea::new(map.tile_xy(1, 1), 2, 2);
    let mut it = TileIterator::from(area.tiles(&map));
    let mut seen = 0;
    while !it.is_done() {
        assert!(area.contains(&map, it.tile()));
        seen += 1;
        it.advance();
    }
    assert_eq!(seen, 4);

    let checkpoint = TileIterator::from(DiagonalTileIterator::new(
        &map,
        map.tile_xy(1, 1),
        map.tile_xy(1, 1),
    ));
    assert_eq!(checkpoint.clone().count(), 1);
}
