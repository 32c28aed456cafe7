use sg_core::generation::{add_exit, trim_edges};
use sg_core::{
    BOSS_LEVEL1, Coord, ExtraPasses, GameRng, GenerationError, GeneratorOptions, LevelGenerator,
    TerrainMap, TerrainType, Tile, create_terrain_map, grid_size_for_level, table_key_count,
};

fn outer_ring_is_empty(map: &TerrainMap) -> bool {
    let (w, h) = (map.width(), map.height());
    map.coords()
        .filter(|c| c.is_edge(w, h))
        .all(|c| map.terrain(c) == Some(TerrainType::Empty))
}

#[test]
fn test_first_level_end_to_end() {
    let mut rng = GameRng::new(2024);
    let map = create_terrain_map((15, 15), 1, &GeneratorOptions::default(), &mut rng).unwrap();

    assert_eq!((map.width(), map.height()), (15, 15));
    assert_eq!(map.count_of(TerrainType::Exit), 1);
    assert!(map.count_of(TerrainType::Key) >= 1);
    assert!(outer_ring_is_empty(&map));
    assert_eq!(map.to_ascii().lines().count(), 15);
}

#[test]
fn test_generator_over_many_levels() {
    let mut generator = LevelGenerator::with_seed(7);
    for level in 1..=30 {
        let map = generator.generate(level).unwrap();
        assert_eq!((map.width(), map.height()), grid_size_for_level(level));
        assert_eq!(map.count_of(TerrainType::Exit), 1, "level {}", level);
        assert!(map.count_of(TerrainType::LockedDoor) >= 1, "level {}", level);
        assert!(outer_ring_is_empty(&map), "level {}", level);
        for key in map.positions_of(TerrainType::Key) {
            assert!(map.is(key, 0, 1, TerrainType::Wall), "level {}", level);
        }
    }
}

#[test]
fn test_early_levels_place_table_key_count() {
    for seed in 0..20 {
        let mut generator = LevelGenerator::with_seed(seed);
        for level in 1..=BOSS_LEVEL1 {
            let map = generator.generate(level).unwrap();
            let keys = map.positions_of(TerrainType::Key);
            assert_eq!(
                Some(keys.len() as u32),
                table_key_count(level),
                "seed {} level {}",
                seed,
                level
            );
            for key in keys {
                assert!(map.is(key, 0, 1, TerrainType::Wall), "seed {} level {}", seed, level);
                assert!(!map.is(key, 0, -1, TerrainType::BigDoor), "seed {} level {}", seed, level);
            }
        }
    }
}

#[test]
fn test_keys_match_locked_doors_after_last_boss() {
    let mut generator = LevelGenerator::with_seed(99);
    for level in 23..=30 {
        let map = generator.generate(level).unwrap();
        assert_eq!(
            map.count_of(TerrainType::Key),
            map.count_of(TerrainType::LockedDoor),
            "level {}",
            level
        );
    }
}

#[test]
fn test_seeded_runs_match() {
    let options = GeneratorOptions {
        extra_passes: ExtraPasses::all(),
        ..GeneratorOptions::default()
    };
    let first = LevelGenerator::new(options, GameRng::new(31337)).generate(5).unwrap();
    let second = LevelGenerator::new(options, GameRng::new(31337)).generate(5).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_minimum_grid() {
    let mut rng = GameRng::new(1);
    let options = GeneratorOptions::default();
    assert!(matches!(
        create_terrain_map((9, 7), 1, &options, &mut rng),
        Err(GenerationError::GridTooSmall { min_width: 11, .. })
    ));
    assert!(create_terrain_map((11, 7), 1, &options, &mut rng).is_ok());
}

#[test]
fn test_passes_compose_on_hand_built_map() {
    let mut map = TerrainMap::with_size(11, 7);
    for c in map.coords() {
        if !c.is_edge(11, 7) {
            map.set(c, Tile::empty());
        }
    }
    let mut rng = GameRng::new(4);
    let shaft = add_exit(&mut map, 1, &mut rng).unwrap();
    assert_eq!(shaft, 1);

    // the exit anchors are backed by the outer ring and never erode
    trim_edges(&mut map, 20);
    let exit = map.positions_of(TerrainType::Exit)[0];
    assert_eq!(map.terrain(Coord::new(exit.x, 1)), Some(TerrainType::Wall));
    assert_eq!(map.terrain(Coord::new(exit.x, 3)), Some(TerrainType::Wall));
}
