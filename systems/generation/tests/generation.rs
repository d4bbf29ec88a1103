use iveria_core::{ConfigError, GenerationConfig, Rect, TileGrid, TileKind, Vec2, MAX_EXTENT};
use iveria_system_generation::{
    generate_map, has_collisions, seed_rooms, separate_rooms, stamp_rooms, SeparationOutcome,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn room(x: i32, y: i32, width: i32, height: i32) -> Rect {
    Rect::new(Vec2::new(x, y), Vec2::new(width, height))
}

#[test]
fn same_seed_produces_identical_grids() {
    let config = GenerationConfig::default();
    let first = generate_map(&config, 0x5eed).expect("default config is valid");
    let second = generate_map(&config, 0x5eed).expect("default config is valid");

    assert_eq!(first, second, "generation diverged between runs");
}

#[test]
fn generated_grid_matches_configured_dimensions() {
    let config = GenerationConfig {
        width: 90,
        height: 30,
        ..GenerationConfig::default()
    };
    let map = generate_map(&config, 17).expect("config is valid");

    assert_eq!(map.grid().width(), 90);
    assert_eq!(map.grid().height(), 30);
    assert_eq!(map.grid().cells().len(), 90 * 30);
    assert!(map.room_count() >= 5 && map.room_count() < 45);
}

#[test]
fn generated_map_carves_some_ground() {
    let map = generate_map(&GenerationConfig::default(), 42).expect("default config is valid");
    assert!(map
        .grid()
        .cells()
        .iter()
        .any(|cell| *cell == TileKind::Ground));
}

#[test]
fn invalid_config_is_reported() {
    let config = GenerationConfig {
        height: 0,
        ..GenerationConfig::default()
    };
    assert_eq!(
        generate_map(&config, 1),
        Err(ConfigError::InvalidDimensions {
            width: 160,
            height: 0
        })
    );
}

#[test]
fn oversized_room_settings_are_reported_instead_of_overflowing() {
    let config = GenerationConfig {
        room_size: 1..i32::MAX,
        width_bias: i32::MAX,
        ..GenerationConfig::default()
    };
    assert_eq!(
        generate_map(&config, 3),
        Err(ConfigError::OversizedRooms {
            size_end: i32::MAX,
            width_bias: i32::MAX,
        })
    );
}

#[test]
fn largest_accepted_room_settings_generate() {
    let config = GenerationConfig {
        width: 64,
        height: 32,
        room_count: 2..3,
        room_size: 3..MAX_EXTENT as i32,
        width_bias: MAX_EXTENT as i32,
        ..GenerationConfig::default()
    };
    let map = generate_map(&config, 3).expect("config is valid");
    assert_eq!(map.grid().cells().len(), 64 * 32);
}

#[test]
fn single_room_is_stamped_exactly() {
    let mut rooms = vec![room(70, 20, 8, 6)];
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let report = separate_rooms(&mut rooms, 10_000, &mut rng);
    assert_eq!(report.outcome(), SeparationOutcome::Converged);
    assert_eq!(rooms, vec![room(70, 20, 8, 6)]);

    let mut grid = TileGrid::filled(160, 48, TileKind::Empty);
    stamp_rooms(&mut grid, &rooms);

    for y in 0..48 {
        for x in 0..160 {
            let expected = if (70..78).contains(&x) && (20..26).contains(&y) {
                TileKind::Ground
            } else {
                TileKind::Wall
            };
            assert_eq!(grid.get(Vec2::new(x, y)), Some(expected), "cell ({x}, {y})");
        }
    }
}

#[test]
fn rooms_sharing_rows_slip_past_the_corner_test() {
    let layout = vec![room(70, 20, 5, 5), room(72, 20, 5, 5)];
    let mut rooms = layout.clone();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let report = separate_rooms(&mut rooms, 10_000, &mut rng);

    // No padded corner lies strictly inside the other padded room.
    assert!(!has_collisions(&layout));
    assert!(report.converged());
    assert_eq!(report.passes(), 1);
    assert_eq!(rooms, layout);

    let mut grid = TileGrid::filled(160, 48, TileKind::Wall);
    stamp_rooms(&mut grid, &rooms);
    let ground = grid
        .cells()
        .iter()
        .filter(|cell| **cell == TileKind::Ground)
        .count();
    assert_eq!(ground, 7 * 5, "the two rooms merge into one");
}

#[test]
fn offset_rooms_are_pushed_apart() {
    let mut rooms = vec![room(70, 20, 5, 5), room(72, 21, 5, 5)];
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let report = separate_rooms(&mut rooms, 10_000, &mut rng);

    assert!(report.converged());
    assert!(report.passes() > 1);
    assert!(!has_collisions(&rooms));
}

#[test]
fn default_settings_can_end_without_converging() {
    let config = GenerationConfig::default();
    let map = generate_map(&config, 0).expect("default config is valid");

    assert!(!map.report().converged());
    assert_ne!(map.report().outcome(), SeparationOutcome::Converged);
    assert!(map.report().passes() <= config.max_separation_passes);
    assert!(map
        .grid()
        .cells()
        .iter()
        .any(|cell| *cell == TileKind::Ground));
}

#[test]
fn pass_limit_returns_best_effort_layout() {
    let mut rooms = vec![room(10, 10, 6, 6); 12];
    let mut rng = ChaCha8Rng::seed_from_u64(8);

    let report = separate_rooms(&mut rooms, 2, &mut rng);

    assert_eq!(report.outcome(), SeparationOutcome::PassLimitReached);
    assert_eq!(report.passes(), 2);
    assert_eq!(rooms.len(), 12);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn every_cell_is_wall_or_ground(seed in any::<u64>()) {
        let map = generate_map(&GenerationConfig::default(), seed).expect("default config is valid");
        prop_assert!(map
            .grid()
            .cells()
            .iter()
            .all(|cell| matches!(cell, TileKind::Wall | TileKind::Ground)));
    }

    #[test]
    fn room_pairs_always_separate_with_a_margin(seed in any::<u64>()) {
        let config = GenerationConfig {
            room_count: 2..3,
            ..GenerationConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut rooms = seed_rooms(&config, &mut rng).expect("config is valid");

        let report = separate_rooms(&mut rooms, config.max_separation_passes, &mut rng);

        prop_assert!(report.converged());
        prop_assert!(!rooms[0].expand(1).intersects(&rooms[1].expand(1)));
        prop_assert!(!rooms[1].expand(1).intersects(&rooms[0].expand(1)));
    }

    #[test]
    fn outcome_matches_the_final_layout(seed in any::<u64>()) {
        let config = GenerationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut rooms = seed_rooms(&config, &mut rng).expect("default config is valid");

        let report = separate_rooms(&mut rooms, 500, &mut rng);

        match report.outcome() {
            SeparationOutcome::Converged => prop_assert!(!has_collisions(&rooms)),
            SeparationOutcome::Oscillating => prop_assert!(has_collisions(&rooms)),
            SeparationOutcome::PassLimitReached => prop_assert_eq!(report.passes(), 500),
        }
    }

    #[test]
    fn stamping_stays_inside_the_grid(
        x in -40i32..200,
        y in -40i32..80,
        width in 1i32..60,
        height in 1i32..60,
    ) {
        let mut grid = TileGrid::filled(160, 48, TileKind::Wall);
        stamp_rooms(&mut grid, &[room(x, y, width, height)]);

        prop_assert_eq!(grid.cells().len(), 160 * 48);
        let ground = grid.cells().iter().filter(|cell| **cell == TileKind::Ground).count();
        let columns = (x + width).min(160) - x.max(0);
        let rows = (y + height).min(48) - y.max(0);
        let expected = usize::try_from(columns.max(0) * rows.max(0)).unwrap_or(0);
        prop_assert_eq!(ground, expected);
    }
}
