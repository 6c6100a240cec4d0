mod common;

use og_core::dungeon::assembly::content_bounds;
use og_core::dungeon::connectivity::flood_fill;
use og_core::{GeneratedLevel, Generator, GeneratorConfig, PADDING, TileKind};
use proptest::prelude::*;

use common::{station_furnishings, station_library};

fn generate(config: GeneratorConfig) -> GeneratedLevel {
    Generator::with_furnishings(station_library(), station_furnishings(), config)
        .unwrap()
        .generate()
        .unwrap()
}

fn config_strategy() -> impl Strategy<Value = GeneratorConfig> {
    (1u64..1_000_000, 1u32..8, 0u32..8, any::<bool>()).prop_map(|(seed, min, extra, connect_all)| {
        let mut config = GeneratorConfig::new(min, min + extra, seed);
        config.connect_all = connect_all;
        config
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_rooms_and_corridors_never_overlap(config in config_strategy()) {
        let level = generate(config);
        for (i, a) in level.rooms.iter().enumerate() {
            for b in &level.rooms[i + 1..] {
                prop_assert!(a.footprint().all(|(x, y)| !b.contains(x, y)),
                    "rooms {} and {} overlap", a.id, b.id);
            }
        }
        for corridor in &level.corridors {
            for &(x, y) in &corridor.tiles {
                prop_assert!(level.rooms.iter().all(|r| !r.contains(x, y)));
            }
        }
        let mut tiles: Vec<(i32, i32)> =
            level.corridors.iter().flat_map(|c| c.tiles.iter().copied()).collect();
        let total = tiles.len();
        tiles.sort_unstable();
        tiles.dedup();
        prop_assert_eq!(tiles.len(), total, "corridors share a tile");
    }

    #[test]
    fn prop_every_room_reachable(config in config_strategy()) {
        let level = generate(config);
        let reach = flood_fill(&level.grid, level.spawn_tile);
        for room in &level.rooms {
            prop_assert!(
                room.footprint().any(|(x, y)| reach.contains(x, y)),
                "room {} ({}) is cut off", room.id, room.name()
            );
        }
    }

    #[test]
    fn prop_no_floor_borders_void(config in config_strategy()) {
        let level = generate(config);
        for (x, y) in level.grid.positions_of(TileKind::Floor) {
            prop_assert!(!level.grid.touches_void(x, y), "floor at ({}, {}) borders void", x, y);
        }
    }

    #[test]
    fn prop_same_seed_same_level(config in config_strategy()) {
        let a = generate(config.clone());
        let b = generate(config);
        prop_assert_eq!(&a.grid, &b.grid);
        prop_assert_eq!(&a.rooms, &b.rooms);
        prop_assert_eq!(&a.furnishings, &b.furnishings);
    }

    #[test]
    fn prop_content_is_padded(config in config_strategy()) {
        let (min_w, min_h) = (config.level_width as usize, config.level_height as usize);
        let level = generate(config);
        prop_assert!(level.width >= min_w && level.height >= min_h);

        // Grid is exactly the padded content or the configured size, whichever is larger
        let bounds = content_bounds(&level.rooms, &level.corridors).unwrap();
        prop_assert!(bounds.min_x >= PADDING && bounds.min_y >= PADDING);
        let padded_w = (bounds.width() + 2 * PADDING) as usize;
        let padded_h = (bounds.height() + 2 * PADDING) as usize;
        if level.report.pruned_rooms.is_empty() && level.report.pruned_corridors == 0 {
            prop_assert_eq!((bounds.min_x, bounds.min_y), (PADDING, PADDING));
            prop_assert_eq!(level.width, padded_w.max(min_w));
            prop_assert_eq!(level.height, padded_h.max(min_h));
        } else {
            prop_assert!(level.width >= padded_w.max(min_w));
            prop_assert!(level.height >= padded_h.max(min_h));
        }
        prop_assert_eq!(level.grid.width(), level.width);
        prop_assert_eq!(level.grid.height(), level.height);

        let (w, h) = (level.width as i32, level.height as i32);
        let inside = |x: i32, y: i32| x >= PADDING && y >= PADDING && x < w - PADDING && y < h - PADDING;
        for room in &level.rooms {
            prop_assert!(room.footprint().all(|(x, y)| inside(x, y)));
        }
        for corridor in &level.corridors {
            prop_assert!(corridor.tiles.iter().all(|&(x, y)| inside(x, y)));
        }
        // Synthesized walls may reach one cell into the padding, never the edge
        for kind in [TileKind::Floor, TileKind::Wall] {
            for (x, y) in level.grid.positions_of(kind) {
                prop_assert!(x > 0 && y > 0 && x < w - 1 && y < h - 1);
            }
        }
    }

    #[test]
    fn prop_counts_respected(config in config_strategy()) {
        let max_rooms = config.max_rooms as usize;
        let level = generate(config);
        prop_assert!(level.rooms.len() <= max_rooms);
        prop_assert_eq!(level.rooms[0].name(), "dock");
        for unique in ["vault", "reactor"] {
            prop_assert!(level.rooms.iter().filter(|r| r.name() == unique).count() <= 1);
        }
        prop_assert_eq!(level.rooms.iter().filter(|r| r.definition.is_entrance()).count(), 1);
    }

    #[test]
    fn prop_furnishing_ids_unique(config in config_strategy()) {
        let level = generate(config);
        let mut ids: Vec<&str> = level.furnishings.iter().map(|f| f.id.as_str()).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        prop_assert_eq!(before, ids.len());
    }
}
