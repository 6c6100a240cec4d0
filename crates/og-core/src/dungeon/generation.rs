//! Level generation
//!
//! Runs the pipeline end to end: select templates, place them door-to-door,
//! rasterize, prune what the entrance cannot reach, then furnish.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use log::{debug, info};

use crate::PADDING;
use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::rng::LevelRng;
use crate::template::{FurnishingLibrary, FurnishingLookup, RoomDefinition, RoomLibrary};

use super::assembly::{assemble, normalize};
use super::connectivity::{flood_fill, flood_start, prune_unreachable};
use super::corridor::link_facing_doors;
use super::furnish::place_furnishings;
use super::level::{GeneratedLevel, GenerationReport, tile_center_px};
use super::placement::place_rooms;
use super::selector::{sample_room_count, select_rooms};

/// Builds levels from a room library.
///
/// The RNG is seeded once, at construction; successive `generate()` calls
/// continue the same stream, so two generators built with the same non-zero
/// seed produce the same sequence of levels.
#[derive(Debug, Clone)]
pub struct Generator<L = FurnishingLibrary> {
    library: RoomLibrary,
    furnishings: L,
    config: GeneratorConfig,
    rng: LevelRng,
}

impl Generator<FurnishingLibrary> {
    /// Generator without furnishing data; templates' furnishings are skipped
    pub fn new(library: RoomLibrary, config: GeneratorConfig) -> Result<Self, GenerationError> {
        Self::with_furnishings(library, FurnishingLibrary::new(), config)
    }
}

impl<L: FurnishingLookup> Generator<L> {
    /// Validate the config and every template, then seed the RNG.
    ///
    /// An empty library or one without an entrance is accepted here and
    /// reported by `generate()`.
    pub fn with_furnishings(
        library: RoomLibrary,
        furnishings: L,
        config: GeneratorConfig,
    ) -> Result<Self, GenerationError> {
        config.validate()?;
        library.validate()?;
        for room in library.rooms.iter().filter(|r| r.is_entrance()) {
            if !has_floor(&library, room) {
                return Err(GenerationError::InvalidTemplate {
                    name: room.name.clone(),
                    reason: "entrance has no walkable tile".to_string(),
                });
            }
        }

        let rng = LevelRng::from_config_seed(config.seed);
        debug!(
            "generator ready: {} templates from '{}', seed {}",
            library.len(),
            library.name,
            rng.seed()
        );
        Ok(Self {
            library,
            furnishings,
            config,
            rng,
        })
    }

    pub fn library(&self) -> &RoomLibrary {
        &self.library
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Seed the RNG is running on
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Restart the RNG stream; 0 derives a seed from the clock
    pub fn reseed(&mut self, seed: u64) {
        self.rng = LevelRng::from_config_seed(seed);
    }

    /// Generate one level.
    ///
    /// Fails only on configuration problems, or when `strict_room_count` is set
    /// and fewer than `min_rooms` rooms survive. Rooms that could not be placed
    /// otherwise only show up in the level's report.
    pub fn generate(&mut self) -> Result<GeneratedLevel, GenerationError> {
        let requested = sample_room_count(&self.config, &mut self.rng);
        let selection = select_rooms(&self.library, requested, &mut self.rng)?;
        let mut report = GenerationReport {
            seed: self.rng.seed(),
            requested_rooms: requested,
            selected: selection.iter().map(|r| r.name.clone()).collect(),
            ..GenerationReport::default()
        };

        let Some(entrance) = selection.first() else {
            return Err(GenerationError::EmptyLibrary);
        };
        let origin = entrance_origin(&self.config, entrance);

        // Placement
        let mut outcome = place_rooms(&selection, origin, self.config.allow_overlap, &mut self.rng);
        if self.config.connect_all {
            let extra = link_facing_doors(&mut outcome.rooms, &mut outcome.occupancy);
            report.extra_corridors = extra.len();
            outcome.corridors.extend(extra);
        }
        report.deficiencies = outcome.deficiencies;
        report.strategies = outcome.strategies;

        // Assembly
        let mut rooms = outcome.rooms;
        let mut corridors = outcome.corridors;
        let ((content_w, content_h), _) = normalize(&mut rooms, &mut corridors);
        let width = content_w.max(self.config.level_width as usize);
        let height = content_h.max(self.config.level_height as usize);
        let mut grid = assemble(&self.library, &rooms, &corridors, width, height);

        // Connectivity
        let spawn_tile = rooms
            .first()
            .and_then(|room| flood_start(&grid, room))
            .ok_or_else(|| GenerationError::InvalidTemplate {
                name: entrance.name.clone(),
                reason: "entrance has no walkable tile".to_string(),
            })?;
        let reach = flood_fill(&grid, spawn_tile);
        let pruned = prune_unreachable(
            &mut grid,
            &reach,
            rooms,
            corridors,
            &self.library.default_wall_tile,
        );
        report.pruned_rooms = pruned.removed_rooms;
        report.pruned_corridors = pruned.removed_corridors;

        if self.config.strict_room_count && pruned.rooms.len() < self.config.min_rooms as usize {
            return Err(GenerationError::TooFewRooms {
                placed: pruned.rooms.len(),
                required: self.config.min_rooms as usize,
            });
        }

        let furnishings = place_furnishings(&pruned.rooms, &self.furnishings);

        info!(
            "generated {}x{} level: {}/{} rooms, {} corridors, {} furnishings, seed {}",
            width,
            height,
            pruned.rooms.len(),
            requested,
            pruned.corridors.len(),
            furnishings.len(),
            report.seed
        );

        Ok(GeneratedLevel {
            width,
            height,
            tile_size: self.library.tile_size,
            default_floor_tile: self.library.default_floor_tile.clone(),
            grid,
            rooms: pruned.rooms,
            corridors: pruned.corridors,
            furnishings,
            spawn: tile_center_px(spawn_tile, self.library.tile_size),
            spawn_tile,
            report,
        })
    }
}

fn has_floor(library: &RoomLibrary, room: &RoomDefinition) -> bool {
    room.tiles
        .iter()
        .flatten()
        .any(|name| library.classify(name).is_floor())
}

/// Entrance top-left that centers it in the configured level
fn entrance_origin(config: &GeneratorConfig, entrance: &RoomDefinition) -> (i32, i32) {
    let x = (config.level_width as i32 - entrance.width as i32) / 2;
    let y = (config.level_height as i32 - entrance.height as i32) / 2;
    (x.max(PADDING), y.max(PADDING))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::TileKind;
    use crate::template::{Direction, FurnishingDefinition, FurnishingPlacement};

    /// Walled square room with a door in the middle of each listed side
    fn square(name: &str, room_type: &str, size: u32, doors: &[Direction]) -> RoomDefinition {
        let s = size as usize;
        let mut tiles: Vec<Vec<String>> = (0..s)
            .map(|y| {
                (0..s)
                    .map(|x| {
                        if x == 0 || y == 0 || x == s - 1 || y == s - 1 {
                            "wall".to_string()
                        } else {
                            "floor".to_string()
                        }
                    })
                    .collect()
            })
            .collect();
        let mid = size / 2;
        let doors: Vec<(u32, u32, Direction)> = doors
            .iter()
            .map(|&d| match d {
                Direction::North => (mid, 0, d),
                Direction::South => (mid, size - 1, d),
                Direction::East => (size - 1, mid, d),
                Direction::West => (0, mid, d),
            })
            .collect();
        for &(x, y, _) in &doors {
            tiles[y as usize][x as usize] = "door".to_string();
        }
        doors
            .into_iter()
            .fold(RoomDefinition::new(name, room_type, tiles), |def, (x, y, d)| {
                def.with_connection(x, y, d)
            })
    }

    fn library() -> RoomLibrary {
        RoomLibrary::new("test")
            .with_room(square("dock", "entrance", 5, &Direction::ALL))
            .with_room(square("bay", "chamber", 5, &Direction::ALL))
            .with_room(square("hall", "corridor", 7, &[Direction::East, Direction::West]))
    }

    #[test]
    fn test_generates_connected_level() {
        let config = GeneratorConfig::new(3, 6, 12345);
        let mut generator = Generator::new(library(), config).unwrap();
        let level = generator.generate().unwrap();

        assert_eq!(level.rooms[0].name(), "dock");
        assert!(level.rooms.len() >= 2);
        assert!(level.width >= 64 && level.height >= 48);
        assert_eq!(level.grid.width(), level.width);
        assert!(level.is_walkable(level.spawn_tile.0, level.spawn_tile.1));
        assert_eq!(level.report.seed, 12345);
        assert_eq!(level.report.selected[0], "dock");

        let reach = flood_fill(&level.grid, level.spawn_tile);
        for room in &level.rooms {
            assert!(room.footprint().any(|(x, y)| reach.contains(x, y)));
        }
    }

    #[test]
    fn test_same_seed_same_level() {
        let config = GeneratorConfig::new(4, 8, 777);
        let a = Generator::new(library(), config.clone()).unwrap().generate().unwrap();
        let b = Generator::new(library(), config).unwrap().generate().unwrap();
        assert_eq!(a.grid, b.grid);
        assert_eq!(a.rooms, b.rooms);
        assert_eq!(a.spawn, b.spawn);
    }

    #[test]
    fn test_reseed_restarts_stream() {
        let mut generator = Generator::new(library(), GeneratorConfig::new(4, 8, 5)).unwrap();
        let first = generator.generate().unwrap();
        generator.reseed(5);
        let again = generator.generate().unwrap();
        assert_eq!(first.grid, again.grid);
    }

    #[test]
    fn test_empty_library_fails() {
        let mut generator =
            Generator::new(RoomLibrary::new("empty"), GeneratorConfig::default()).unwrap();
        let err = generator.generate().unwrap_err();
        assert_eq!(err, GenerationError::EmptyLibrary);
        assert!(err.is_configuration());
    }

    #[test]
    fn test_missing_entrance_fails() {
        let library = RoomLibrary::new("test").with_room(square("bay", "chamber", 5, &[]));
        let mut generator = Generator::new(library, GeneratorConfig::new(1, 3, 1)).unwrap();
        assert!(matches!(
            generator.generate(),
            Err(GenerationError::NoEntrance { .. })
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(matches!(
            Generator::new(library(), GeneratorConfig::new(5, 2, 1)),
            Err(GenerationError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_entrance_without_floor_rejected() {
        let library = RoomLibrary::new("test")
            .with_room(RoomDefinition::filled("solid", "entrance", 3, 3, "wall"));
        assert!(matches!(
            Generator::new(library, GeneratorConfig::default()),
            Err(GenerationError::InvalidTemplate { .. })
        ));
    }

    #[test]
    fn test_single_entrance_only() {
        let library = RoomLibrary::new("test").with_room(square("dock", "entrance", 5, &[]));
        let level = Generator::new(library, GeneratorConfig::new(1, 1, 3))
            .unwrap()
            .generate()
            .unwrap();
        assert_eq!(level.rooms.len(), 1);
        assert!(level.corridors.is_empty());
        assert_eq!(level.spawn_tile, (level.rooms[0].x + 2, level.rooms[0].y + 2));
        assert_eq!(level.spawn, tile_center_px(level.spawn_tile, 16));
    }

    #[test]
    fn test_strict_room_count() {
        // Doorless chambers can never be attached
        let library = RoomLibrary::new("test")
            .with_room(square("dock", "entrance", 5, &Direction::ALL).with_counts(0, Some(1)))
            .with_room(square("sealed", "chamber", 5, &[]));
        let mut config = GeneratorConfig::new(3, 3, 9);

        let level = Generator::new(library.clone(), config.clone())
            .unwrap()
            .generate()
            .unwrap();
        assert_eq!(level.rooms.len(), 1);
        assert_eq!(level.report.deficiencies.len(), 2);

        config.strict_room_count = true;
        let err = Generator::new(library, config).unwrap().generate().unwrap_err();
        assert_eq!(
            err,
            GenerationError::TooFewRooms {
                placed: 1,
                required: 3
            }
        );
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_furnishings_resolved() {
        let dock = square("dock", "entrance", 5, &[])
            .with_furnishing(FurnishingPlacement::new("console", 1, 1))
            .with_furnishing(FurnishingPlacement::new("ghost", 2, 2));
        let library = RoomLibrary::new("test").with_room(dock);
        let furniture = FurnishingLibrary::new().with(FurnishingDefinition::new("console"));
        let level = Generator::with_furnishings(library, furniture, GeneratorConfig::new(1, 1, 2))
            .unwrap()
            .generate()
            .unwrap();
        assert_eq!(level.furnishings.len(), 1);
        let console = &level.furnishings[0];
        assert_eq!(console.id, "console_1");
        assert_eq!((console.x, console.y), (level.rooms[0].x + 1, level.rooms[0].y + 1));
        assert_eq!(level.kind_at(console.x, console.y), TileKind::Floor);
    }

    #[test]
    fn test_entrance_origin_centers() {
        let config = GeneratorConfig::default();
        let dock = square("dock", "entrance", 5, &[]);
        assert_eq!(entrance_origin(&config, &dock), (29, 21));

        let tiny = GeneratorConfig {
            level_width: 1,
            level_height: 1,
            ..GeneratorConfig::default()
        };
        assert_eq!(entrance_origin(&tiny, &dock), (PADDING, PADDING));
    }
}
