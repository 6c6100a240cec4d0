//! Outpost room templates
//!
//! Layouts are drawn as ASCII art, one string per row:
//!
//! | Symbol | Tile        |
//! |--------|-------------|
//! | `#`    | hull wall   |
//! | `.`    | deck        |
//! | `+`    | hatch (door); must sit on an edge, not a corner |
//! | ` `    | void        |
//! | letter | deck with a furnishing, see [`crate::furnishings`] |

/// Tile written for `#`
pub const WALL_TILE: &str = "hull_wall";
/// Tile written for `.`, furnishing letters and synthesized corridors
pub const FLOOR_TILE: &str = "deck";
/// Tile written for `+`
pub const DOOR_TILE: &str = "hatch";
/// Tile written for ` `
pub const VOID_TILE: &str = "void";

/// Flavor text for the narrative layer
#[derive(Debug, Clone, Copy)]
pub struct Narrative {
    pub title: &'static str,
    pub on_enter: &'static str,
    pub on_search: &'static str,
}

/// A room template in source form
#[derive(Debug, Clone, Copy)]
pub struct RoomArt {
    pub name: &'static str,
    pub room_type: &'static str,
    pub tags: &'static [&'static str],
    pub art: &'static [&'static str],
    pub spawn_weight: f64,
    pub min_count: u32,
    pub max_count: Option<u32>,
    pub narrative: Option<Narrative>,
}

impl RoomArt {
    const fn new(name: &'static str, room_type: &'static str, art: &'static [&'static str]) -> Self {
        Self {
            name,
            room_type,
            tags: &[],
            art,
            spawn_weight: 1.0,
            min_count: 0,
            max_count: None,
            narrative: None,
        }
    }

    const fn weight(mut self, spawn_weight: f64) -> Self {
        self.spawn_weight = spawn_weight;
        self
    }

    const fn counts(mut self, min_count: u32, max_count: Option<u32>) -> Self {
        self.min_count = min_count;
        self.max_count = max_count;
        self
    }

    const fn tags(mut self, tags: &'static [&'static str]) -> Self {
        self.tags = tags;
        self
    }

    const fn narrative(mut self, narrative: Narrative) -> Self {
        self.narrative = Some(narrative);
        self
    }
}

pub const AIRLOCK: RoomArt = RoomArt::new(
    "airlock",
    "entrance",
    &[
        "###+###",
        "#.....#",
        "#.c...#",
        "+.....+",
        "#.....#",
        "#...l.#",
        "###+###",
    ],
)
.counts(0, Some(1))
.narrative(Narrative {
    title: "Airlock",
    on_enter: "The outer door cycles shut behind you. Frost creeps along the hull seams.",
    on_search: "A maintenance log, last entry forty days ago.",
});

pub const DOCKING_RING: RoomArt = RoomArt::new(
    "docking_ring",
    "entrance",
    &[
        "####+####",
        "#.......#",
        "#.c...c.#",
        "+.......+",
        "#########",
    ],
)
.counts(0, Some(1))
.tags(&["dock"]);

pub const JUNCTION: RoomArt = RoomArt::new(
    "junction",
    "hub",
    &[
        "##+##",
        "#...#",
        "+...+",
        "#...#",
        "##+##",
    ],
)
.weight(1.5);

pub const HALLWAY_EW: RoomArt = RoomArt::new(
    "hallway_ew",
    "corridor",
    &[
        "#########",
        "+.......+",
        "#########",
    ],
);

pub const HALLWAY_NS: RoomArt = RoomArt::new(
    "hallway_ns",
    "corridor",
    &[
        "#+#",
        "#.#",
        "#.#",
        "#.#",
        "#.#",
        "#.#",
        "#+#",
    ],
);

pub const BEND: RoomArt = RoomArt::new(
    "bend",
    "corridor",
    &[
        "##+####",
        "#.....#",
        "#.....+",
        "#..####",
        "#..#   ",
        "#..#   ",
        "##+#   ",
    ],
)
.weight(0.75);

pub const CREW_QUARTERS: RoomArt = RoomArt::new(
    "crew_quarters",
    "chamber",
    &[
        "####+####",
        "#b.....b#",
        "#.......#",
        "+.......+",
        "#.......#",
        "#b..t..b#",
        "#########",
    ],
)
.tags(&["living"])
.counts(1, Some(2))
.narrative(Narrative {
    title: "Crew Quarters",
    on_enter: "Bunks line the walls, blankets still rumpled.",
    on_search: "Family photos, a half-written letter.",
});

pub const STORAGE_BAY: RoomArt = RoomArt::new(
    "storage_bay",
    "chamber",
    &[
        "########",
        "#r....r#",
        "+......#",
        "#......+",
        "#rr..rr#",
        "########",
    ],
)
.tags(&["loot"])
.weight(1.25);

pub const LAB: RoomArt = RoomArt::new(
    "lab",
    "chamber",
    &[
        "####+####",
        "#c.....c#",
        "#.......#",
        "#..ttt..+",
        "#.......#",
        "#s.....s#",
        "#########",
    ],
)
.tags(&["science"])
.counts(0, Some(2))
.narrative(Narrative {
    title: "Research Lab",
    on_enter: "Something moves inside one of the tanks.",
    on_search: "Sample labels in a hurried hand: DO NOT THAW.",
});

pub const MEDBAY: RoomArt = RoomArt::new(
    "medbay",
    "chamber",
    &[
        "###+###",
        "#m...m#",
        "#.....#",
        "+.....#",
        "#..d..#",
        "#######",
    ],
)
.tags(&["medical"])
.counts(0, Some(1));

pub const ARMORY: RoomArt = RoomArt::new(
    "armory",
    "chamber",
    &[
        "######",
        "#a..a#",
        "#....+",
        "#a..a#",
        "######",
    ],
)
.tags(&["loot", "secure"])
.weight(0.5)
.counts(0, Some(1));

pub const OBSERVATION: RoomArt = RoomArt::new(
    "observation",
    "chamber",
    &[
        "#########",
        "#.......#",
        "+.......+",
        "#...t...#",
        "#########",
    ],
)
.tags(&["window"])
.weight(0.75)
.narrative(Narrative {
    title: "Observation Deck",
    on_enter: "Beyond the glass, the ice field glitters under a dead sun.",
    on_search: "Someone scratched tally marks into the sill.",
});

pub const REACTOR: RoomArt = RoomArt::new(
    "reactor",
    "reactor",
    &[
        "#####+#####",
        "#.........#",
        "#..#####..#",
        "#..#g.g#..#",
        "+..#...#..+",
        "#..##.##..#",
        "#.........#",
        "#.........#",
        "#####+#####",
    ],
)
.tags(&["power"])
.counts(1, Some(1))
.narrative(Narrative {
    title: "Reactor Room",
    on_enter: "The hum is louder here, and the air tastes of ozone.",
    on_search: "The coolant gauge reads far into the red.",
});

/// Every built-in template, entrances first
pub const ROOMS: &[RoomArt] = &[
    AIRLOCK,
    DOCKING_RING,
    JUNCTION,
    HALLWAY_EW,
    HALLWAY_NS,
    BEND,
    CREW_QUARTERS,
    STORAGE_BAY,
    LAB,
    MEDBAY,
    ARMORY,
    OBSERVATION,
    REACTOR,
];

/// Find a built-in template by name
pub fn get_room(name: &str) -> Option<&'static RoomArt> {
    ROOMS.iter().find(|r| r.name == name)
}
