//! Furnishing placement
//!
//! Every furnishing a surviving room's template lists becomes one placed
//! instance at the room's offset. Furnishing data is optional, so names the
//! lookup cannot resolve are dropped rather than reported.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use hashbrown::{HashMap, HashSet};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::template::{DEFAULT_STATE, FurnishingLookup};

use super::room::PlacedRoom;

/// A furnishing instance in world coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedFurnishing {
    /// Level-unique id, e.g. `console_2`, unless the template named one
    pub id: String,
    /// Furnishing type name
    pub furnishing: String,
    /// Id of the room it stands in
    pub room: u32,
    pub x: i32,
    pub y: i32,
    pub state: String,
    pub blocks_movement: bool,
}

/// Place the furnishings of every room, in room order then template order.
///
/// Entries naming a furnishing the lookup does not know are skipped.
/// Generated ids count per furnishing type starting at 1. Explicit ids from
/// the template are kept unless an earlier instance already took them, in
/// which case they get a numeric suffix.
pub fn place_furnishings<L: FurnishingLookup + ?Sized>(
    rooms: &[PlacedRoom],
    lookup: &L,
) -> Vec<PlacedFurnishing> {
    let mut counters: HashMap<&str, u32> = HashMap::new();
    let mut taken: HashSet<String> = HashSet::new();
    let mut placed = Vec::new();

    for room in rooms {
        for item in &room.definition.furnishings {
            let Some(definition) = lookup.furnishing(&item.furnishing) else {
                debug!(
                    "room {} lists unknown furnishing '{}', skipping",
                    room.name(),
                    item.furnishing
                );
                continue;
            };

            let id = match &item.id {
                Some(id) if !taken.contains(id) => id.clone(),
                Some(id) => (2..)
                    .map(|n| format!("{id}_{n}"))
                    .find(|candidate| !taken.contains(candidate))
                    .unwrap_or_default(),
                None => {
                    let n = counters.entry(item.furnishing.as_str()).or_insert(0);
                    loop {
                        *n += 1;
                        let candidate = format!("{}_{}", item.furnishing, n);
                        if !taken.contains(&candidate) {
                            break candidate;
                        }
                    }
                }
            };
            taken.insert(id.clone());

            let state = item
                .state
                .clone()
                .or_else(|| definition.default_state.clone())
                .unwrap_or_else(|| DEFAULT_STATE.to_string());

            placed.push(PlacedFurnishing {
                id,
                furnishing: item.furnishing.clone(),
                room: room.id,
                x: room.x + item.x as i32,
                y: room.y + item.y as i32,
                state,
                blocks_movement: definition.blocks_movement,
            });
        }
    }

    placed
}
