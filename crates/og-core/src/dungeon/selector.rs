//! Room selection
//!
//! Decides which templates a level uses, before anything is placed:
//! 1. One entrance, chosen uniformly
//! 2. Every template's `min_count`, in library order
//! 3. Weighted draws over templates still under their `max_count`
//!
//! The first slot is always an entrance. After that, entrance templates are
//! counted and drawn like any other template.

#[cfg(not(feature = "std"))]
use crate::compat::*;
#[cfg(feature = "std")]
use std::sync::Arc;

use log::debug;

use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::rng::LevelRng;
use crate::template::{RoomDefinition, RoomLibrary};
use crate::ENTRANCE_TYPE;

/// Sample the target room count uniformly from the configured range
pub fn sample_room_count(config: &GeneratorConfig, rng: &mut LevelRng) -> usize {
    rng.range_inclusive(config.min_rooms, config.max_rooms) as usize
}

/// Choose up to `count` templates, entrance first.
///
/// The result may be shorter than `count` once every template has reached its
/// maximum.
pub fn select_rooms(
    library: &RoomLibrary,
    count: usize,
    rng: &mut LevelRng,
) -> Result<Vec<Arc<RoomDefinition>>, GenerationError> {
    if library.is_empty() {
        return Err(GenerationError::EmptyLibrary);
    }

    let entrances = library.entrances();
    let Some(&entrance) = rng.choose(&entrances) else {
        return Err(GenerationError::NoEntrance {
            expected: ENTRANCE_TYPE.to_string(),
        });
    };

    let rooms = &library.rooms;
    let mut usage = vec![0u32; rooms.len()];
    let mut selected = Vec::with_capacity(count);

    usage[entrance] += 1;
    selected.push(entrance);

    // Minimum counts
    for (i, room) in rooms.iter().enumerate() {
        while usage[i] < room.min_count && selected.len() < count && !room.at_max(usage[i]) {
            usage[i] += 1;
            selected.push(i);
        }
    }

    // Weighted fill
    while selected.len() < count {
        let weights: Vec<f64> = rooms
            .iter()
            .zip(&usage)
            .map(|(room, &used)| {
                if room.at_max(used) {
                    0.0
                } else {
                    room.effective_weight()
                }
            })
            .collect();

        let Some(i) = rng.weighted_index(&weights) else {
            debug!(
                "selection stopped at {} of {} rooms: every template is at its maximum",
                selected.len(),
                count
            );
            break;
        };
        usage[i] += 1;
        selected.push(i);
    }

    Ok(selected.into_iter().map(|i| Arc::clone(&rooms[i])).collect())
}
