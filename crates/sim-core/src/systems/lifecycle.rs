//! Lifecycle Pass
//!
//! Post-behavior population maintenance: merge the frame's staged births
//! into the live collection, then prune everyone whose energy or age has
//! crossed a death threshold.

use bevy_ecs::prelude::*;

use crate::components::population::{PendingBirths, Population};
use crate::components::world::WorldState;
use crate::events::{FrameEvents, SimEvent};

/// System: move staged newborns into the live collection. Runs after the
/// behavior and draw passes, so newborns first act and render next frame.
pub fn merge_births(mut population: ResMut<Population>, mut births: ResMut<PendingBirths>) {
    population.people.append(&mut births.staged);
}

/// System: remove every person with `energy < 0` or `age > 100`, emitting a
/// death event per removal.
pub fn prune_dead(
    state: Res<WorldState>,
    mut population: ResMut<Population>,
    mut events: ResMut<FrameEvents>,
) {
    let frame = state.current_frame;
    let before = population.len();
    let mut survivors = Vec::with_capacity(before);
    for person in population.people.drain(..) {
        match person.death_cause() {
            Some(cause) => events.push(SimEvent::death(frame, person.id, cause)),
            None => survivors.push(person),
        }
    }
    population.people = survivors;

    if before > 0 && population.is_empty() {
        tracing::debug!(frame, "population extinct");
    }
}
