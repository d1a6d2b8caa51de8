//! Behavior Pass
//!
//! The per-frame drive evaluation for every person. Nothing is persisted
//! between frames: each person re-decides its action from its current drive
//! values, acts on it (heading update plus a possible eat/rest/reproduce
//! trigger), then takes one movement step and ages.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::components::entity::{vitals, Food, Person, Point, Shelter};
use crate::components::population::{FoodRegistry, PendingBirths, Population, ShelterRegistry};
use crate::components::world::WorldState;
use crate::config::SimConfig;
use crate::error::{RegistryKind, SimError, SimFault};
use crate::events::{EventKind, FrameEvents, SimEvent};
use crate::geometry::{bearing, distance};
use crate::SimRng;

/// Drive thresholds and interaction constants
pub mod thresholds {
    /// Sleepiness at or above which shelter-seeking preempts everything else
    pub const SLEEPY: f32 = 80.0;
    /// Energy at or below which a person must find food
    pub const HUNGRY: f32 = 10.0;
    /// Exclusive lower bound of the mate-seeking age window
    pub const MATING_AGE_MIN: f32 = 20.0;
    /// Exclusive upper bound of the mate-seeking age window
    pub const MATING_AGE_MAX: f32 = 50.0;
    /// Within this distance a person can eat, rest, or mate
    pub const INTERACT_RANGE: f32 = 10.0;
    /// Offspring appended by one successful mating encounter
    pub const OFFSPRING_PER_MATING: usize = 2;
}

/// The action a person takes this frame. Mutually exclusive; the first
/// matching branch wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drive {
    SeekShelter,
    SeekFood,
    SeekMate,
    Wander,
}

impl Drive {
    /// Re-decide the action from current drives. Sleep debt preempts
    /// hunger, hunger preempts the mating urge, and a person of
    /// non-mating age with its needs covered wanders.
    pub fn select(person: &Person) -> Self {
        if person.sleepiness >= thresholds::SLEEPY {
            Drive::SeekShelter
        } else if person.energy <= thresholds::HUNGRY {
            Drive::SeekFood
        } else if person.age > thresholds::MATING_AGE_MIN && person.age < thresholds::MATING_AGE_MAX
        {
            Drive::SeekMate
        } else {
            Drive::Wander
        }
    }
}

/// Anything with a fixed lookup position.
pub trait Positioned {
    fn position(&self) -> Point;
}

impl Positioned for Food {
    fn position(&self) -> Point {
        self.position
    }
}

impl Positioned for Shelter {
    fn position(&self) -> Point {
        self.position
    }
}

/// Brute-force nearest-neighbor search. Ties break toward the earliest
/// candidate; returns `None` only for an empty slice.
pub fn nearest<E: Positioned>(from: Point, candidates: &[E]) -> Option<&E> {
    let mut best: Option<(&E, f32)> = None;
    for candidate in candidates {
        let d = distance(from, candidate.position());
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((candidate, d));
        }
    }
    best.map(|(candidate, _)| candidate)
}

/// System: evaluate and act every person alive at frame start.
///
/// The pass iterates the index range taken at frame start; births stage
/// into [`PendingBirths`] and merge only after the pass, so a newborn is
/// never stepped in its birth frame. An empty food or shelter registry at a
/// seek step raises a fault that aborts the run.
pub fn live_people(
    config: Res<SimConfig>,
    state: Res<WorldState>,
    food: Res<FoodRegistry>,
    shelter: Res<ShelterRegistry>,
    mut population: ResMut<Population>,
    mut births: ResMut<PendingBirths>,
    mut events: ResMut<FrameEvents>,
    mut rng: ResMut<SimRng>,
    mut fault: ResMut<SimFault>,
) {
    let width = config.arena_width();
    let height = config.arena_height();
    let frame = state.current_frame;
    let snapshot = population.len();

    for idx in 0..snapshot {
        match Drive::select(&population.people[idx]) {
            Drive::SeekShelter => {
                let here = population.people[idx].position;
                let Some(target) = nearest(here, &shelter.items).map(|s| s.position) else {
                    fault.raise(SimError::EmptyRegistry {
                        kind: RegistryKind::Shelter,
                    });
                    return;
                };
                let person = &mut population.people[idx];
                person.heading = bearing(person.position, target);
                if distance(person.position, target) < thresholds::INTERACT_RANGE {
                    person.rest();
                    events.push(SimEvent::new(frame, EventKind::Rest, person.id));
                }
            }
            Drive::SeekFood => {
                let here = population.people[idx].position;
                let Some(target) = nearest(here, &food.items).map(|f| f.position) else {
                    fault.raise(SimError::EmptyRegistry {
                        kind: RegistryKind::Food,
                    });
                    return;
                };
                let person = &mut population.people[idx];
                person.heading = bearing(person.position, target);
                if distance(person.position, target) < thresholds::INTERACT_RANGE {
                    person.eat();
                    events.push(SimEvent::new(frame, EventKind::Meal, person.id));
                }
            }
            Drive::SeekMate => {
                // Uniform pick over the frame-start snapshot. The pick is
                // not guarded against landing on the seeker itself.
                let partner = rng.0.gen_range(0..snapshot);
                let target = population.people[partner].position;
                let person = &mut population.people[idx];
                person.heading = bearing(person.position, target);
                let in_range = distance(person.position, target) < thresholds::INTERACT_RANGE;
                if in_range && !population.people[idx].reproduced {
                    reproduce(
                        idx,
                        partner,
                        width,
                        height,
                        frame,
                        &mut population,
                        &mut births,
                        &mut events,
                        &mut rng.0,
                    );
                }
            }
            Drive::Wander => {
                let person = &mut population.people[idx];
                person.drift += person.drift_rate;
                person.heading += person.drift;
            }
        }

        let person = &mut population.people[idx];
        person.step_movement(width, height);
        person.age += vitals::AGE_STEP;
    }
}

/// Mark both participants and stage the offspring. Each child inherits the
/// initiator's drift rate and is otherwise birth-initialized; none of them
/// joins the live collection until the post-pass merge.
fn reproduce(
    initiator: usize,
    partner: usize,
    width: f32,
    height: f32,
    frame: u64,
    population: &mut Population,
    births: &mut PendingBirths,
    events: &mut FrameEvents,
    rng: &mut SmallRng,
) {
    population.people[initiator].reproduced = true;
    population.people[partner].reproduced = true;
    let drift_rate = population.people[initiator].drift_rate;
    let initiator_id = population.people[initiator].id;
    events.push(SimEvent::new(frame, EventKind::Mating, initiator_id));

    for _ in 0..thresholds::OFFSPRING_PER_MATING {
        let id = population.allocate_id();
        let child = Person::birth(id, drift_rate, width, height, rng);
        events.push(SimEvent::new(frame, EventKind::Birth, id));
        births.staged.push(child);
    }
}
