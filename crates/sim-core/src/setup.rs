//! World Seeding
//!
//! Initial placement of food, shelter, and the founding population. All
//! randomness flows through the seeded generator, so identical seeds give
//! identical starting worlds.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::components::entity::{vitals, Food, Person, Shelter};
use crate::components::population::{FoodRegistry, Population, ShelterRegistry};
use crate::config::SimConfig;

/// Scatter the configured number of food points across the arena.
pub fn seed_food(config: &SimConfig, rng: &mut SmallRng) -> FoodRegistry {
    let items = (0..config.initial_food)
        .map(|_| Food::scattered(config.arena_width(), config.arena_height(), rng))
        .collect();
    FoodRegistry::new(items)
}

/// Scatter the configured number of shelters across the arena.
pub fn seed_shelter(config: &SimConfig, rng: &mut SmallRng) -> ShelterRegistry {
    let items = (0..config.initial_shelter)
        .map(|_| Shelter::scattered(config.arena_width(), config.arena_height(), rng))
        .collect();
    ShelterRegistry::new(items)
}

/// Found the population. Each founder draws a fresh drift rate; later
/// generations inherit theirs through reproduction.
pub fn seed_people(config: &SimConfig, rng: &mut SmallRng) -> Population {
    let mut population = Population::default();
    for _ in 0..config.initial_people {
        let id = population.allocate_id();
        let drift_rate = rng.gen_range(-vitals::DRIFT_SPAN..=vitals::DRIFT_SPAN);
        let person = Person::birth(
            id,
            drift_rate,
            config.arena_width(),
            config.arena_height(),
            rng,
        );
        population.people.push(person);
    }
    population
}
