//! Population Registries
//!
//! The three entity collections, exclusively owned by these resources and
//! mutated only inside the per-frame schedule. Food and shelter are fixed
//! after seeding; the people collection grows through the birth staging
//! buffer and shrinks in the post-pass prune.

use bevy_ecs::prelude::*;

use super::entity::{Food, Person, PersonId, Shelter};

/// All food points in the arena.
#[derive(Resource, Debug, Default)]
pub struct FoodRegistry {
    pub items: Vec<Food>,
}

impl FoodRegistry {
    pub fn new(items: Vec<Food>) -> Self {
        Self { items }
    }
}

/// All shelters in the arena.
#[derive(Resource, Debug, Default)]
pub struct ShelterRegistry {
    pub items: Vec<Shelter>,
}

impl ShelterRegistry {
    pub fn new(items: Vec<Shelter>) -> Self {
        Self { items }
    }
}

/// The live people collection plus the id counter for new births.
///
/// The behavior pass iterates the index range taken at frame start, so the
/// vector must not grow or shrink during the pass; births go through
/// [`PendingBirths`] and deaths through the post-pass prune.
#[derive(Resource, Debug, Default)]
pub struct Population {
    pub people: Vec<Person>,
    next_id: u64,
}

impl Population {
    /// Wrap an existing people collection, continuing ids after the highest
    /// one present.
    pub fn from_people(people: Vec<Person>) -> Self {
        let next_id = people.iter().map(|p| p.id.0 + 1).max().unwrap_or(0);
        Self { people, next_id }
    }

    pub fn allocate_id(&mut self) -> PersonId {
        let id = PersonId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

/// Staging buffer for people born during the current frame. Merged into
/// [`Population`] after the behavior pass, so a newborn is neither stepped
/// nor drawn in its birth frame.
#[derive(Resource, Debug, Default)]
pub struct PendingBirths {
    pub staged: Vec<Person>,
}
