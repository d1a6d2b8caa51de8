//! World State
//!
//! The global frame counter resource.

use bevy_ecs::prelude::*;

/// Current frame index, advanced once per driver step.
#[derive(Resource, Debug, Default)]
pub struct WorldState {
    pub current_frame: u64,
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_frame(&mut self) {
        self.current_frame += 1;
    }
}
