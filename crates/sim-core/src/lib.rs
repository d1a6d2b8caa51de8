//! Core simulation: entities, drives, population, and the frame driver.
//!
//! The library is headless. Each frame it fills a render queue with draw
//! commands and hands them to a [`render::FrameRecorder`]; the recorder
//! crate turns those into video frames.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;

pub mod components;
pub mod config;
pub mod driver;
pub mod error;
pub mod events;
pub mod geometry;
pub mod render;
pub mod setup;
pub mod stats;
pub mod systems;

pub use components::entity::{Color, Food, Person, PersonId, Point, Shelter};
pub use components::population::{FoodRegistry, Population, ShelterRegistry};
pub use config::SimConfig;
pub use driver::Simulation;
pub use error::{RecorderError, RegistryKind, SimError};
pub use render::{DrawCommand, FrameRecorder, NullRecorder, RenderQueue, Shape};
pub use stats::RunSummary;

/// Seeded random number generator resource
#[derive(Resource)]
pub struct SimRng(pub SmallRng);
