//! ECS Components
//!
//! Entity types, the population registries, and global world state.

pub mod entity;
pub mod population;
pub mod world;

pub use entity::*;
pub use population::*;
pub use world::*;
