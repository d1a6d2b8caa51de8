//! ECS Systems
//!
//! The per-frame passes: behavior, draw queueing, and lifecycle.

pub mod behavior;
pub mod draw;
pub mod lifecycle;

// Re-export commonly used systems
pub use behavior::{live_people, nearest, Drive, Positioned};
pub use draw::queue_entity_draws;
pub use lifecycle::{merge_births, prune_dead};
