//! Simulation Errors
//!
//! The simulation core is a pure computation over numeric state; the only
//! failure classes are configuration rejection, the empty-registry
//! precondition, and frame recorder failures.

use bevy_ecs::prelude::*;
use std::fmt;
use thiserror::Error;

/// Boxed error surfaced by a frame recorder implementation.
pub type RecorderError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Which resource registry a precondition refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryKind {
    Food,
    Shelter,
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryKind::Food => write!(f, "food"),
            RegistryKind::Shelter => write!(f, "shelter"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SimError {
    /// Rejected configuration (zero dimension, fps, duration, or counts).
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A seek behavior needed a registry that holds no entities. Seeding
    /// must keep food and shelter non-empty for the simulation's lifetime.
    #[error("the {kind} registry is empty but a {kind}-seeking step needs it")]
    EmptyRegistry { kind: RegistryKind },

    /// The frame recorder rejected a frame; fatal to the run.
    #[error("frame recorder failed: {0}")]
    Recorder(RecorderError),
}

/// Fault channel out of the schedule: systems cannot return errors, so a
/// precondition violation detected mid-pass lands here and the driver
/// converts it into an `Err` before the frame is submitted.
#[derive(Resource, Debug, Default)]
pub struct SimFault {
    error: Option<SimError>,
}

impl SimFault {
    /// Record a fault. The first one wins.
    pub fn raise(&mut self, error: SimError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    pub fn take(&mut self) -> Option<SimError> {
        self.error.take()
    }
}
