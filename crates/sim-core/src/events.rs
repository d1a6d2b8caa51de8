//! Simulation Events
//!
//! Per-frame event stream: births, deaths, meals, rests, and matings.
//! Events are collected into [`FrameEvents`] during the schedule and drained
//! by the driver into the stats collector once per frame.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::entity::PersonId;

/// Primary event categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Birth,
    Death,
    Meal,
    Rest,
    Mating,
}

/// Why a person died
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathCause {
    /// Energy fell below zero
    Starved,
    /// Age exceeded the maximum
    OldAge,
}

/// A single event tied to a frame and a person.
#[derive(Debug, Clone, Serialize)]
pub struct SimEvent {
    pub frame: u64,
    pub kind: EventKind,
    pub person: PersonId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<DeathCause>,
}

impl SimEvent {
    pub fn new(frame: u64, kind: EventKind, person: PersonId) -> Self {
        Self {
            frame,
            kind,
            person,
            cause: None,
        }
    }

    pub fn death(frame: u64, person: PersonId, cause: DeathCause) -> Self {
        Self {
            frame,
            kind: EventKind::Death,
            person,
            cause: Some(cause),
        }
    }
}

/// Resource collecting the events of the frame in progress.
#[derive(Resource, Debug, Default)]
pub struct FrameEvents {
    pub events: Vec<SimEvent>,
}

impl FrameEvents {
    pub fn push(&mut self, event: SimEvent) {
        tracing::trace!(
            frame = event.frame,
            kind = ?event.kind,
            person = event.person.0,
            "sim event"
        );
        self.events.push(event);
    }
}
