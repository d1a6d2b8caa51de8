//! Simulation Driver
//!
//! Owns the ECS world and the fixed-order schedule, and runs the
//! fixed-length frame loop: advance the population, replay the frame's
//! draw commands into the recorder, fold events into the stats. The loop
//! has no early termination; an extinct population keeps the remaining
//! frames running with only food and shelter on screen. A recorder failure
//! aborts the whole run.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::components::entity::{Food, Person, Shelter};
use crate::components::population::{FoodRegistry, PendingBirths, Population, ShelterRegistry};
use crate::components::world::WorldState;
use crate::config::SimConfig;
use crate::error::{SimError, SimFault};
use crate::events::FrameEvents;
use crate::render::{FrameRecorder, RenderQueue};
use crate::setup;
use crate::stats::{RunSummary, StatsCollector};
use crate::systems::{live_people, merge_births, prune_dead, queue_entity_draws};
use crate::SimRng;

/// A ready-to-run simulation: seeded world plus the per-frame schedule.
pub struct Simulation {
    world: World,
    schedule: Schedule,
    total_frames: u64,
}

impl Simulation {
    /// Seed a fresh world from the configuration.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let food = setup::seed_food(&config, &mut rng);
        let shelter = setup::seed_shelter(&config, &mut rng);
        let population = setup::seed_people(&config, &mut rng);
        Ok(Self::assemble(config, food, shelter, population, rng))
    }

    /// Build a simulation over explicit collections instead of random
    /// seeding. Counts are not validated here, so callers can construct
    /// degenerate worlds and observe the runtime precondition fault.
    pub fn with_state(
        config: SimConfig,
        food: Vec<Food>,
        shelter: Vec<Shelter>,
        people: Vec<Person>,
    ) -> Result<Self, SimError> {
        config.validate_arena()?;
        let rng = SmallRng::seed_from_u64(config.seed);
        Ok(Self::assemble(
            config,
            FoodRegistry::new(food),
            ShelterRegistry::new(shelter),
            Population::from_people(people),
            rng,
        ))
    }

    fn assemble(
        config: SimConfig,
        food: FoodRegistry,
        shelter: ShelterRegistry,
        population: Population,
        rng: SmallRng,
    ) -> Self {
        let total_frames = config.total_frames();
        let stats_interval = config.stats_interval;

        let mut world = World::new();
        world.insert_resource(WorldState::new());
        world.insert_resource(SimRng(rng));
        world.insert_resource(config);
        world.insert_resource(food);
        world.insert_resource(shelter);
        world.insert_resource(population);
        world.insert_resource(PendingBirths::default());
        world.insert_resource(FrameEvents::default());
        world.insert_resource(RenderQueue::default());
        world.insert_resource(StatsCollector::new(stats_interval));
        world.insert_resource(SimFault::default());

        // Fixed pass order: act, draw (dying people still appear, staged
        // newborns do not), merge births, prune the dead.
        let mut schedule = Schedule::default();
        schedule.add_systems((live_people, queue_entity_draws, merge_births, prune_dead).chain());

        Self {
            world,
            schedule,
            total_frames,
        }
    }

    /// Advance one frame and hand it to the recorder.
    pub fn step(&mut self, recorder: &mut dyn FrameRecorder) -> Result<(), SimError> {
        let frame = self.world.resource::<WorldState>().current_frame;
        self.schedule.run(&mut self.world);
        if let Some(error) = self.world.resource_mut::<SimFault>().take() {
            return Err(error);
        }

        recorder.begin_frame().map_err(SimError::Recorder)?;
        let commands = std::mem::take(&mut self.world.resource_mut::<RenderQueue>().commands);
        for command in &commands {
            recorder.draw(command).map_err(SimError::Recorder)?;
        }
        recorder.finish_frame().map_err(SimError::Recorder)?;

        let events = std::mem::take(&mut self.world.resource_mut::<FrameEvents>().events);
        let population = self.world.resource::<Population>().len();
        self.world
            .resource_mut::<StatsCollector>()
            .record_frame(frame, population, &events);
        self.world.resource_mut::<WorldState>().advance_frame();
        Ok(())
    }

    /// Run every configured frame to completion.
    pub fn run(&mut self, recorder: &mut dyn FrameRecorder) -> Result<RunSummary, SimError> {
        tracing::info!(
            frames = self.total_frames,
            people = self.world.resource::<Population>().len(),
            food = self.world.resource::<FoodRegistry>().items.len(),
            shelter = self.world.resource::<ShelterRegistry>().items.len(),
            "starting simulation run"
        );
        for _ in 0..self.total_frames {
            self.step(recorder)?;
        }
        let summary = self.summary();
        tracing::info!(
            final_population = summary.final_population,
            births = summary.births,
            "simulation run complete"
        );
        Ok(summary)
    }

    /// Snapshot of the accumulated statistics.
    pub fn summary(&self) -> RunSummary {
        self.world
            .resource::<StatsCollector>()
            .finalize(self.world.resource::<Population>().len())
    }

    pub fn population(&self) -> &Population {
        self.world.resource::<Population>()
    }

    pub fn current_frame(&self) -> u64 {
        self.world.resource::<WorldState>().current_frame
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }
}
