//! Statistics Output
//!
//! Accumulates per-frame counters during the run and finalizes them into a
//! serializable summary for analysis.

use bevy_ecs::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::events::{DeathCause, EventKind, SimEvent};

/// A sampled point of the population history.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FrameSample {
    pub frame: u64,
    pub population: usize,
    pub events: usize,
}

/// Resource accumulating statistics while the simulation runs.
#[derive(Resource, Debug, Default)]
pub struct StatsCollector {
    frames: u64,
    births: u64,
    deaths_starved: u64,
    deaths_old_age: u64,
    meals: u64,
    rests: u64,
    matings: u64,
    peak_population: usize,
    history: Vec<FrameSample>,
    sample_interval: u64,
}

impl StatsCollector {
    pub fn new(sample_interval: u64) -> Self {
        Self {
            sample_interval,
            ..Self::default()
        }
    }

    /// Fold one finished frame into the counters.
    pub fn record_frame(&mut self, frame: u64, population: usize, events: &[SimEvent]) {
        self.frames += 1;
        if population > self.peak_population {
            self.peak_population = population;
        }
        for event in events {
            match event.kind {
                EventKind::Birth => self.births += 1,
                EventKind::Meal => self.meals += 1,
                EventKind::Rest => self.rests += 1,
                EventKind::Mating => self.matings += 1,
                EventKind::Death => match event.cause {
                    Some(DeathCause::Starved) => self.deaths_starved += 1,
                    Some(DeathCause::OldAge) | None => self.deaths_old_age += 1,
                },
            }
        }
        if self.sample_interval > 0 && frame % self.sample_interval == 0 {
            self.history.push(FrameSample {
                frame,
                population,
                events: events.len(),
            });
        }
    }

    /// Finalize into the run summary.
    pub fn finalize(&self, final_population: usize) -> RunSummary {
        RunSummary {
            frames: self.frames,
            final_population,
            peak_population: self.peak_population,
            births: self.births,
            deaths_starved: self.deaths_starved,
            deaths_old_age: self.deaths_old_age,
            meals: self.meals,
            rests: self.rests,
            matings: self.matings,
            history: self.history.clone(),
        }
    }
}

/// Whole-run statistics, written as JSON when requested.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub final_population: usize,
    pub peak_population: usize,
    pub births: u64,
    pub deaths_starved: u64,
    pub deaths_old_age: u64,
    pub meals: u64,
    pub rests: u64,
    pub matings: u64,
    pub history: Vec<FrameSample>,
}

/// Write the summary to a pretty-printed JSON file.
pub fn write_summary(summary: &RunSummary, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(summary)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    fs::write(path, json)
}
