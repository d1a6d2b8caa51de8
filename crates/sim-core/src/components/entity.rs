//! Entity Components
//!
//! The three entity kinds that populate the arena: food points, shelters,
//! and people. Food and shelter are immutable resource points; a person
//! carries the full drive state the behavior systems act on.

use rand::rngs::SmallRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

use crate::events::DeathCause;

/// Per-step drive deltas and lifecycle bounds.
pub mod vitals {
    /// Energy spent by one movement step
    pub const STEP_ENERGY_COST: f32 = 0.1;
    /// Sleepiness gained by one movement step
    pub const STEP_SLEEP_GAIN: f32 = 0.1;
    /// Age gained per frame
    pub const AGE_STEP: f32 = 0.1;
    /// Energy level a meal restores to
    pub const FULL_ENERGY: f32 = 100.0;
    /// Age beyond which a person dies
    pub const MAX_AGE: f32 = 100.0;
    /// Magnitude bound for the drift rate and the initial drift accumulator
    pub const DRIFT_SPAN: f32 = 0.05;
    /// Upper bound for seeded energy and sleepiness
    pub const DRIVE_SEED_MAX: f32 = 100.0;
}

/// A position in the arena. Coordinates may transiently leave the arena
/// before the boundary bounce corrects the heading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Uniform random point within `[0, width) x [0, height)`.
    pub fn random(width: f32, height: f32, rng: &mut SmallRng) -> Self {
        Self {
            x: rng.gen_range(0.0..width),
            y: rng.gen_range(0.0..height),
        }
    }
}

/// 8-bit RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn random(rng: &mut SmallRng) -> Self {
        Self {
            r: rng.gen(),
            g: rng.gen(),
            b: rng.gen(),
        }
    }
}

/// Unique identifier for a person, assigned by the population manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId(pub u64);

/// An inexhaustible food point. Eating restores a person's energy without
/// depleting the food.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub position: Point,
}

impl Food {
    pub fn at(position: Point) -> Self {
        Self { position }
    }

    pub fn scattered(width: f32, height: f32, rng: &mut SmallRng) -> Self {
        Self {
            position: Point::random(width, height, rng),
        }
    }
}

/// An inexhaustible resting point. Resting there clears sleepiness.
#[derive(Debug, Clone, PartialEq)]
pub struct Shelter {
    pub position: Point,
}

impl Shelter {
    pub fn at(position: Point) -> Self {
        Self { position }
    }

    pub fn scattered(width: f32, height: f32, rng: &mut SmallRng) -> Self {
        Self {
            position: Point::random(width, height, rng),
        }
    }
}

/// A simulated person: position, heading, and the drive state the behavior
/// systems re-evaluate every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: PersonId,
    pub position: Point,
    /// Heading angle in radians
    pub heading: f32,
    /// Fixed heading perturbation magnitude, inherited unchanged by offspring
    pub drift_rate: f32,
    /// Wander drift accumulator; grows by `drift_rate` each wander step
    pub drift: f32,
    pub energy: f32,
    pub sleepiness: f32,
    pub age: f32,
    pub color: Color,
    /// Set on first reproduction and never reset, so a person reproduces at
    /// most once in its lifetime.
    pub reproduced: bool,
}

impl Person {
    /// Birth initialization: random position, heading, color, and starting
    /// drives. `drift_rate` is the one inherited trait; seeding draws it
    /// fresh, reproduction passes the parent's down.
    pub fn birth(id: PersonId, drift_rate: f32, width: f32, height: f32, rng: &mut SmallRng) -> Self {
        Self {
            id,
            position: Point::random(width, height, rng),
            heading: rng.gen_range(0.0..TAU),
            drift_rate,
            drift: rng.gen_range(-vitals::DRIFT_SPAN..=vitals::DRIFT_SPAN),
            energy: rng.gen_range(0.0..vitals::DRIVE_SEED_MAX),
            sleepiness: rng.gen_range(0.0..vitals::DRIVE_SEED_MAX),
            age: 0.0,
            color: Color::random(rng),
            reproduced: false,
        }
    }

    /// Eating refills energy to exactly [`vitals::FULL_ENERGY`].
    pub fn eat(&mut self) {
        self.energy = vitals::FULL_ENERGY;
    }

    /// Resting clears sleepiness to exactly zero.
    pub fn rest(&mut self) {
        self.sleepiness = 0.0;
    }

    /// One movement step: advance one unit along the heading, pay the energy
    /// and sleepiness cost, then bounce off the arena walls.
    pub fn step_movement(&mut self, width: f32, height: f32) {
        self.position.x += self.heading.cos();
        self.position.y += self.heading.sin();
        self.energy -= vitals::STEP_ENERGY_COST;
        self.sleepiness += vitals::STEP_SLEEP_GAIN;
        self.bounce(width, height);
    }

    /// Boundary bounce: leaving `[0, height]` in y negates the heading;
    /// leaving `[0, width]` in x reflects it across the vertical axis. The
    /// two checks are independent and can both fire in one step.
    fn bounce(&mut self, width: f32, height: f32) {
        if self.position.y < 0.0 || self.position.y > height {
            self.heading = -self.heading;
        }
        if self.position.x < 0.0 || self.position.x > width {
            self.heading = PI - self.heading;
        }
    }

    /// Why this person dies this frame, if it does. Checked once per frame
    /// after the behavior pass.
    pub fn death_cause(&self) -> Option<DeathCause> {
        if self.energy < 0.0 {
            Some(DeathCause::Starved)
        } else if self.age > vitals::MAX_AGE {
            Some(DeathCause::OldAge)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn test_person() -> Person {
        Person {
            id: PersonId(1),
            position: Point::new(50.0, 50.0),
            heading: 0.0,
            drift_rate: 0.01,
            drift: 0.0,
            energy: 50.0,
            sleepiness: 50.0,
            age: 10.0,
            color: Color::new(200, 100, 50),
            reproduced: false,
        }
    }

    #[test]
    fn test_birth_stays_in_bounds() {
        let mut rng = SmallRng::seed_from_u64(7);
        for i in 0..100 {
            let p = Person::birth(PersonId(i), 0.02, 640.0, 480.0, &mut rng);
            assert!(p.position.x >= 0.0 && p.position.x < 640.0);
            assert!(p.position.y >= 0.0 && p.position.y < 480.0);
            assert!(p.energy >= 0.0 && p.energy < vitals::DRIVE_SEED_MAX);
            assert!(p.sleepiness >= 0.0 && p.sleepiness < vitals::DRIVE_SEED_MAX);
            assert!(p.drift.abs() <= vitals::DRIFT_SPAN);
            assert_eq!(p.age, 0.0);
            assert!(!p.reproduced);
            assert_eq!(p.drift_rate, 0.02);
        }
    }

    #[test]
    fn test_eat_refills_energy_exactly() {
        let mut p = test_person();
        p.energy = -3.5;
        p.eat();
        assert_eq!(p.energy, vitals::FULL_ENERGY);
    }

    #[test]
    fn test_rest_clears_sleepiness_exactly() {
        let mut p = test_person();
        p.sleepiness = 97.3;
        p.rest();
        assert_eq!(p.sleepiness, 0.0);
    }

    #[test]
    fn test_step_movement_drive_deltas() {
        let mut p = test_person();
        let (energy, sleepiness) = (p.energy, p.sleepiness);
        p.step_movement(1000.0, 1000.0);
        assert!((energy - p.energy - vitals::STEP_ENERGY_COST).abs() < 1e-6);
        assert!((p.sleepiness - sleepiness - vitals::STEP_SLEEP_GAIN).abs() < 1e-6);
        // Heading 0 moves one unit along +x
        assert!((p.position.x - 51.0).abs() < 1e-6);
        assert!((p.position.y - 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_bounce_negates_heading_on_y_exit() {
        let mut p = test_person();
        p.position.y = 101.0;
        p.heading = 0.5;
        p.step_movement(1000.0, 100.0);
        assert!((p.heading + 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_bounce_reflects_heading_on_x_exit() {
        let mut p = test_person();
        p.position.x = 101.0;
        p.heading = 0.5;
        p.step_movement(100.0, 1000.0);
        assert!((p.heading - (PI - 0.5)).abs() < 1e-6);
    }

    #[test]
    fn test_bounce_applies_both_axes_in_one_step() {
        let mut p = test_person();
        p.position.x = 101.0;
        p.position.y = 101.0;
        p.heading = 0.5;
        p.step_movement(100.0, 100.0);
        // y-exit negates first, then x-exit reflects: PI - (-0.5)
        assert!((p.heading - (PI + 0.5)).abs() < 1e-6);
    }

    #[test]
    fn test_death_cause_thresholds() {
        let mut p = test_person();
        assert_eq!(p.death_cause(), None);
        p.energy = -0.05;
        assert_eq!(p.death_cause(), Some(DeathCause::Starved));
        p.energy = 50.0;
        p.age = 101.0;
        assert_eq!(p.death_cause(), Some(DeathCause::OldAge));
        p.age = 100.0;
        assert_eq!(p.death_cause(), None);
    }
}
