//! Render Boundary
//!
//! The simulation core never touches pixels. Each frame it fills a
//! [`RenderQueue`] with draw commands ("entity of shape S and color C at
//! position P") and the driver replays them into a [`FrameRecorder`], the
//! contract implemented by the video pipeline. Draw order may matter for
//! overlapping pixels (last drawn wins) but never for correctness.

use bevy_ecs::prelude::*;

use crate::components::entity::{Color, Point};
use crate::error::RecorderError;

/// What to rasterize for an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Filled circle centered on the entity position
    Circle { radius: u32 },
    /// Filled rectangle anchored at the entity position
    Rect { width: u32, height: u32 },
}

/// One entity to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub position: Point,
    pub shape: Shape,
    pub color: Color,
}

/// Draw commands queued by the current frame's schedule.
#[derive(Resource, Debug, Default)]
pub struct RenderQueue {
    pub commands: Vec<DrawCommand>,
}

/// Boundary contract with the video pipeline. One `begin_frame` /
/// `draw`* / `finish_frame` cycle per frame, frames submitted in strictly
/// increasing order; any error is fatal to the run.
pub trait FrameRecorder {
    /// Clear the render surface for a new frame.
    fn begin_frame(&mut self) -> Result<(), RecorderError>;

    /// Rasterize one entity.
    fn draw(&mut self, command: &DrawCommand) -> Result<(), RecorderError>;

    /// Submit the completed frame to the sink.
    fn finish_frame(&mut self) -> Result<(), RecorderError>;
}

/// Recorder that discards every frame. Used for headless runs and tests.
#[derive(Debug, Default)]
pub struct NullRecorder {
    frames: u64,
    draws: u64,
}

impl NullRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed frames accepted so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Draw commands accepted so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl FrameRecorder for NullRecorder {
    fn begin_frame(&mut self) -> Result<(), RecorderError> {
        Ok(())
    }

    fn draw(&mut self, _command: &DrawCommand) -> Result<(), RecorderError> {
        self.draws += 1;
        Ok(())
    }

    fn finish_frame(&mut self) -> Result<(), RecorderError> {
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_recorder_counts() {
        let mut recorder = NullRecorder::new();
        recorder.begin_frame().unwrap();
        recorder
            .draw(&DrawCommand {
                position: Point::new(1.0, 2.0),
                shape: Shape::Circle { radius: 2 },
                color: Color::new(255, 0, 0),
            })
            .unwrap();
        recorder.finish_frame().unwrap();
        assert_eq!(recorder.frames(), 1);
        assert_eq!(recorder.draws(), 1);
    }
}
