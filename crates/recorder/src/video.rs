//! Video Recorder
//!
//! Implements the simulation's [`FrameRecorder`] boundary: rasterize the
//! frame's draw commands into the canvas, then push the completed buffer to
//! a sink.

use sim_core::{DrawCommand, FrameRecorder, RecorderError};

use crate::canvas::FrameBuffer;
use crate::sink::FrameSink;

/// Canvas plus sink, driven once per frame by the simulation.
pub struct VideoRecorder<S: FrameSink> {
    canvas: FrameBuffer,
    sink: S,
    frames: u64,
}

impl<S: FrameSink> VideoRecorder<S> {
    pub fn new(width: u32, height: u32, sink: S) -> Self {
        Self {
            canvas: FrameBuffer::new(width, height),
            sink,
            frames: 0,
        }
    }

    /// Completed frames pushed to the sink so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: FrameSink> FrameRecorder for VideoRecorder<S> {
    fn begin_frame(&mut self) -> Result<(), RecorderError> {
        self.canvas.clear();
        Ok(())
    }

    fn draw(&mut self, command: &DrawCommand) -> Result<(), RecorderError> {
        self.canvas.draw(command);
        Ok(())
    }

    fn finish_frame(&mut self) -> Result<(), RecorderError> {
        self.sink.write_frame(&self.canvas)?;
        self.frames += 1;
        Ok(())
    }
}
