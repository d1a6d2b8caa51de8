//! Video boundary for the simulation: a software canvas, frame sinks, and
//! the recorder that connects them to the core's draw commands.

pub mod canvas;
pub mod sink;
pub mod video;

pub use canvas::FrameBuffer;
pub use sink::{FrameSink, PngSink, Y4mSink};
pub use video::VideoRecorder;
