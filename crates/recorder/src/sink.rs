//! Frame Sinks
//!
//! Where completed frames go: a YUV4MPEG2 stream (playable directly and
//! trivially transcoded to mp4) or a numbered PNG sequence. Frames arrive
//! in strictly increasing order; any write failure is fatal upstream.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::canvas::FrameBuffer;

/// Accepts one completed frame buffer at a time.
pub trait FrameSink {
    fn write_frame(&mut self, frame: &FrameBuffer) -> io::Result<()>;
}

/// Uncompressed YUV4MPEG2 stream with 4:2:0 chroma subsampling.
///
/// The stream header is written lazily from the first frame's dimensions.
pub struct Y4mSink<W: Write> {
    writer: W,
    fps: u32,
    header_written: bool,
    y: Vec<u8>,
    cb: Vec<u8>,
    cr: Vec<u8>,
}

impl<W: Write> Y4mSink<W> {
    pub fn new(writer: W, fps: u32) -> Self {
        Self {
            writer,
            fps,
            header_written: false,
            y: Vec::new(),
            cb: Vec::new(),
            cr: Vec::new(),
        }
    }

    /// Consume the sink and hand back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Fill the Y/Cb/Cr planes from the RGB frame. Full-range BT.601, with
    /// chroma averaged over each 2x2 block.
    fn convert(&mut self, frame: &FrameBuffer) {
        let w = frame.width() as usize;
        let h = frame.height() as usize;
        let cw = (w + 1) / 2;
        let ch = (h + 1) / 2;
        self.y.resize(w * h, 0);
        self.cb.resize(cw * ch, 0);
        self.cr.resize(cw * ch, 0);

        let data = frame.data();
        for py in 0..h {
            for px in 0..w {
                let i = (py * w + px) * 3;
                let (r, g, b) = (data[i] as f32, data[i + 1] as f32, data[i + 2] as f32);
                let luma = 0.299 * r + 0.587 * g + 0.114 * b;
                self.y[py * w + px] = luma.round().clamp(0.0, 255.0) as u8;
            }
        }

        for cy in 0..ch {
            for cx in 0..cw {
                let mut cb_sum = 0.0f32;
                let mut cr_sum = 0.0f32;
                let mut samples = 0.0f32;
                for dy in 0..2 {
                    for dx in 0..2 {
                        let px = cx * 2 + dx;
                        let py = cy * 2 + dy;
                        if px < w && py < h {
                            let i = (py * w + px) * 3;
                            let (r, g, b) =
                                (data[i] as f32, data[i + 1] as f32, data[i + 2] as f32);
                            cb_sum += 128.0 - 0.168_736 * r - 0.331_264 * g + 0.5 * b;
                            cr_sum += 128.0 + 0.5 * r - 0.418_688 * g - 0.081_312 * b;
                            samples += 1.0;
                        }
                    }
                }
                self.cb[cy * cw + cx] = (cb_sum / samples).round().clamp(0.0, 255.0) as u8;
                self.cr[cy * cw + cx] = (cr_sum / samples).round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}

impl Y4mSink<BufWriter<File>> {
    /// Create a sink writing to a file on disk.
    pub fn create(path: &Path, fps: u32) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file), fps))
    }
}

impl<W: Write> FrameSink for Y4mSink<W> {
    fn write_frame(&mut self, frame: &FrameBuffer) -> io::Result<()> {
        if !self.header_written {
            writeln!(
                self.writer,
                "YUV4MPEG2 W{} H{} F{}:1 Ip A1:1 C420jpeg",
                frame.width(),
                frame.height(),
                self.fps
            )?;
            self.header_written = true;
            tracing::debug!(
                width = frame.width(),
                height = frame.height(),
                fps = self.fps,
                "wrote y4m stream header"
            );
        }
        self.writer.write_all(b"FRAME\n")?;
        self.convert(frame);
        self.writer.write_all(&self.y)?;
        self.writer.write_all(&self.cb)?;
        self.writer.write_all(&self.cr)?;
        Ok(())
    }
}

/// Numbered PNG sequence in a directory, `frame_000000.png` onward.
pub struct PngSink {
    dir: PathBuf,
    frames_written: u64,
}

impl PngSink {
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            frames_written: 0,
        })
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }
}

impl FrameSink for PngSink {
    fn write_frame(&mut self, frame: &FrameBuffer) -> io::Result<()> {
        let path = self
            .dir
            .join(format!("frame_{:06}.png", self.frames_written));
        image::save_buffer(
            &path,
            frame.data(),
            frame.width(),
            frame.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        self.frames_written += 1;
        Ok(())
    }
}
