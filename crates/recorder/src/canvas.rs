//! Software Canvas
//!
//! A plain RGB24 frame buffer with the two fill primitives the simulation
//! draws with. Every write is clipped to the buffer, so entities that
//! wander across the arena edge rasterize safely.

use sim_core::{Color, DrawCommand, Shape};

/// Packed RGB24 pixel buffer, row-major, origin at the top-left.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 3],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel data, `width * height * 3` bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Reset every pixel to black.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Set one pixel; out-of-bounds coordinates are ignored.
    pub fn put_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let index = (y as usize * self.width as usize + x as usize) * 3;
        self.data[index] = color.r;
        self.data[index + 1] = color.g;
        self.data[index + 2] = color.b;
    }

    /// Fill a `width x height` rectangle anchored at `(x, y)`.
    pub fn fill_rect(&mut self, x: i64, y: i64, width: u32, height: u32, color: Color) {
        for dy in 0..i64::from(height) {
            for dx in 0..i64::from(width) {
                self.put_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Fill a circle of the given radius centered at `(cx, cy)`.
    pub fn fill_circle(&mut self, cx: i64, cy: i64, radius: u32, color: Color) {
        let r = i64::from(radius);
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    self.put_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Rasterize one simulation draw command. Positions truncate to pixel
    /// coordinates; circles center on the position, rectangles hang from it.
    pub fn draw(&mut self, command: &DrawCommand) {
        let x = command.position.x as i64;
        let y = command.position.y as i64;
        match command.shape {
            Shape::Circle { radius } => self.fill_circle(x, y, radius, command.color),
            Shape::Rect { width, height } => self.fill_rect(x, y, width, height, command.color),
        }
    }
}
