//! Planar Geometry
//!
//! Distance and bearing helpers shared by the seek behaviors.

use crate::components::entity::Point;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Bearing angle in radians from `from` toward `to`, in `(-PI, PI]`.
///
/// The degenerate case `from == to` returns 0.
pub fn bearing(from: Point, to: Point) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}
