use nalgebra::Vector2;

use super::cfg::ROUND_SCALE;
use super::types::Point;

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: &Point, b: &Point) -> f64 {
    (a.pos - b.pos).norm()
}

/// Round to the stored decimal scale, ties away from zero.
///
/// Goes through fixed-point scaling and `f64::round` (half away from zero),
/// never through format-string rounding.
#[inline]
pub fn round_half_up(v: f64) -> f64 {
    (v * ROUND_SCALE).round() / ROUND_SCALE
}

/// Rounded copy of a point (name preserved, coordinates snapped).
#[inline]
pub fn round_point(p: &Point) -> Point {
    Point {
        name: p.name.clone(),
        pos: Vector2::new(round_half_up(p.pos.x), round_half_up(p.pos.y)),
    }
}
