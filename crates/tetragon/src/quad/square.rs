//! The square itself: an ordered vertex quadruple with a strict corner layout.
//!
//! Purpose
//! - Keep exactly four named points in slot order (top-right, top-left,
//!   bottom-left, bottom-right), validated once at construction.
//! - Store coordinates snapped to the decimal grid; derived squares go back
//!   through the constructor.

use std::fmt;
use std::ptr;

use nalgebra::Vector2;
use tracing::{debug, trace};

use super::error::{QuadError, Result};
use super::types::{Point, Shape};
use super::util::{distance, round_point};

/// Square over four named vertices.
///
/// Invariants:
/// - Slots are p0 top-right, p1 top-left, p2 bottom-left, p3 bottom-right,
///   or all four slots collapsed onto one point.
/// - Stored coordinates are rounded to the decimal grid; the rounded image is
///   not re-checked against the ordering predicate.
#[derive(Clone, Debug)]
pub struct Square {
    points: [Point; 4],
}

impl Square {
    /// Build a square from at least four borrowed points; extras are ignored.
    ///
    /// Input is borrowed so callers can alias one point across slots, which is
    /// how the collapsed (degenerate) square is formed.
    pub fn new(vertices: &[&Point]) -> Result<Self> {
        if vertices.len() < 4 {
            return Err(QuadError::TooFewPoints(vertices.len()));
        }
        let quad = [vertices[0], vertices[1], vertices[2], vertices[3]];
        if !ordering_is_valid(&quad) {
            debug!(names = ?quad.map(|p| p.name.as_str()), "rejected vertex ordering");
            return Err(QuadError::InvalidOrdering);
        }
        Ok(Self {
            points: quad.map(round_point),
        })
    }

    /// Stored vertices in slot order.
    #[inline]
    pub fn vertices(&self) -> &[Point; 4] {
        &self.points
    }

    /// Translate every vertex by `(dx, dy)`.
    ///
    /// The result is rebuilt from scratch, so a shift whose rounded image
    /// breaks the corner layout is an error rather than a malformed square.
    pub fn translate_by(&self, dx: f64, dy: f64) -> Result<Square> {
        trace!(dx, dy, "translating square");
        let delta = Vector2::new(dx, dy);
        let moved: Vec<Point> = self
            .points
            .iter()
            .map(|p| {
                round_point(&Point {
                    name: p.name.clone(),
                    pos: p.pos + delta,
                })
            })
            .collect();
        Square::new(&moved.iter().collect::<Vec<_>>())
    }

    /// Center point, derived from the slot layout (p1/p3 span x, p2/p0 span y).
    ///
    /// Not a generic centroid: the formula reads corners by slot.
    pub fn center(&self) -> Point {
        let p = &self.points;
        Point::new(
            "center",
            p[1].pos.x + (p[3].pos.x - p[1].pos.x) / 2.0,
            p[2].pos.y + (p[0].pos.y - p[2].pos.y) / 2.0,
        )
    }

    /// Rotation is not available; callers get a hard error, never a no-op.
    pub fn rotate_by(&self, _degrees: i32) -> Result<Square> {
        Err(QuadError::Unimplemented("rotation"))
    }

    /// Exchange the coordinates of slots `i` and `j`, then the slots
    /// themselves: the slot geometry stays fixed while the names travel.
    ///
    /// Chained swaps enumerate the reflections of the square, e.g.
    /// `swap_points(0, 3)` then `swap_points(1, 2)` mirrors across the
    /// vertical axis.
    pub fn swap_points(&self, i: usize, j: usize) -> Result<Square> {
        if i > 3 || j > 3 {
            return Err(QuadError::IndexOutOfRange(i.max(j)));
        }
        let mut points = self.points.clone();
        points[i].pos = self.points[j].pos;
        points[j].pos = self.points[i].pos;
        points.swap(i, j);
        Ok(Square { points })
    }

    /// Slot-wise coordinate equality, ignoring names.
    pub fn coords_eq(&self, other: &Square) -> bool {
        self.points
            .iter()
            .zip(&other.points)
            .all(|(a, b)| a.coords_eq(b))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .points
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        writeln!(f, "[{}]", body)
    }
}

impl Shape for Square {
    fn translate_by(&self, dx: f64, dy: f64) -> Result<Square> {
        Square::translate_by(self, dx, dy)
    }

    fn rotate_by(&self, degrees: i32) -> Result<Square> {
        Square::rotate_by(self, degrees)
    }

    fn center(&self) -> Point {
        Square::center(self)
    }
}

/// Ordering predicate for a vertex quadruple.
///
/// Two ways in:
/// - All three consecutive slot pairs alias the same point (checked by
///   address, not by value): the collapsed square is a valid limiting case.
/// - Otherwise the four side lengths must match exactly (no epsilon) and the
///   slots must sit top-right, top-left, bottom-left, bottom-right.
pub fn ordering_is_valid(vertices: &[&Point; 4]) -> bool {
    if (0..3).all(|i| ptr::eq(vertices[i], vertices[i + 1])) {
        return true;
    }

    let (a, b, c, d) = (vertices[0], vertices[1], vertices[2], vertices[3]);
    distance(a, b) == distance(b, c)
        && distance(b, c) == distance(c, d)
        && distance(c, d) == distance(d, a)
        && a.pos.x > b.pos.x
        && a.pos.x > c.pos.x
        && a.pos.y >= c.pos.y
        && a.pos.y > d.pos.y
        && b.pos.x <= d.pos.x
        && b.pos.y > d.pos.y
        && c.pos.x <= d.pos.x
}
