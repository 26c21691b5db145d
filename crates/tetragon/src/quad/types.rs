//! Core point type and the shape seam shared by square operations.

use std::fmt;

use nalgebra::Vector2;

use super::error::Result;

/// A named point in the 2D plane.
///
/// Invariants:
/// - `name` is assigned at construction; coordinates stay mutable via `pos`.
/// - Value equality is exact on both coordinates and the name.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub name: String,
    pub pos: Vector2<f64>,
}

impl Point {
    #[inline]
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            pos: Vector2::new(x, y),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }

    /// Coordinate equality ignoring the name (exact comparison).
    #[inline]
    pub fn coords_eq(&self, other: &Point) -> bool {
        self.pos == other.pos
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:.2}, {:.2})", self.name, self.pos.x, self.pos.y)
    }
}

/// Operations every planar shape in this crate exposes.
///
/// Translation and rotation return a fresh shape; both can fail, so the
/// results are explicit. Rendering goes through `Display`.
pub trait Shape: fmt::Display {
    fn translate_by(&self, dx: f64, dy: f64) -> Result<Self>
    where
        Self: Sized;

    fn rotate_by(&self, degrees: i32) -> Result<Self>
    where
        Self: Sized;

    fn center(&self) -> Point;
}
