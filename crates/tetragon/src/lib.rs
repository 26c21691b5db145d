//! Squares over named 2D points.
//!
//! The crate provides a single strict shape: a square whose four vertices sit
//! in a fixed slot order (top-right, top-left, bottom-left, bottom-right),
//! validated once at construction and stored on a two-decimal coordinate grid.
//! Derived squares (translations) are rebuilt through the same constructor, so
//! the slot layout is an invariant of every `Square` value.

pub mod quad;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;
pub use quad::{ordering_is_valid, Point, QuadError, Shape, Square};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::quad::rand::{draw_square, GridCfg, ReplayToken};
    pub use crate::quad::{
        distance, ordering_is_valid, round_half_up, Point, QuadError, Shape, Square,
    };
    pub use nalgebra::Vector2 as Vec2;
}
