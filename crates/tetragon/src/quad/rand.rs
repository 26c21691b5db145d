//! Deterministic square draws on the integer grid (replay tokens).
//!
//! Purpose
//! - Provide a reproducible source of valid vertex quadruples for benches and
//!   property tests. Draws are parameterizable and indexable via a
//!   `(seed, index)` token mixed into a single RNG.
//!
//! Model
//! - Side length and bottom-left corner are drawn as whole units, so every
//!   coordinate is integer-valued: rounding leaves the draw unchanged and the
//!   four side lengths compare exactly.
//!
//! Code cross-refs: `square::Square::new`, `square::ordering_is_valid`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Names assigned to the drawn slots, top-right first.
const SLOT_NAMES: [&str; 4] = ["A", "B", "C", "D"];

/// Grid sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct GridCfg {
    /// Inclusive side-length range in whole units. Clamped to >= 1.
    pub side_min: i64,
    pub side_max: i64,
    /// Bottom-left corners are drawn from `[-span, span]` on both axes.
    pub span: i64,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            side_min: 1,
            side_max: 25,
            span: 50,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw an axis-aligned square as a vertex quadruple in slot order
/// (top-right, top-left, bottom-left, bottom-right).
pub fn draw_square(cfg: GridCfg, tok: ReplayToken) -> [Point; 4] {
    let mut rng = tok.to_std_rng();
    let lo = cfg.side_min.max(1);
    let hi = cfg.side_max.max(lo);
    let side = rng.gen_range(lo..=hi);
    let span = cfg.span.max(0);
    let x0 = rng.gen_range(-span..=span);
    let y0 = rng.gen_range(-span..=span);
    let (x1, y1) = (x0 + side, y0 + side);
    [
        Point::new(SLOT_NAMES[0], x1 as f64, y1 as f64),
        Point::new(SLOT_NAMES[1], x0 as f64, y1 as f64),
        Point::new(SLOT_NAMES[2], x0 as f64, y0 as f64),
        Point::new(SLOT_NAMES[3], x1 as f64, y0 as f64),
    ]
}
