//! Rounding policy for stored coordinates (internal).
//!
//! Policy
//! - Coordinates are snapped to a fixed decimal scale once, at construction.
//!   The scale is a constant rather than a per-square knob; call sites never
//!   pick their own precision.

/// Decimal places kept by coordinate rounding.
pub const ROUND_DECIMALS: u32 = 2;
/// Fixed-point scale, 10^ROUND_DECIMALS.
pub(crate) const ROUND_SCALE: f64 = 100.0;
