//! Numeric tolerances and sentinels shared across the crate.

/// Machine epsilon for single precision.
pub const REAL_EPSILON: f32 = f32::EPSILON;

/// Relative error accepted by [`is_close`](super::scalar::is_close): ten rounding steps.
pub const IS_CLOSE_TOLERANCE: f32 = 10.0 * REAL_EPSILON;

/// Tolerance on the segment parameter when intersecting a segment with a clip line.
pub const DEFAULT_FUZZ: f64 = 1e-6;

/// Largest polygon the clipper expects: a 4-point quad clipped by a 4-edge region.
pub const MAX_POLYGON_POINTS: usize = 8;

/// Upper saturation bound of the 64-bit floor/round helpers (2^50 - 1).
pub const FLOOR64_MAX: i64 = 1_125_899_906_842_623;

/// Lower saturation bound of the 64-bit floor/round helpers.
pub const FLOOR64_MIN: i64 = -FLOOR64_MAX - 1;
