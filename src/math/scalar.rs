//! Scalar helpers: saturating float-to-integer rounding, tolerant comparison and clamping.

use super::constants::{FLOOR64_MAX, FLOOR64_MIN, IS_CLOSE_TOLERANCE};

/// Floor to a 32-bit integer, saturating at `i32::MIN`/`i32::MAX`. NaN maps to 0.
pub fn floor(x: f64) -> i32 {
    if x >= i32::MAX as f64 {
        i32::MAX
    } else if x <= i32::MIN as f64 {
        i32::MIN
    } else {
        x.floor() as i32
    }
}

/// Floor to a 64-bit integer, saturating at ±(2^50 - 1) so the result is exactly
/// representable as an `f64`. NaN maps to 0.
pub fn floor64(x: f64) -> i64 {
    if x >= FLOOR64_MAX as f64 {
        FLOOR64_MAX
    } else if x <= FLOOR64_MIN as f64 {
        FLOOR64_MIN
    } else {
        x.floor() as i64
    }
}

/// Round half up, saturating like [`floor`].
pub fn round(x: f64) -> i32 {
    floor(x + 0.5)
}

/// Round half up, saturating like [`floor64`].
pub fn round64(x: f64) -> i64 {
    floor64(x + 0.5)
}

/// Ceiling to a 32-bit integer, saturating like [`floor`].
pub fn ceiling(x: f64) -> i32 {
    floor(-x).saturating_neg()
}

/// Returns true if `a` is within ten single-precision rounding steps of `b`.
///
/// The error is relative to `b` (or absolute when `b` is exactly zero), so the test is
/// not symmetric in its arguments.
pub fn is_close(a: f32, b: f32) -> bool {
    let divisor = if b == 0.0 { 1.0 } else { b };
    ((a - b) / divisor).abs() < IS_CLOSE_TOLERANCE
}

/// `a < b` by more than rounding error.
pub fn is_less_than(a: f32, b: f32) -> bool {
    a < b && !is_close(a, b)
}

/// Clamps `value` into `[min, max]`.
///
/// The comparisons are ordered so a NaN `value` resolves to `min`.
pub fn clamp_value<T: PartialOrd>(value: T, min: T, max: T) -> T {
    debug_assert!(min <= max);

    if value > max {
        max
    } else if value >= min {
        value
    } else {
        min
    }
}

/// Fractional part of `value`, always in `[0, 1)` for finite input.
pub fn fraction(value: f32) -> f32 {
    value - value.floor()
}

/// Largest float strictly less than `x`. Only defined for positive finite input.
pub fn next_smaller(x: f32) -> f32 {
    debug_assert!(x > 0.0 && x.is_finite());
    f32::from_bits(x.to_bits() - 1)
}

/// Floating point modulo with a result in `[0, y]`. Assumes `y > 0`.
///
/// `modulo(x, f64::INFINITY) == x` for finite non-negative `x`.
pub fn modulo(x: f64, y: f64) -> f64 {
    debug_assert!(y > 0.0);

    let rem = if x >= 0.0 {
        if x < y {
            x
        } else {
            x - (x / y).floor() * y
        }
    } else {
        // x is negative or NaN
        let x = -x;
        let rem = if x < y { x } else { x - (x / y).floor() * y };
        y - rem
    };

    clamp_value(rem, 0.0, y)
}

pub fn radians_to_degrees(radians: f32) -> f32 {
    radians * 180.0 / std::f32::consts::PI
}

pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}
