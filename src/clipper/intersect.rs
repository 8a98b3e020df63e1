//! Segment/line intersection for 2D and homogeneous points.

use crate::math::{Vec2, Vec4};

/// Maps `t` into `[0, 1]` if it lies within `fuzz` of that range.
///
/// Returns `None` when `t` is further outside, so rounding near a segment end cannot
/// produce a point beyond it.
pub fn pull_to_01(t: f64, fuzz: f64) -> Option<f64> {
    if t < -fuzz || t > 1.0 + fuzz {
        return None;
    }
    Some(t.clamp(0.0, 1.0))
}

/// Parameter along `a -> b` where it meets the line through `c` and `d`.
///
/// `ba = b - a`, `cd = c - d` and `ca = c - a`. Solves `a + s·ba = c - t·cd` for `s`.
fn scale_factor(ba: Vec2, cd: Vec2, ca: Vec2, fuzz: f64) -> Option<f32> {
    let det = ba.determinant(cd);
    if det == 0.0 {
        return None;
    }

    let s = f64::from(ca.determinant(cd)) / f64::from(det);
    pull_to_01(s, fuzz).map(|s| s as f32)
}

/// Intersects the segment `a -> b` with the infinite line through `c` and `d`.
///
/// Returns `None` for parallel lines, or when the crossing is more than `fuzz` (as a
/// fraction of the segment) beyond either end.
pub fn intersect_segment_with_line(a: Vec2, b: Vec2, c: Vec2, d: Vec2, fuzz: f64) -> Option<Vec2> {
    let ba = b - a;
    let s = scale_factor(ba, c - d, c - a, fuzz)?;
    Some(a + ba * s)
}

/// Homogeneous form of [`intersect_segment_with_line`].
///
/// The segment is interpolated as `(x/w, y/w, z/w, 1/w)`, which is linear in screen space,
/// and converted back afterwards. The result therefore lies on the line after perspective
/// division, and its depth is perspective correct.
pub fn intersect_homogeneous_segment_with_line(
    a: Vec4,
    b: Vec4,
    c: Vec2,
    d: Vec2,
    fuzz: f64,
) -> Option<Vec4> {
    let a_over = a.over_w();
    let b_over = b.over_w();

    let a2 = Vec2::new(a_over.x, a_over.y);
    let ba2 = Vec2::new(b_over.x - a_over.x, b_over.y - a_over.y);

    let s = scale_factor(ba2, c - d, c - a2, fuzz)?;
    Some(Vec4::from_over_w(a_over.lerp(b_over, s)))
}
