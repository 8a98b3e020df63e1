//! Convex hull by gift wrapping.
//!
//! The hull is built in place: points are permuted so the hull occupies a prefix of the
//! slice, in the counter-clockwise order used by [`crate::polygon`]. Run time is O(n·h) for
//! `n` points and `h` hull vertices, which is fine for the handful of points a clipped quad
//! produces.
//!
//! Homogeneous points are compared through their screen position; the stored `w` is
//! never touched.

use std::f32::consts::TAU;

use smallvec::SmallVec;

use crate::math::constants::MAX_POLYGON_POINTS;
use crate::math::Vec2;
use crate::point::ScreenPoint;
use crate::polygon::is_polygon_concave;

/// Angle of `v` measured from the `(-1, 0)` direction, in `[0, 2π)`.
///
/// The angle grows as the direction sweeps towards `+y`, which on a y-down screen is
/// counter-clockwise.
pub fn polar_angle(v: Vec2) -> f32 {
    let angle = v.y.atan2(-v.x);
    if angle < 0.0 {
        angle + TAU
    } else {
        angle
    }
}

/// Rearranges `points` so their convex hull occupies `points[..n]` and returns `n`.
///
/// Three points or fewer are returned unchanged. Collinear points along a hull edge are
/// skipped in favour of the farthest one.
///
/// If rounding stops the wrap before it closes, the partial hull is kept when it is convex.
/// Otherwise the result is 0, and callers should skip the polygon.
pub fn compute_convex_hull_in_place<P: ScreenPoint>(points: &mut [P]) -> usize {
    let n = points.len();
    if n <= 3 {
        return n;
    }

    // Start from the minimum y, breaking ties with the maximum x. Any other tie-break
    // lets a degenerate top edge produce angles that do not strictly increase.
    for i in 1..n {
        let delta = points[i].screen() - points[0].screen();
        if delta.y < 0.0 || (delta.y == 0.0 && delta.x > 0.0) {
            points.swap(0, i);
        }
    }

    let mut num_hull = 1;
    let mut last_angle = f32::MIN;

    loop {
        let last = num_hull - 1;
        let origin = points[last].screen();

        let mut min_angle = f32::MAX;
        let mut max_dist = 0.0f32;
        let mut next = None;

        // the start point is only a candidate once it can close the hull
        let candidates = (0..n).filter(|&i| (i == 0 && last != 0) || i > last);
        for i in candidates {
            let v = points[i].screen() - origin;
            let dist = v.length();
            if dist <= 0.0 {
                continue;
            }

            let angle = polar_angle(v);
            if angle > last_angle && (angle < min_angle || (angle == min_angle && dist > max_dist))
            {
                min_angle = angle;
                max_dist = dist;
                next = Some(i);
            }
        }

        let Some(next) = next else {
            return stalled_hull_len(&points[..num_hull]);
        };

        last_angle = min_angle;
        if next == 0 {
            break;
        }

        points.swap(num_hull, next);
        num_hull += 1;
    }

    num_hull
}

/// Length to report when the wrap stops before closing on `prefix`.
fn stalled_hull_len<P: ScreenPoint>(prefix: &[P]) -> usize {
    if is_polygon_concave(prefix) {
        log::trace!("convex hull stalled on a concave prefix of {} points", prefix.len());
        return 0;
    }
    prefix.len()
}

/// Allocating form of [`compute_convex_hull_in_place`]; `points` is left untouched.
pub fn compute_convex_hull<P: ScreenPoint>(points: &[P]) -> SmallVec<[P; MAX_POLYGON_POINTS]> {
    let mut hull: SmallVec<[P; MAX_POLYGON_POINTS]> = SmallVec::from_slice(points);
    let len = compute_convex_hull_in_place(&mut hull);
    hull.truncate(len);
    hull
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec4;
    use crate::polygon::is_point_inside_polygon;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn polar_angle_starts_at_negative_x() {
        assert_relative_eq!(polar_angle(Vec2::LEFT), 0.0);
        assert_relative_eq!(polar_angle(Vec2::new(0.0, 1.0)), FRAC_PI_2);
        assert_relative_eq!(polar_angle(Vec2::RIGHT), PI);
        assert_relative_eq!(polar_angle(Vec2::new(0.0, -1.0)), 3.0 * FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn small_inputs_are_returned_unchanged() {
        let mut points = [Vec2::new(5.0, 5.0), Vec2::new(0.0, 0.0), Vec2::new(1.0, 3.0)];
        assert_eq!(compute_convex_hull_in_place(&mut points), 3);
        assert_eq!(points[0], Vec2::new(5.0, 5.0));
        assert!(compute_convex_hull::<Vec2>(&[]).is_empty());
    }

    #[test]
    fn square_with_center_drops_center() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(0.5, 0.5),
        ];

        let hull = compute_convex_hull(&points);
        assert_eq!(
            hull.as_slice(),
            &[
                Vec2::new(1.0, 0.0),
                Vec2::new(0.0, 0.0),
                Vec2::new(0.0, 1.0),
                Vec2::new(1.0, 1.0),
            ]
        );
        assert!(!is_polygon_concave(&hull));
        for p in points {
            assert!(is_point_inside_polygon(p, &hull));
        }
    }

    #[test]
    fn collinear_points_keep_extremes() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(3.0, 0.0),
        ];

        let hull = compute_convex_hull(&points);
        assert_eq!(hull.as_slice(), &[Vec2::new(3.0, 0.0), Vec2::new(0.0, 0.0)]);
    }

    #[test]
    fn collinear_edge_points_are_skipped() {
        // midpoint of the top edge is on the hull boundary but not a corner
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 2.0),
            Vec2::new(1.0, 0.0),
        ];

        let hull = compute_convex_hull(&points);
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn homogeneous_points_use_screen_position() {
        // a square whose corners carry different w values, plus its center
        let points = [
            Vec4::new(0.0, 0.0, 0.0, 1.0),
            Vec4::new(2.0, 0.0, 0.0, 2.0),
            Vec4::new(4.0, 4.0, 0.0, 4.0),
            Vec4::new(0.0, 0.5, 0.0, 0.5),
            Vec4::new(1.0, 1.0, 0.0, 2.0),
        ];

        let hull = compute_convex_hull(&points);
        assert_eq!(hull.len(), 4);
        assert_eq!(hull[0], Vec4::new(2.0, 0.0, 0.0, 2.0));
        // w is preserved on every hull vertex
        assert!(hull.iter().all(|p| points.contains(p)));
    }

    #[test]
    fn stalled_concave_prefix_is_dropped() {
        // the wrap turned the wrong way at (1, 1) before giving up
        let concave = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 4.0),
            Vec2::new(4.0, 4.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(4.0, 0.0),
        ];
        assert_eq!(stalled_hull_len(&concave), 0);

        let convex = [Vec2::new(4.0, 0.0), Vec2::new(0.0, 0.0), Vec2::new(0.0, 4.0)];
        assert_eq!(stalled_hull_len(&convex), 3);
    }

    #[test]
    fn duplicate_points_do_not_stall() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 1.0),
        ];

        let hull = compute_convex_hull(&points);
        assert_eq!(hull.len(), 3);
    }
}
