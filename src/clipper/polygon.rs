//! Convex polygon against convex polygon.

use smallvec::SmallVec;

use super::{coalesce_duplicates, Polygon};
use crate::error::{ClipError, Result};
use crate::hull::compute_convex_hull_in_place;
use crate::math::constants::DEFAULT_FUZZ;
use crate::math::Vec2;
use crate::point::ClipPoint;
use crate::polygon::{is_inside, is_polygon_concave};

/// Sutherland-Hodgman clipper for convex polygons.
///
/// The subject may be any [`ClipPoint`]: plain, homogeneous or AA-masked. The clip polygon
/// is always plain 2D. Both must be convex and counter-clockwise; see [`crate::polygon`].
///
/// The clipper holds no state besides its intersection tolerance. Copy one freely.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Clipper {
    fuzz: f64,
}

impl Clipper {
    /// Creates a clipper with the default intersection tolerance.
    pub fn new() -> Self {
        Self::with_fuzz(DEFAULT_FUZZ)
    }

    /// Creates a clipper that accepts intersections up to `fuzz` (as a fraction of the
    /// segment length) beyond either end of a subject edge.
    pub fn with_fuzz(fuzz: f64) -> Self {
        Self { fuzz }
    }

    pub fn fuzz(&self) -> f64 {
        self.fuzz
    }

    /// Clips `subject` to `clip` and writes the result to `out`.
    ///
    /// `out` must hold `subject.len() + clip.len()` points. Returns the number written,
    /// which is 0 when nothing of `subject` survives.
    ///
    /// Points on a clip edge count as outside. If rounding leaves the result slightly
    /// concave, its convex hull is returned instead.
    pub fn clip_to_polygon<P: ClipPoint>(
        &self,
        subject: &[P],
        clip: &[Vec2],
        out: &mut [P],
    ) -> Result<usize> {
        let required = subject.len() + clip.len();
        if out.len() < required {
            log::debug!(
                "polygon clip output holds {} points, needs {required}",
                out.len()
            );
            return Err(ClipError::OutputBufferTooSmall {
                required,
                capacity: out.len(),
            });
        }

        let mut input: Polygon<P> = SmallVec::from_slice(subject);
        let mut output: Polygon<P> = SmallVec::with_capacity(required);

        let n = clip.len();
        for i in 0..n {
            if input.is_empty() {
                return Ok(0);
            }

            let line_start = clip[i];
            let line_end = clip[(i + 1) % n];
            self.clip_against_edge(&input, line_start, line_end, &mut output);
            std::mem::swap(&mut input, &mut output);
        }

        let count = coalesce_duplicates(&input, out)?;
        if is_polygon_concave(&out[..count]) {
            log::debug!("clipped polygon of {count} points is concave, using its hull");
            return Ok(compute_convex_hull_in_place(&mut out[..count]));
        }

        Ok(count)
    }

    /// One pass: keeps the part of `input` strictly inside `line_start -> line_end`.
    fn clip_against_edge<P: ClipPoint>(
        &self,
        input: &[P],
        line_start: Vec2,
        line_end: Vec2,
        output: &mut Polygon<P>,
    ) {
        output.clear();

        let edge = line_end - line_start;
        let Some(&last) = input.last() else {
            return;
        };

        let mut prev = last;
        let mut prev_inside = is_inside(prev.screen() - line_start, edge, true);

        for &current in input {
            let current_inside = is_inside(current.screen() - line_start, edge, true);

            if current_inside != prev_inside {
                if let Some(crossing) =
                    prev.intersect_line(&current, line_start, line_end, current_inside, self.fuzz)
                {
                    output.push(crossing);
                }
            }
            if current_inside {
                output.push(current);
            }

            prev = current;
            prev_inside = current_inside;
        }
    }
}

impl Default for Clipper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec4;
    use crate::point::{AaMask, AaPoint, EdgeAa, ScreenPoint};
    use crate::rect::RectF;
    use approx::assert_relative_eq;

    fn square(x: f32, y: f32, size: f32) -> [Vec2; 4] {
        RectF::new(x, y, size, size).to_points_ccw()
    }

    #[test]
    fn overlapping_squares() {
        let subject = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 2.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(2.0, 0.0),
        ];
        let clip = [
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 3.0),
            Vec2::new(3.0, 3.0),
            Vec2::new(3.0, 1.0),
        ];
        let mut out = [Vec2::ZERO; 8];

        let count = Clipper::new()
            .clip_to_polygon(&subject, &clip, &mut out)
            .unwrap();

        assert_eq!(
            &out[..count],
            &[
                Vec2::new(1.0, 1.0),
                Vec2::new(1.0, 2.0),
                Vec2::new(2.0, 2.0),
                Vec2::new(2.0, 1.0),
            ]
        );
    }

    #[test]
    fn subject_inside_is_unchanged() {
        let subject = square(2.0, 2.0, 1.0);
        let mut out = [Vec2::ZERO; 8];
        let count = Clipper::default()
            .clip_to_polygon(&subject, &square(0.0, 0.0, 10.0), &mut out)
            .unwrap();

        assert_eq!(&out[..count], &subject);
    }

    #[test]
    fn subject_outside_is_removed() {
        let mut out = [Vec2::ZERO; 8];
        let count = Clipper::default()
            .clip_to_polygon(&square(20.0, 0.0, 1.0), &square(0.0, 0.0, 10.0), &mut out)
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn homogeneous_clip_is_perspective_correct() {
        // screen positions (10,0) (1,0) (1,1) (10,1); the left side is 10x deeper
        let subject = [
            Vec4::new(10.0, 0.0, 1.0, 1.0),
            Vec4::new(10.0, 0.0, 10.0, 10.0),
            Vec4::new(10.0, 10.0, 10.0, 10.0),
            Vec4::new(10.0, 1.0, 1.0, 1.0),
        ];
        let clip = [
            Vec2::new(0.0, -1.0),
            Vec2::new(0.0, 2.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(2.0, -1.0),
        ];
        let mut out = [Vec4::ZERO; 8];

        let count = Clipper::new()
            .clip_to_polygon(&subject, &clip, &mut out)
            .unwrap();
        assert_eq!(count, 4);

        let on_edge: Vec<_> = out[..count]
            .iter()
            .filter(|p| (p.screen().x - 2.0).abs() < 1e-4)
            .collect();
        assert_eq!(on_edge.len(), 2);
        for p in on_edge {
            assert_relative_eq!(p.w, 5.0, epsilon = 1e-4);
            assert_relative_eq!(p.z, 5.0, epsilon = 1e-4);
        }
        // the original far vertices come through untouched
        assert!(out[..count].contains(&subject[1]));
        assert!(out[..count].contains(&subject[2]));
    }

    #[test]
    fn clip_edges_are_anti_aliased() {
        let quad = AaPoint::quad_from_rect(
            &RectF::new(0.0, 0.0, 2.0, 2.0),
            EdgeAa::None,
            EdgeAa::Inward,
            EdgeAa::None,
            EdgeAa::None,
        );
        let clip = [
            Vec2::new(1.0, -1.0),
            Vec2::new(1.0, 3.0),
            Vec2::new(3.0, 3.0),
            Vec2::new(3.0, -1.0),
        ];
        let mut out = [AaPoint::default(); 8];

        let count = Clipper::new().clip_to_polygon(&quad, &clip, &mut out).unwrap();
        assert_eq!(count, 4);

        // entry point on the bottom edge, then bottom-right, top-right, exit point on top
        let [entry, br, tr, exit] = [out[0], out[1], out[2], out[3]];
        assert_eq!(entry.screen(), Vec2::new(1.0, 2.0));
        assert_eq!(exit.screen(), Vec2::new(1.0, 0.0));

        // the new edge exit -> entry is anti-aliased from both ends
        assert_eq!(exit.to_next, AaMask::FULL);
        assert_eq!(entry.to_prev, AaMask::FULL);
        // the surviving pieces of the old edges keep their masks
        assert_eq!(entry.to_next, AaMask::NONE);
        assert_eq!(exit.to_prev, EdgeAa::Inward.mask());
        assert_eq!(br, quad[0]);
        assert_eq!(tr, quad[1]);
    }

    #[test]
    fn concave_result_falls_back_to_hull() {
        let arrow = [
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 4.0),
            Vec2::new(4.0, 4.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(4.0, 0.0),
        ];
        let mut out = [Vec2::ZERO; 9];

        let count = Clipper::new()
            .clip_to_polygon(&arrow, &square(-1.0, -1.0, 6.0), &mut out)
            .unwrap();

        assert_eq!(count, 4);
        assert!(!is_polygon_concave(&out[..count]));
        assert!(!out[..count].contains(&Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn small_output_is_rejected() {
        let mut out = [Vec2::ZERO; 3];
        let err = Clipper::new()
            .clip_to_polygon(&square(0.0, 0.0, 1.0), &square(0.0, 0.0, 2.0), &mut out)
            .unwrap_err();
        assert_eq!(
            err,
            ClipError::OutputBufferTooSmall {
                required: 8,
                capacity: 3
            }
        );
    }

    #[test]
    fn fuzz_is_configurable() {
        assert_eq!(Clipper::default().fuzz(), DEFAULT_FUZZ);
        assert_eq!(Clipper::with_fuzz(0.0).fuzz(), 0.0);
    }
}
