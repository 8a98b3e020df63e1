//! Quad against axis-aligned rectangle.
//!
//! Four Sutherland-Hodgman passes, one per rectangle edge, in the order left, top, right,
//! bottom. Each pass reads the previous pass's output from one scratch buffer and writes
//! into the other. A convex quad gains at most one vertex per pass, so the result has
//! between 0 and 8 points.

use smallvec::SmallVec;

use super::{coalesce_duplicates, Polygon};
use crate::error::{ClipError, Result};
use crate::math::constants::MAX_POLYGON_POINTS;
use crate::math::Vec2;
use crate::rect::RectF;

/// One edge of the clip rectangle and the coordinate it sits at.
///
/// Points exactly on an edge are outside, so no pass keeps a zero-width sliver.
#[derive(Clone, Copy, Debug)]
enum RectEdge {
    /// Inside when `x > left`
    Left(f32),
    /// Inside when `y > top`
    Top(f32),
    /// Inside when `x < right`
    Right(f32),
    /// Inside when `y < bottom`
    Bottom(f32),
}

impl RectEdge {
    fn edges_of(rect: &RectF) -> [RectEdge; 4] {
        [
            Self::Left(rect.x),
            Self::Top(rect.y),
            Self::Right(rect.right()),
            Self::Bottom(rect.bottom()),
        ]
    }

    fn is_inside(self, p: Vec2) -> bool {
        match self {
            Self::Left(x) => p.x > x,
            Self::Top(y) => p.y > y,
            Self::Right(x) => p.x < x,
            Self::Bottom(y) => p.y < y,
        }
    }

    /// Where `from -> to` crosses this edge. Only called when exactly one end is inside,
    /// so the segment is never parallel to the edge.
    fn intersect(self, from: Vec2, to: Vec2) -> Vec2 {
        match self {
            Self::Left(x) | Self::Right(x) => {
                let y = from.y + (x - from.x) * (to.y - from.y) / (to.x - from.x);
                Vec2::new(x, y)
            }
            Self::Top(y) | Self::Bottom(y) => {
                let x = from.x + (y - from.y) * (to.x - from.x) / (to.y - from.y);
                Vec2::new(x, y)
            }
        }
    }

    fn clip(self, input: &[Vec2], output: &mut Polygon<Vec2>) {
        output.clear();

        let n = input.len();
        for i in 0..n {
            let current = input[i];
            let next = input[(i + 1) % n];

            let current_inside = self.is_inside(current);
            if self.is_inside(next) {
                if !current_inside {
                    // entering
                    output.push(self.intersect(current, next));
                }
                output.push(next);
            } else if current_inside {
                // leaving
                output.push(self.intersect(current, next));
            }
        }
    }
}

/// Clips the quad `points` to `clip` and writes the result to `out`.
///
/// `out` must hold at least 8 points. Returns the number of points written, which is 0 when
/// the quad lies entirely outside `clip`.
pub fn clip_to_rectangle(points: &[Vec2; 4], clip: &RectF, out: &mut [Vec2]) -> Result<usize> {
    let required = points.len() + 4;
    if out.len() < required {
        log::debug!(
            "rectangle clip output holds {} points, needs {required}",
            out.len()
        );
        return Err(ClipError::OutputBufferTooSmall {
            required,
            capacity: out.len(),
        });
    }

    let mut input: Polygon<Vec2> = SmallVec::from_slice(points);
    let mut output: Polygon<Vec2> = SmallVec::with_capacity(MAX_POLYGON_POINTS);

    for edge in RectEdge::edges_of(clip) {
        edge.clip(&input, &mut output);
        std::mem::swap(&mut input, &mut output);
        if input.is_empty() {
            return Ok(0);
        }
    }

    coalesce_duplicates(&input, out)
}
