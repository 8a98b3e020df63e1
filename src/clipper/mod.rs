//! Polygon clipping.
//!
//! Both clippers are Sutherland-Hodgman: the subject is clipped against one edge at a time,
//! ping-ponging between two scratch buffers that live on the stack for typical sizes.
//!
//! - [`rectangle`]: a quad against an axis-aligned rectangle.
//! - [`polygon`]: any convex subject against any convex 2D polygon, for plain, homogeneous
//!   and AA-masked points.
//!
//! Results are written to a caller-supplied buffer, and each call returns the number of
//! points used. Adjacent near-duplicate points are coalesced before returning.

pub mod intersect;
pub mod polygon;
pub mod rectangle;

use smallvec::SmallVec;

use crate::error::{ClipError, Result};
use crate::math::constants::MAX_POLYGON_POINTS;
use crate::math::{is_close, Vec2};
use crate::point::{ClipPoint, ScreenPoint};

pub use intersect::{intersect_segment_with_line, pull_to_01};
pub use polygon::Clipper;
pub use rectangle::clip_to_rectangle;

/// Inline polygon storage, sized for a clipped quad.
pub type Polygon<P> = SmallVec<[P; MAX_POLYGON_POINTS]>;

/// Clips `subject` to `clip` with the default tolerance.
///
/// See [`Clipper::clip_to_polygon`].
pub fn clip_to_polygon<P: ClipPoint>(subject: &[P], clip: &[Vec2], out: &mut [P]) -> Result<usize> {
    Clipper::default().clip_to_polygon(subject, clip, out)
}

/// Copies `points` into `out`, dropping each point that sits on top of its successor.
fn coalesce_duplicates<P: ScreenPoint>(points: &[P], out: &mut [P]) -> Result<usize> {
    let n = points.len();
    let mut count = 0;

    for (i, point) in points.iter().enumerate() {
        let a = point.screen();
        let b = points[(i + 1) % n].screen();
        if is_close(a.x, b.x) && is_close(a.y, b.y) {
            continue;
        }

        let Some(slot) = out.get_mut(count) else {
            return Err(ClipError::OutputBufferTooSmall {
                required: n,
                capacity: out.len(),
            });
        };
        *slot = *point;
        count += 1;
    }

    Ok(count)
}
