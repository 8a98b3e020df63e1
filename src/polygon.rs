//! Polygon topology predicates.
//!
//! # Winding convention
//!
//! Polygons are expected in counter-clockwise order on a y-down screen. Equivalently, the
//! cross product of each edge with the next is `<= 0`:
//!
//! ```text
//!   (0,0) ----------- (1,0)        +x →
//!     |                 ^          +y ↓
//!     v                 |
//!   (0,1) ----------> (1,1)        (0,0) → (0,1) → (1,1) → (1,0)
//! ```
//!
//! With that winding, a point is on the inside of edge `a → b` when
//! `(p - a) × (b - a) >= 0`. All predicates here, the hull and the clipper share this sign
//! convention. Use [`ensure_ccw_winding_order`] to normalise input of unknown orientation.

use crate::math::Vec2;
use crate::point::ScreenPoint;

/// Which side of an edge a set of points lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Every point is strictly inside the edge (`+1`).
    Inside,
    /// Every point is strictly outside the edge (`-1`).
    Outside,
    /// Points on both sides, or any point exactly on the line (`0`).
    Straddling,
}

impl Side {
    pub fn signum(self) -> i32 {
        match self {
            Side::Inside => 1,
            Side::Outside => -1,
            Side::Straddling => 0,
        }
    }
}

/// Half-plane test shared by point containment and clipping.
///
/// `vec_point` runs from the start of the edge to the point being tested. With
/// `exclude_zero` set, a point exactly on the line counts as outside.
pub fn is_inside(vec_point: Vec2, vec_edge: Vec2, exclude_zero: bool) -> bool {
    let diff = vec_point.x * vec_edge.y - vec_edge.x * vec_point.y;
    !(diff < 0.0 || (diff == 0.0 && exclude_zero))
}

/// Reverses `points` in place if their winding is clockwise. Returns whether it flipped.
///
/// Only the first three points are inspected, so the polygon must already have a
/// consistent winding. Self-intersecting input is not repaired.
pub fn ensure_ccw_winding_order<P: ScreenPoint>(points: &mut [P]) -> bool {
    if points.len() <= 2 {
        return false;
    }

    let vec1 = points[1].screen() - points[0].screen();
    let vec2 = points[2].screen() - points[1].screen();

    if vec1.cross_z(vec2) > 0.0 {
        points.reverse();
        return true;
    }
    false
}

/// Returns true if any vertex of a counter-clockwise polygon turns the wrong way.
pub fn is_polygon_concave<P: ScreenPoint>(points: &[P]) -> bool {
    let n = points.len();
    if n <= 3 {
        return false;
    }

    (0..n).any(|i| {
        let a = points[i].screen();
        let b = points[(i + 1) % n].screen();
        let c = points[(i + 2) % n].screen();
        (b - a).cross_z(b - c) < 0.0
    })
}

/// Classifies every vertex of `poly` against the line through `point` along `edge`.
///
/// A vertex exactly on the line makes the whole result [`Side::Straddling`]. Overlap
/// tests built on this therefore report touching polygons as overlapping rather than
/// culling something visible. An empty `poly` is [`Side::Outside`].
pub fn which_side<P: ScreenPoint>(poly: &[P], point: Vec2, edge: Vec2) -> Side {
    // outward normal of the edge for a ccw polygon
    let normal = Vec2::new(edge.y, -edge.x);

    let mut positive = 0usize;
    let mut negative = 0usize;

    for vertex in poly {
        let dot = (vertex.screen() - point).dot(normal);
        if dot > 0.0 {
            positive += 1;
        } else if dot < 0.0 {
            negative += 1;
        } else {
            return Side::Straddling;
        }

        if positive > 0 && negative > 0 {
            return Side::Straddling;
        }
    }

    if positive > 0 {
        Side::Inside
    } else {
        Side::Outside
    }
}

/// Separating-axis overlap test for two convex, counter-clockwise polygons.
pub fn do_polygons_intersect(a: &[Vec2], b: &[Vec2]) -> bool {
    !has_separating_edge(a, b) && !has_separating_edge(b, a)
}

fn has_separating_edge(edges_of: &[Vec2], others: &[Vec2]) -> bool {
    let n = edges_of.len();
    (0..n).any(|i| {
        let edge = edges_of[(i + 1) % n] - edges_of[i];
        which_side(others, edges_of[i], edge) == Side::Outside
    })
}

/// Returns true if every vertex of `inner` is strictly inside every edge of `outer`.
///
/// Both polygons must be convex and counter-clockwise. `inner` may be homogeneous; its
/// vertices are compared by screen position.
pub fn is_entirely_contained<P: ScreenPoint>(inner: &[P], outer: &[Vec2]) -> bool {
    let n = outer.len();
    (0..n).all(|i| {
        let edge = outer[(i + 1) % n] - outer[i];
        which_side(inner, outer[i], edge) == Side::Inside
    })
}

/// Point-in-convex-polygon test. Points on an edge count as inside.
pub fn is_point_inside_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    let n = polygon.len();
    (0..n).all(|i| {
        let vec_point = point - polygon[i];
        let vec_edge = polygon[(i + 1) % n] - polygon[i];
        is_inside(vec_point, vec_edge, false)
    })
}
