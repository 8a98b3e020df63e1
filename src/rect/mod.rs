//! Rectangle algebra.
//!
//! Rectangles come in two layouts and two scalar types:
//!
//! | type        | layout                        | scalar |
//! |-------------|-------------------------------|--------|
//! | [`RectF`]   | origin + size (XYWH)          | `f32`  |
//! | [`RectFRb`] | left/top/right/bottom (LTRB)  | `f32`  |
//! | [`Rect`]    | origin + size (XYWH)          | `i32`  |
//! | [`RectRb`]  | left/top/right/bottom (LTRB)  | `i32`  |
//!
//! # Edge semantics
//!
//! Point containment and rect intersection are half-open on the high edge: a point on the
//! right or bottom edge is outside, and two rects that only share an edge do not intersect.
//! Adjacent tiles therefore never both claim a shared edge. The `*_inclusive` variants treat
//! touching as overlapping, and callers must choose between the two deliberately.
//!
//! An XYWH rect and its LTRB conversion give the same answers for all of these tests.

mod float;
mod int;

pub use float::{bound_points, RectF, RectFRb};
pub use int::{Rect, RectRb};

/// Per-side lengths used to shrink or grow a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Thickness {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Thickness {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }
}

impl std::ops::Neg for Thickness {
    type Output = Thickness;

    fn neg(self) -> Self::Output {
        Self::new(-self.left, -self.top, -self.right, -self.bottom)
    }
}
