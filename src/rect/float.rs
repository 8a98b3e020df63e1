use crate::math::{Vec2, Vec4};
use crate::point::ScreenPoint;
use crate::polygon::ensure_ccw_winding_order;

use super::Thickness;

/// Floating point rectangle stored as origin + size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectF {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Floating point rectangle stored as left/top/right/bottom edges.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectFRb {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// Far edge of a span. A span stretched from -inf to +inf sums to NaN; such an edge is
/// pinned to `f32::MAX` so the arithmetic that follows stays finite.
fn far_edge(origin: f32, size: f32) -> f32 {
    let edge = origin + size;
    if edge.is_nan() {
        f32::MAX
    } else {
        edge
    }
}

impl RectF {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The zero rect.
    pub const fn empty() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// A clip rect that clips nothing we can render.
    ///
    /// Uses extreme finite values rather than IEEE infinity so sums stay finite.
    pub fn infinite() -> Self {
        Self::new(f32::MIN / 2.0, f32::MIN / 2.0, f32::MAX, f32::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn is_infinite(&self) -> bool {
        self.x <= f32::MIN / 2.0
            || self.y <= f32::MIN / 2.0
            || self.width >= f32::MAX
            || self.height >= f32::MAX
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn to_rb(&self) -> RectFRb {
        RectFRb::new(self.x, self.y, self.right(), self.bottom())
    }

    /// Grows `self` to the bounding box of `self` and `other`.
    ///
    /// An empty `other` leaves `self` unchanged; an empty `self` becomes `other`.
    pub fn union(&mut self, other: &RectF) {
        if !(other.width > 0.0 && other.height > 0.0) {
            return;
        }
        if self.is_empty() {
            *self = *other;
            return;
        }

        let right = far_edge(self.x, self.width).max(far_edge(other.x, other.width));
        let bottom = far_edge(self.y, self.height).max(far_edge(other.y, other.height));

        self.x = self.x.min(other.x);
        self.y = self.y.min(other.y);
        self.width = right - self.x;
        self.height = bottom - self.y;
    }

    /// Shrinks `self` to its overlap with `other`.
    ///
    /// Returns false and zeroes `self` when the overlap is empty.
    pub fn intersect(&mut self, other: &RectF) -> bool {
        let right = far_edge(self.x, self.width).min(far_edge(other.x, other.width));
        let bottom = far_edge(self.y, self.height).min(far_edge(other.y, other.height));

        self.x = self.x.max(other.x);
        self.y = self.y.max(other.y);

        if self.x < right && self.y < bottom {
            self.width = right - self.x;
            self.height = bottom - self.y;
            true
        } else {
            *self = Self::empty();
            false
        }
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }

    pub fn contains_point_inclusive(&self, point: Vec2) -> bool {
        self.to_rb().contains_point_inclusive(point)
    }

    /// Inclusive containment: a rect contains itself.
    pub fn contains_rect(&self, contained: &RectF) -> bool {
        self.to_rb().contains_rect(&contained.to_rb())
    }

    /// Half-open overlap test. Empty rects never intersect anything.
    pub fn intersects(&self, other: &RectF) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// Like [`RectF::intersects`], but rects that only touch count as intersecting.
    pub fn intersects_inclusive(&self, other: &RectF) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        self.x <= other.x + other.width
            && self.x + self.width >= other.x
            && self.y <= other.y + other.height
            && self.y + self.height >= other.y
    }

    pub fn is_contained_by(&self, container: &RectF) -> bool {
        self.x >= container.x
            && self.y >= container.y
            && self.x + self.width <= container.x + container.width
            && self.y + self.height <= container.y + container.height
    }

    /// Moves each edge inward by the matching side of `margin`. Size never goes negative.
    pub fn shrink_by_thickness(&self, margin: &Thickness) -> RectF {
        RectF::new(
            self.x + margin.left,
            self.y + margin.top,
            (self.width - (margin.left + margin.right)).max(0.0),
            (self.height - (margin.top + margin.bottom)).max(0.0),
        )
    }

    pub fn enlarge_by_thickness(&self, margin: &Thickness) -> RectF {
        self.shrink_by_thickness(&-*margin)
    }

    /// Corners in counter-clockwise order: bottom-right, top-right, top-left, bottom-left.
    pub fn to_points_ccw(&self) -> [Vec2; 4] {
        let (l, t, r, b) = (self.x, self.y, self.right(), self.bottom());
        [
            Vec2::new(r, b),
            Vec2::new(r, t),
            Vec2::new(l, t),
            Vec2::new(l, b),
        ]
    }

    /// [`RectF::to_points_ccw`] lifted to homogeneous points on the z=0 plane.
    pub fn to_points_ccw_homogeneous(&self) -> [Vec4; 4] {
        self.to_points_ccw().map(Vec4::from_vec2)
    }

    /// Recovers a rect from 4 counter-clockwise corners, if they form an axis-aligned
    /// rectangle.
    pub fn from_points_ccw(points: &[Vec2]) -> Option<RectF> {
        let [p0, p1, p2, p3] = points else {
            return None;
        };

        let vertical_first = p2.x == p1.x && p3.x == p0.x && p2.y == p3.y && p1.y == p0.y;
        let horizontal_first = p2.y == p1.y && p3.y == p0.y && p2.x == p3.x && p1.x == p0.x;
        if !(vertical_first || horizontal_first) {
            return None;
        }

        let x = p2.x.min(p0.x);
        let y = p2.y.min(p0.y);
        Some(RectF::new(x, y, p2.x.max(p0.x) - x, p2.y.max(p0.y) - y))
    }
}

impl RectFRb {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn empty() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// A rect marked as not yet computed: every edge is `+inf`.
    pub const fn invalid() -> Self {
        Self::new(f32::INFINITY, f32::INFINITY, f32::INFINITY, f32::INFINITY)
    }

    pub fn is_invalid(&self) -> bool {
        self.left == f32::INFINITY
            && self.top == f32::INFINITY
            && self.right == f32::INFINITY
            && self.bottom == f32::INFINITY
    }

    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn to_wh(&self) -> RectF {
        RectF::new(self.left, self.top, self.width(), self.height())
    }

    /// Grows `self` to the bounding box of `self` and `other`, ignoring empty rects.
    pub fn union(&mut self, other: &RectFRb) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            *self = *other;
            return;
        }
        self.update_bounds(other);
    }

    /// Grows `self` to cover `other`'s edges even when either rect is empty.
    pub fn update_bounds(&mut self, other: &RectFRb) {
        self.left = self.left.min(other.left);
        self.right = self.right.max(other.right);
        self.top = self.top.min(other.top);
        self.bottom = self.bottom.max(other.bottom);
    }

    /// Shrinks `self` to its overlap with `other`.
    ///
    /// Returns false and zeroes `self` when the overlap is empty.
    pub fn intersect(&mut self, other: &RectFRb) -> bool {
        let right = self.right.min(other.right);
        let bottom = self.bottom.min(other.bottom);

        self.left = self.left.max(other.left);
        self.top = self.top.max(other.top);

        if self.left < right && self.top < bottom {
            self.right = right;
            self.bottom = bottom;
            true
        } else {
            *self = Self::empty();
            false
        }
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left && point.y >= self.top && point.x < self.right && point.y < self.bottom
    }

    pub fn contains_point_inclusive(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.y >= self.top
            && point.x <= self.right
            && point.y <= self.bottom
    }

    /// Inclusive containment: a rect contains itself.
    pub fn contains_rect(&self, contained: &RectFRb) -> bool {
        self.left <= contained.left
            && self.top <= contained.top
            && self.right >= contained.right
            && self.bottom >= contained.bottom
    }

    pub fn intersects(&self, other: &RectFRb) -> bool {
        self.left < other.right
            && self.top < other.bottom
            && self.right > other.left
            && self.bottom > other.top
    }

    pub fn intersects_inclusive(&self, other: &RectFRb) -> bool {
        self.left <= other.right
            && self.top <= other.bottom
            && self.right >= other.left
            && self.bottom >= other.top
    }

    /// Snaps outward to whole numbers. Never shrinks the rect.
    pub fn inflate(&mut self) {
        self.left = self.left.floor();
        self.top = self.top.floor();
        self.right = self.right.ceil();
        self.bottom = self.bottom.ceil();
    }

    pub fn scale(&mut self, factor: f32) {
        self.left *= factor;
        self.top *= factor;
        self.right *= factor;
        self.bottom *= factor;
    }

    /// Corners starting at top-left, normalised to counter-clockwise winding.
    pub fn to_points(&self) -> [Vec2; 4] {
        let mut points = [
            Vec2::new(self.left, self.top),
            Vec2::new(self.left, self.bottom),
            Vec2::new(self.right, self.bottom),
            Vec2::new(self.right, self.top),
        ];
        ensure_ccw_winding_order(&mut points);
        points
    }
}

impl From<RectFRb> for RectF {
    fn from(rect: RectFRb) -> Self {
        rect.to_wh()
    }
}

impl From<RectF> for RectFRb {
    fn from(rect: RectF) -> Self {
        rect.to_rb()
    }
}

/// Screen-space bounding box of `points`. An empty slice gives the zero rect.
pub fn bound_points<P: ScreenPoint>(points: &[P]) -> RectFRb {
    let Some((first, rest)) = points.split_first() else {
        return RectFRb::empty();
    };

    let start = first.screen();
    let mut bounds = RectFRb::new(start.x, start.y, start.x, start.y);
    for point in rest {
        let p = point.screen();
        bounds.left = bounds.left.min(p.x);
        bounds.right = bounds.right.max(p.x);
        bounds.top = bounds.top.min(p.y);
        bounds.bottom = bounds.bottom.max(p.y);
    }
    bounds
}
